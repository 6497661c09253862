use super::conveyor::Conveyor;
use super::item::Item;
use log::trace;

/// Controls shared access to one conveyor slot.
///
/// Two workers share each station; only the first successful take-or-put per
/// tick is allowed, latched by the `busy` flag. The station never owns an
/// item, it only arbitrates access to the belt.
pub struct Workstation {
    slot: usize,
    busy: bool,
}

impl Workstation {
    pub fn new(slot: usize) -> Self {
        Self { slot, busy: false }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Clear the busy latch. Must run exactly once per simulation tick,
    /// before any worker at this station is processed.
    pub fn tick(&mut self) {
        self.busy = false;
    }

    /// The item currently in this station's slot. Never touches the latch.
    pub fn peek(&self, belt: &Conveyor) -> Item {
        belt.peek(self.slot)
    }

    /// Take whatever is in this station's slot.
    ///
    /// `None` means the station was already used this tick (contention), as
    /// opposed to `Some(Item::Empty)` which means the slot had nothing on it.
    pub fn take(&mut self, belt: &mut Conveyor) -> Option<Item> {
        if self.busy {
            trace!("station {}: take refused, busy", self.slot);
            return None;
        }
        self.busy = true;
        Some(belt.take(self.slot))
    }

    /// Attempt to place `item` in this station's slot.
    ///
    /// The latch is only set when the put lands. A put refused because the
    /// slot was occupied leaves the station's single access for this tick
    /// unspent, so the paired worker can still act.
    pub fn put(&mut self, belt: &mut Conveyor, item: Item) -> bool {
        if self.busy {
            trace!("station {}: put refused, busy", self.slot);
            return false;
        }
        let landed = belt.put(self.slot, item);
        if landed {
            self.busy = true;
        }
        landed
    }
}

/// The belt operations a worker performs through its station.
///
/// Workers are written against this seam rather than a concrete station so
/// the state machine can be exercised with a scripted stand-in.
pub trait BeltAccess {
    fn peek(&self) -> Item;
    /// `None` signals contention (station already used this tick).
    fn take(&mut self) -> Option<Item>;
    fn put(&mut self, item: Item) -> bool;
}

/// Couples one station with the belt for the duration of one worker action.
pub struct StationHandle<'a> {
    pub station: &'a mut Workstation,
    pub belt: &'a mut Conveyor,
}

impl BeltAccess for StationHandle<'_> {
    fn peek(&self) -> Item {
        self.station.peek(self.belt)
    }

    fn take(&mut self) -> Option<Item> {
        self.station.take(self.belt)
    }

    fn put(&mut self, item: Item) -> bool {
        self.station.put(self.belt, item)
    }
}
