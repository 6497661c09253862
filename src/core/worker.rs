use super::item::Item;
use super::workstation::BeltAccess;

/// A worker's two hands: fixed capacity of two held items.
///
/// Modelled as two explicit optional slots so membership and removal stay
/// O(1) and the capacity bound is structural.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hands {
    slots: [Option<Item>; 2],
}

impl Hands {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn holds(&self, item: Item) -> bool {
        self.slots.contains(&Some(item))
    }

    pub fn item_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Place `item` in the first free hand. False when both hands are full.
    pub fn grab(&mut self, item: Item) -> bool {
        for slot in &mut self.slots {
            if slot.is_none() {
                *slot = Some(item);
                return true;
            }
        }
        false
    }

    /// Drop the first held copy of `item`. False when it was not held.
    pub fn release(&mut self, item: Item) -> bool {
        for slot in &mut self.slots {
            if *slot == Some(item) {
                *slot = None;
                return true;
            }
        }
        false
    }

    /// Hand contents in slot order, for rendering.
    pub fn slots(&self) -> [Option<Item>; 2] {
        self.slots
    }
}

/// What a worker is up to, derived from its hands and countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerPhase {
    /// Watching the belt for missing components.
    Gathering,
    /// Both components held, build in progress.
    Assembling,
    /// Finished product in hand, waiting for a free slot.
    Delivering,
}

/// A worker with two hands that takes `assembly_time` ticks to turn a
/// component A plus a component B into a finished product.
pub struct Worker {
    hands: Hands,
    assembly_time: u32,
    /// `None` while not assembling; `Some(n)` means n ticks of build left.
    countdown: Option<u32>,
}

impl Worker {
    pub fn new(assembly_time: u32) -> Self {
        Self {
            hands: Hands::empty(),
            assembly_time,
            countdown: None,
        }
    }

    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    pub fn countdown(&self) -> Option<u32> {
        self.countdown
    }

    pub fn phase(&self) -> WorkerPhase {
        if self.hands.holds(Item::Product) {
            WorkerPhase::Delivering
        } else if self.countdown.is_some() {
            WorkerPhase::Assembling
        } else {
            WorkerPhase::Gathering
        }
    }

    fn needs(&self, component: Item) -> bool {
        !self.hands.holds(component)
    }

    /// All inputs held and no finished product blocking the hands.
    fn can_assemble(&self) -> bool {
        !self.hands.holds(Item::Product)
            && self.hands.holds(Item::ComponentA)
            && self.hands.holds(Item::ComponentB)
    }

    /// One tick of this worker's life.
    ///
    /// Exactly one of the mutually exclusive branches runs: deliver a held
    /// product, or watch the belt for whichever components are still
    /// missing. The assembly check runs unconditionally afterwards because
    /// an acquisition this tick can start the build this same tick.
    pub fn tick(&mut self, station: &mut dyn BeltAccess) {
        if self.hands.holds(Item::Product) {
            if station.put(Item::Product) {
                self.hands.release(Item::Product);
            }
        } else if self.needs(Item::ComponentA) && self.needs(Item::ComponentB) {
            if station.peek().is_component() {
                self.grab_from(station);
            }
        } else if self.needs(Item::ComponentA) {
            if station.peek() == Item::ComponentA {
                self.grab_from(station);
            }
        } else if self.needs(Item::ComponentB) {
            if station.peek() == Item::ComponentB {
                self.grab_from(station);
            }
        }

        if self.can_assemble() {
            self.step_assembly();
        }
    }

    /// Take whatever the peek showed. A busy station (`None`) or an empty
    /// slot yields nothing; the worker just waits for the next tick.
    fn grab_from(&mut self, station: &mut dyn BeltAccess) {
        if let Some(item) = station.take() {
            if item.is_component() {
                self.hands.grab(item);
            }
        }
    }

    /// Advance the build: start it, make progress, or complete it.
    /// Completion swaps both components for a product within this one tick.
    fn step_assembly(&mut self) {
        match self.countdown {
            None => self.countdown = Some(self.assembly_time),
            Some(1) => {
                self.hands.release(Item::ComponentA);
                self.hands.release(Item::ComponentB);
                self.hands.grab(Item::Product);
                self.countdown = None;
            }
            Some(remaining) => self.countdown = Some(remaining - 1),
        }
    }
}
