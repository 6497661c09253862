use super::consumer::Consumer;
use super::item::Item;
use super::producer::Producer;
use log::trace;
use std::collections::VecDeque;

/// A conveyor belt of a fixed number of slots.
///
/// Items are fed onto slot 0 from the producer at one per tick and fall off
/// the far end into the consumer. The belt advances one slot per tick.
pub struct Conveyor {
    slots: VecDeque<Item>,
    length: usize,
}

impl Conveyor {
    /// Create a belt of `length` slots, all empty.
    pub fn new(length: usize) -> Self {
        Self {
            slots: VecDeque::from(vec![Item::Empty; length]),
            length,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    /// Advance the belt one slot, consuming at the exit and producing at the
    /// feed end.
    ///
    /// Panics if the slot count drifts from the configured length; that is a
    /// programming error, not a runtime condition.
    pub fn tick(&mut self, producer: &mut dyn Producer, consumer: &mut dyn Consumer) {
        let off_the_end = self.slots.pop_back().expect("conveyor has no slots");
        trace!("belt exit: {}", off_the_end);
        consumer.consume(off_the_end);

        let fed = producer.next_item();
        trace!("belt feed: {}", fed);
        self.slots.push_front(fed);

        assert_eq!(
            self.slots.len(),
            self.length,
            "conveyor slot count drifted from configured length"
        );
    }

    /// The item at slot `i`, without removing it.
    pub fn peek(&self, i: usize) -> Item {
        self.slots[i]
    }

    /// Remove and return the item at slot `i`, leaving the slot empty.
    /// Returns `Empty` (and changes nothing) if the slot was already empty.
    pub fn take(&mut self, i: usize) -> Item {
        let item = self.slots[i];
        self.slots[i] = Item::Empty;
        item
    }

    /// Place `item` at slot `i`. Returns false (and changes nothing) if the
    /// slot is occupied.
    pub fn put(&mut self, i: usize, item: Item) -> bool {
        if self.slots[i] != Item::Empty {
            return false;
        }
        self.slots[i] = item;
        true
    }

    /// All slots in belt order, feed end first.
    pub fn slots(&self) -> impl Iterator<Item = Item> + '_ {
        self.slots.iter().copied()
    }
}
