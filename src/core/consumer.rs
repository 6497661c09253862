use super::item::Item;
use std::collections::{HashMap, VecDeque};

/// Sink for whatever falls off the exit end of the conveyor.
///
/// Called exactly once per tick with the item from the final slot, which may
/// be `Empty`. The core makes no assumption about what the sink does with it.
pub trait Consumer {
    fn consume(&mut self, item: Item);
}

/// Counts every item kind that reaches the end of the belt and keeps the
/// consumed items most-recent-first for the trail rendering.
#[derive(Debug, Default)]
pub struct TallyConsumer {
    counts: HashMap<Item, u64>,
    output: VecDeque<Item>,
}

impl TallyConsumer {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many items of this kind have fallen off the belt, empties included.
    pub fn count(&self, item: Item) -> u64 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    /// Consumed items, most recent first.
    pub fn output(&self) -> impl Iterator<Item = Item> + '_ {
        self.output.iter().copied()
    }
}

impl Consumer for TallyConsumer {
    fn consume(&mut self, item: Item) {
        self.output.push_front(item);
        *self.counts.entry(item).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_every_kind() {
        let mut consumer = TallyConsumer::new();
        for item in [
            Item::ComponentA,
            Item::Empty,
            Item::ComponentA,
            Item::Product,
        ] {
            consumer.consume(item);
        }
        assert_eq!(consumer.count(Item::ComponentA), 2);
        assert_eq!(consumer.count(Item::ComponentB), 0);
        assert_eq!(consumer.count(Item::Product), 1);
        assert_eq!(consumer.count(Item::Empty), 1);
    }

    #[test]
    fn test_output_is_most_recent_first() {
        let mut consumer = TallyConsumer::new();
        consumer.consume(Item::ComponentA);
        consumer.consume(Item::ComponentB);
        let trail: Vec<Item> = consumer.output().collect();
        assert_eq!(trail, vec![Item::ComponentB, Item::ComponentA]);
    }
}
