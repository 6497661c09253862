use super::item::Item;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of items for the feed end of the conveyor.
///
/// Called exactly once per tick by the conveyor; must always yield a value
/// (`Item::Empty` stands in for "nothing this tick").
pub trait Producer {
    fn next_item(&mut self) -> Item;

    /// The item the next `next_item` call will return, when the producer
    /// knows it ahead of time. Only used for rendering.
    fn preview(&self) -> Option<Item> {
        None
    }
}

/// Draws uniformly from component A, component B and an empty space.
///
/// Keeps the upcoming draw one step ahead so the renderer can show what is
/// about to arrive on the belt. Seeded for reproducible runs.
pub struct RandomProducer {
    rng: StdRng,
    upcoming: Item,
}

impl RandomProducer {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let upcoming = Self::draw(&mut rng);
        Self { rng, upcoming }
    }

    fn draw(rng: &mut StdRng) -> Item {
        match rng.gen_range(0..3) {
            0 => Item::ComponentA,
            1 => Item::ComponentB,
            _ => Item::Empty,
        }
    }
}

impl Producer for RandomProducer {
    fn next_item(&mut self) -> Item {
        let result = self.upcoming;
        self.upcoming = Self::draw(&mut self.rng);
        result
    }

    fn preview(&self) -> Option<Item> {
        Some(self.upcoming)
    }
}

/// Yields a scripted sequence of items, then `Empty` forever.
///
/// The deterministic producer used by tests and reproducibility checks.
pub struct FixedProducer {
    items: VecDeque<Item>,
}

impl FixedProducer {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Items not yet handed to the conveyor.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

impl Producer for FixedProducer {
    fn next_item(&mut self) -> Item {
        self.items.pop_front().unwrap_or(Item::Empty)
    }

    fn preview(&self) -> Option<Item> {
        Some(self.items.front().copied().unwrap_or(Item::Empty))
    }
}
