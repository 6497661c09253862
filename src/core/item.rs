use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that can occupy a conveyor slot, including an empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    ComponentA,
    ComponentB,
    Product,
    Empty,
}

impl Item {
    /// True for the raw components a worker may pick up off the belt.
    /// Finished products and empty spaces are never acquired.
    pub fn is_component(self) -> bool {
        matches!(self, Item::ComponentA | Item::ComponentB)
    }

    /// Single-character symbol used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            Item::ComponentA => 'A',
            Item::ComponentB => 'B',
            Item::Product => 'P',
            Item::Empty => '_',
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
