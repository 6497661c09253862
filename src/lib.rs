pub mod core;

// Re-export commonly used types
pub use crate::core::config::{SimulationConfig, WorkerOrder};
pub use crate::core::consumer::{Consumer, TallyConsumer};
pub use crate::core::item::Item;
pub use crate::core::producer::{FixedProducer, Producer, RandomProducer};
pub use crate::core::simulator::Simulator;
