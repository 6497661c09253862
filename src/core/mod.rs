pub mod config;
pub mod consumer;
pub mod conveyor;
pub mod item;
pub mod producer;
pub mod render;
pub mod simulator;
pub mod worker;
pub mod workstation;

#[cfg(test)]
mod tests;
