//! Text rendering of the production line, for the human-readable trace.
//!
//! Layers on top of the core's read accessors only; nothing here mutates
//! simulation state.

use super::consumer::TallyConsumer;
use super::conveyor::Conveyor;
use super::item::Item;
use super::producer::Producer;
use super::simulator::Simulator;
use super::worker::Worker;

/// Three-character worker cell: left hand, state, right hand.
/// The state column shows the assembly countdown, or `v` when not building.
pub fn worker_cell(worker: &Worker) -> String {
    let [left, right] = worker.hands().slots();
    let state = match worker.countdown() {
        Some(remaining) => remaining.to_string(),
        None => "v".to_string(),
    };
    format!(
        "{}{}{}",
        left.unwrap_or(Item::Empty),
        state,
        right.unwrap_or(Item::Empty)
    )
}

/// One row of worker cells, indented to line up with the belt slots.
pub fn worker_row(workers: &[Worker]) -> String {
    let cells: Vec<String> = workers.iter().map(worker_cell).collect();
    format!("    {}", cells.join(" "))
}

/// The belt line: upcoming item, slot contents, and the consumed-item trail.
pub fn belt_row(
    upcoming: Option<Item>,
    belt: &Conveyor,
    trail: impl Iterator<Item = Item>,
) -> String {
    let mut line = String::new();
    if let Some(item) = upcoming {
        line.push_str(&format!("{}> ", item));
    }
    line.push('|');
    for slot in belt.slots() {
        line.push_str(&format!("{:^3}|", slot.to_string()));
    }
    let consumed: Vec<String> = trail.map(|item| item.to_string()).collect();
    line.push_str(&format!(" -> {}", consumed.join(",")));
    line
}

/// Full frame: front worker row, belt, back worker row.
pub fn frame<P: Producer>(sim: &Simulator<P, TallyConsumer>) -> String {
    format!(
        "{}\n{}\n{}",
        worker_row(sim.front_workers()),
        belt_row(sim.producer().preview(), sim.conveyor(), sim.consumer().output()),
        worker_row(sim.back_workers())
    )
}

/// End-of-run results in the shape the demo prints.
pub fn summary(consumer: &TallyConsumer) -> String {
    format!(
        "Results:\n  Finished products: {}\n  Unused components. A: {}, B: {}",
        consumer.count(Item::Product),
        consumer.count(Item::ComponentA),
        consumer.count(Item::ComponentB)
    )
}
