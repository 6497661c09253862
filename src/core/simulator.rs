use super::config::{SimulationConfig, WorkerOrder};
use super::consumer::{Consumer, TallyConsumer};
use super::conveyor::Conveyor;
use super::producer::{Producer, RandomProducer};
use super::worker::Worker;
use super::workstation::{StationHandle, Workstation};
use log::debug;

/// The production line: one conveyor, one workstation per slot, and two
/// workers (front and back of the belt) sharing each station.
///
/// Everything runs on a single logical thread. A tick is an atomic batch of
/// sub-steps: advance the belt, clear every station latch, then process the
/// workers station by station in a fixed, configurable order.
pub struct Simulator<P: Producer, C: Consumer> {
    conveyor: Conveyor,
    producer: P,
    consumer: C,
    stations: Vec<Workstation>,
    front_workers: Vec<Worker>,
    back_workers: Vec<Worker>,
    worker_order: WorkerOrder,
    current_tick: u64,
}

impl Simulator<RandomProducer, TallyConsumer> {
    /// Build a line with the stock collaborators: a seeded random producer
    /// and a tallying consumer.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, String> {
        let producer = RandomProducer::from_seed(config.random_seed);
        Self::with_parts(config, producer, TallyConsumer::new())
    }
}

impl<P: Producer, C: Consumer> Simulator<P, C> {
    /// Build a line with injected producer and consumer collaborators.
    pub fn with_parts(config: &SimulationConfig, producer: P, consumer: C) -> Result<Self, String> {
        config.validate()?;
        let stations = (0..config.belt_length).map(Workstation::new).collect();
        let front_workers = (0..config.belt_length)
            .map(|_| Worker::new(config.assembly_time))
            .collect();
        let back_workers = (0..config.belt_length)
            .map(|_| Worker::new(config.assembly_time))
            .collect();
        Ok(Self {
            conveyor: Conveyor::new(config.belt_length),
            producer,
            consumer,
            stations,
            front_workers,
            back_workers,
            worker_order: config.worker_order,
            current_tick: 0,
        })
    }

    /// One time unit's worth of operations.
    ///
    /// Sub-step order is fixed: belt advance first, then every station latch
    /// resets, then for each station index ascending the two paired workers
    /// run in the configured order. The worker that runs first wins any
    /// contested access at its station for this tick.
    pub fn tick(&mut self) {
        self.current_tick += 1;
        debug!("=== Tick {} ===", self.current_tick);

        self.conveyor
            .tick(&mut self.producer, &mut self.consumer);

        for station in &mut self.stations {
            station.tick();
        }

        for i in 0..self.stations.len() {
            let (first_row, second_row) = match self.worker_order {
                WorkerOrder::FrontFirst => (&mut self.front_workers, &mut self.back_workers),
                WorkerOrder::BackFirst => (&mut self.back_workers, &mut self.front_workers),
            };
            first_row[i].tick(&mut StationHandle {
                station: &mut self.stations[i],
                belt: &mut self.conveyor,
            });
            second_row[i].tick(&mut StationHandle {
                station: &mut self.stations[i],
                belt: &mut self.conveyor,
            });
        }
    }

    /// Run the simulation for `ticks` steps. No early termination.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn conveyor(&self) -> &Conveyor {
        &self.conveyor
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn front_workers(&self) -> &[Worker] {
        &self.front_workers
    }

    pub fn back_workers(&self) -> &[Worker] {
        &self.back_workers
    }
}
