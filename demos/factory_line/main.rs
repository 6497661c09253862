use beltline::core::render;
use beltline::{SimulationConfig, Simulator};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let show_steps = std::env::args().any(|arg| arg == "--show-steps");
    let config = SimulationConfig::default().with_show_steps(show_steps);
    let mut sim = Simulator::from_config(&config)?;

    info!("Running simulator with {} steps", config.ticks);
    for step in 0..config.ticks {
        sim.tick();
        if config.show_steps {
            println!("Step {}:", step);
            println!("{}", render::frame(&sim));
        }
    }

    println!("{}", render::summary(sim.consumer()));
    Ok(())
}
