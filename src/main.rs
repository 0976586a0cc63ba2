use anyhow::{Context, Result};
use contagion_lib::model::config::SimulationConfig;
use contagion_lib::model::{init_logging, Simulation};

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    init_logging();

    let config = SimulationConfig::load(CONFIG_PATH);
    let max_ticks = config.max_ticks;
    let mut sim = Simulation::from_config(config).context("Failed to build simulation")?;

    println!(
        "Running {} cells headless (limit {} ticks)...",
        sim.population(),
        max_ticks
    );

    let outcome = sim.run_until_complete(max_ticks);
    let census = sim.census();
    match outcome {
        Some(tick) => println!("Outbreak over after {tick} ticks."),
        None => println!("Stopped at tick {} with infections remaining.", sim.tick()),
    }
    println!(
        "{}",
        serde_json::to_string(&census).context("Failed to encode census")?
    );

    Ok(())
}
