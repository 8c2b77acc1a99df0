//! Headless batch runner
//!
//! Runs the simulation without any interaction, logging a summary every few
//! ticks. Useful for watching convergence behavior and for profiling.

use clap::Parser;
use goldrush::core::config::SimulationConfig;
use goldrush::core::error::Result;
use goldrush::simulation::Simulation;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Run the goldrush simulation headless")]
struct Args {
    /// TOML config file; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Tick budget when the config has no max_ticks of its own
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Log a summary every N ticks
    #[arg(long, default_value_t = 50)]
    report_every: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "goldrush=info,batch_run=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if config.max_ticks.is_none() {
        config.max_ticks = Some(args.ticks);
    }

    let mut sim = match args.seed {
        Some(seed) => Simulation::new_seeded(config, seed)?,
        None => Simulation::new(config)?,
    };

    tracing::info!(
        grid_size = sim.config().grid_size,
        agents = sim.agents().len(),
        max_ticks = sim.config().max_ticks,
        "batch run starting"
    );

    sim.toggle_run();
    let mut last = None;
    while let Some(summary) = sim.tick() {
        if summary.tick % args.report_every == 0 {
            tracing::info!(
                tick = summary.tick,
                happy = summary.happy,
                unhappy = summary.unhappy,
                best_hill_x = summary.best_hill.x,
                best_hill_y = summary.best_hill.y,
                "progress"
            );
        }
        last = Some(summary);
    }

    match last {
        Some(summary) => {
            println!("Finished at tick {}.", summary.tick);
            println!(
                "  {} happy / {} agents, {} gold cells",
                summary.happy,
                sim.agents().len(),
                sim.grid().resource_count()
            );
            println!(
                "  best hill at ({}, {})",
                summary.best_hill.x, summary.best_hill.y
            );
        }
        None => println!("Nothing to do: bounded run was already finished."),
    }

    Ok(())
}
