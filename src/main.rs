//! Goldrush - Entry Point
//!
//! Interactive shell around the simulation driver: advance ticks, toggle the
//! run flag, reset, and inspect the grid, standing in for a windowed host.

use goldrush::core::config::SimulationConfig;
use goldrush::core::error::Result;
use goldrush::simulation::Simulation;

use std::io::{self, Write};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("goldrush=info")
        .init();

    tracing::info!("Goldrush starting...");

    let config = SimulationConfig {
        grid_size: 40,
        partial_size: 10,
        agent_count: 60,
        ..Default::default()
    };
    let mut sim = Simulation::new(config)?;

    println!("\n=== GOLDRUSH ===");
    println!("Agents chase the most popular gold hill on the grid");
    println!();
    println!("Commands:");
    println!("  tick / t        - Advance simulation by one tick");
    println!("  run <n>         - Run n simulation ticks");
    println!("  toggle / p      - Flip the run/pause flag");
    println!("  reset / r       - Re-setup with the same config");
    println!("  status / s      - Show tick, counts and best hill");
    println!("  map / m         - Draw the grid");
    println!("  quit / q        - Exit");
    println!();

    loop {
        display_status(&sim);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "q" => break,
            "tick" | "t" => {
                force_tick(&mut sim);
                continue;
            }
            "toggle" | "p" => {
                sim.toggle_run();
                println!(
                    "Simulation is now {}.",
                    if sim.is_running() { "running" } else { "paused" }
                );
                continue;
            }
            "reset" | "r" => {
                sim.reset();
                println!("Reset complete.");
                continue;
            }
            "status" | "s" => {
                display_detailed_status(&sim);
                continue;
            }
            "map" | "m" => {
                display_map(&sim);
                continue;
            }
            _ => {}
        }

        if let Some(rest) = input.strip_prefix("run ") {
            if let Ok(n) = rest.parse::<u32>() {
                println!("Running {} ticks...", n);
                let was_running = sim.is_running();
                if !was_running {
                    sim.toggle_run();
                }
                for _ in 0..n {
                    if sim.tick().is_none() {
                        break;
                    }
                }
                if !was_running {
                    sim.toggle_run();
                }
                println!("Now at tick {}.", sim.tick_count());
                continue;
            }
        }

        println!("Unknown command: {}", input);
    }

    println!("Goodbye.");
    Ok(())
}

/// Tick once even if the driver is paused
fn force_tick(sim: &mut Simulation) {
    let was_running = sim.is_running();
    if !was_running {
        sim.toggle_run();
    }
    match sim.tick() {
        Some(summary) => println!(
            "Tick {}: {} happy, {} unhappy, best hill at ({}, {}).",
            summary.tick, summary.happy, summary.unhappy, summary.best_hill.x, summary.best_hill.y
        ),
        None => println!("Simulation has finished its bounded run."),
    }
    if !was_running {
        sim.toggle_run();
    }
}

fn display_status(sim: &Simulation) {
    let happy = sim.agents().iter().filter(|a| a.happy).count();
    println!(
        "\n[tick {} | {} | {}/{} happy]",
        sim.tick_count(),
        if sim.is_running() { "running" } else { "paused" },
        happy,
        sim.agents().len()
    );
}

fn display_detailed_status(sim: &Simulation) {
    let best = sim.best_hill_origin();
    println!("Tick:        {}", sim.tick_count());
    println!(
        "State:       {}{}",
        if sim.is_running() { "running" } else { "paused" },
        if sim.finished() { " (finished)" } else { "" }
    );
    println!("Agents:      {}", sim.agents().len());
    println!(
        "Happy:       {}",
        sim.agents().iter().filter(|a| a.happy).count()
    );
    println!("Gold cells:  {}", sim.grid().resource_count());
    println!("Best hill:   ({}, {})", best.x, best.y);
}

/// ASCII rendering: gold cells '*', agents 'a'/'A' (unhappy/happy), rows are y
fn display_map(sim: &Simulation) {
    let size = sim.grid().size();
    if size > 64 {
        println!("Grid too large to draw ({}x{}).", size, size);
        return;
    }

    let mut rows = vec![vec![' '; size]; size];
    for x in 0..size {
        for y in 0..size {
            if sim.grid().is_resource(x, y) {
                rows[y][x] = '*';
            }
        }
    }
    for agent in sim.agents() {
        rows[agent.y][agent.x] = if agent.happy { 'A' } else { 'a' };
    }

    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
}
