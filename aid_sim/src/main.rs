//! aid_sim - Headless tick loop for aid_core damage models

mod simulation;

use aid_core::config::load_config;
use aid_core::FirstAidConfig;
use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use simulation::SimulationSettings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Simulate a player taking hits and patching themselves up")]
struct Cli {
    /// TOML config; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of ticks to simulate (20 per second)
    #[arg(long, default_value_t = 6000)]
    ticks: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Chance per tick of being hit, between 0 and 1
    #[arg(long, default_value_t = 0.01, value_parser = parse_chance)]
    hit_chance: f64,
    #[arg(long, default_value_t = 4)]
    bandages: u32,
    #[arg(long, default_value_t = 4)]
    plasters: u32,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn parse_chance(value: &str) -> Result<f64, String> {
    let chance: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&chance) {
        Ok(chance)
    } else {
        Err(format!("{chance} is not between 0 and 1"))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aid_core=info,aid_sim=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("loading {}", path.display()))?,
        None => FirstAidConfig::default(),
    };

    let settings = SimulationSettings {
        ticks: cli.ticks,
        hit_chance: cli.hit_chance,
        bandages: cli.bandages,
        plasters: cli.plasters,
        ..SimulationSettings::default()
    };
    let mut rng = rand::rngs::StdRng::seed_from_u64(cli.seed);

    tracing::info!(ticks = settings.ticks, seed = cli.seed, "starting simulation");
    let report = simulation::run(&config, &settings, &mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Ticks run:    {}", report.ticks_run);
    println!("Hits taken:   {} ({:.1} damage)", report.hits, report.damage_taken);
    println!("Items used:   {}", report.items_used);
    match report.death_tick {
        Some(tick) => println!("Died on tick: {tick}"),
        None => println!("Survived"),
    }

    let (current, max) = report.total_health();
    println!("\nHealth {current:.1}/{max:.1}");
    for part in &report.parts {
        println!("  {:<11} {:.1}/{:.1}", part.part.to_string(), part.current_health, part.max_health);
    }

    if !report.effect_ticks.is_empty() {
        println!("\nEffects (ticks active):");
        for (effect, ticks) in &report.effect_ticks {
            println!("  {effect:<15} {ticks}");
        }
    }
    for message in &report.messages {
        println!("[chat] {message}");
    }

    Ok(())
}
