//! Demo binary that generates a Tessera world and reports on it.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p tessera-demo -- --seed 42 --biome-map world.png`.

mod minimap;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tessera_config::{CliArgs, Config};
use tessera_worldgen::seed::{resolve_seed, world_rng};
use tessera_worldgen::{Biome, WorldGenerator};
use tracing::info;

fn run() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => dirs::config_dir()
            .ok_or("failed to resolve config directory")?
            .join("tessera"),
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    tessera_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let generator = WorldGenerator::new(&config.generation)?;
    let seed = resolve_seed(config.world.seed);
    let mut rng = world_rng(seed);
    let world = generator.generate(config.world.width, config.world.height, &mut rng)?;

    let total = world.width() as f64 * world.height() as f64;
    let histogram = world.biome_histogram();
    for biome in Biome::ALL {
        let count = histogram[biome.index()];
        info!(
            "{:>13}: {:>6} tiles ({:.1}%)",
            biome.name(),
            count,
            count as f64 * 100.0 / total
        );
    }
    info!("Entities: {}", world.entity_count());

    let spawn = world.find_spawn(&config.world.spawn, generator.registry(), &mut rng)?;
    let tile = world.get(spawn)?;
    info!("Spawn at ({}, {}) on {}", spawn.x, spawn.y, tile.biome());

    if let Some(path) = &config.debug.biome_map {
        minimap::write_biome_map(&world, &config.generation, generator.registry(), path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tessera: {e}");
            ExitCode::FAILURE
        }
    }
}
