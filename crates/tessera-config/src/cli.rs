//! Command-line argument parsing for Tessera.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Tessera command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "tessera", about = "Tessera world generator")]
pub struct CliArgs {
    /// World width in tiles.
    #[arg(long)]
    pub width: Option<u32>,

    /// World height in tiles.
    #[arg(long)]
    pub height: Option<u32>,

    /// Generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sea level in (-1, 1).
    #[arg(long, allow_hyphen_values = true)]
    pub sea_level: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write a PNG biome map to this path.
    #[arg(long)]
    pub biome_map: Option<PathBuf>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.world.width = w;
        }
        if let Some(h) = args.height {
            self.world.height = h;
        }
        if let Some(seed) = args.seed {
            self.world.seed = Some(seed);
        }
        if let Some(sea_level) = args.sea_level {
            self.generation.sea_level = sea_level;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref path) = args.biome_map {
            self.debug.biome_map = Some(path.clone());
        }
    }
}
