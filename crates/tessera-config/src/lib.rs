//! Configuration system for Tessera.
//!
//! Holds the world dimensions, seed, sea level and the static generation
//! tables (biome tiles, entity types, ordered scatter tables). Settings
//! persist to disk as RON files and can be overridden from the command line.

mod cli;
mod config;
mod error;
mod generation;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SpawnConfig, WorldConfig};
pub use error::ConfigError;
pub use generation::{
    Biome, EntityDef, GenerationConfig, HeightDef, HeightRandom, PositionWindow, ScatterEntry,
    TileDef,
};
