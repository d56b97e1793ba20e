//! World generation error types.

use tessera_config::Biome;

/// Errors raised while validating generation parameters or accessing a world.
///
/// Generation is pure computation, so every variant is a configuration or
/// caller error rather than a transient failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorldGenError {
    /// Width or height is zero.
    #[error("world dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Sea level outside the open interval `(-1, 1)`.
    #[error("sea level must lie strictly inside (-1, 1), got {0}")]
    SeaLevelOutOfRange(f64),

    /// A classifier band has no tile definition.
    #[error("no tile definition for biome {0}")]
    MissingTileDef(Biome),

    /// A scatter table names an entity type that was never defined.
    #[error("scatter table for {biome} references unknown entity type {name:?}")]
    UnknownEntity { biome: Biome, name: String },

    /// Two entity definitions share a name.
    #[error("duplicate entity type name: {0}")]
    DuplicateEntity(String),

    /// Every entity type id is already assigned.
    #[error("entity registry is full, cannot register {0:?}")]
    RegistryFull(String),

    /// Octave combination needs at least one layer.
    #[error("octave count must be at least 1, got {0}")]
    InvalidOctaveCount(u32),

    /// Non-finite octave parameters or a zero normalization denominator.
    #[error("octave normalization range is degenerate")]
    DegenerateOctaveRange,

    /// Tile access outside the world grid.
    #[error("position ({x}, {y}) is outside the {width}x{height} world")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Spawn search ran out of attempts.
    #[error("no standable spawn tile found after {attempts} attempts")]
    NoSpawnFound { attempts: u32 },
}
