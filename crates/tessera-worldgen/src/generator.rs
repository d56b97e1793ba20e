//! World assembly: turns two noise channels and the configured tables into a tile grid.
//!
//! Per cell the ocean channel is sampled raw at a very low frequency, the
//! terrain channel through [`interpolated_octave`]. Where the ocean mask lies
//! below sea level it is added on top of the terrain, carving out seas. The
//! combined elevation is classified into a biome, and that biome's scatter
//! table decides whether a resource entity is placed.

use std::time::Instant;

use noise::NoiseFn;
use rand::Rng;
use tessera_config::{Biome, GenerationConfig};

use crate::biome::classify;
use crate::entity::EntityRegistry;
use crate::error::WorldGenError;
use crate::octave::{OctaveParams, interpolated_octave};
use crate::placement::place_entity;
use crate::scatter::ScatterTables;
use crate::simplex::SimplexField;
use crate::tile::Tile;
use crate::world::World;

/// Sampling frequency of the ocean mask channel.
pub const OCEAN_FREQUENCY: f64 = 0.00625;

/// Combined elevation at cell `(x, y)`, clamped to `[-1, 1]`.
pub fn sample_elevation<O, T>(ocean: &O, terrain: &T, x: f64, y: f64, sea_level: f64) -> f64
where
    O: NoiseFn<f64, 2>,
    T: NoiseFn<f64, 2>,
{
    let v = ocean.get([x * OCEAN_FREQUENCY, y * OCEAN_FREQUENCY]) * 0.5 + 0.5;
    let ocean_sample = v * v * 2.0 - 1.0;
    let terrain_sample = interpolated_octave(terrain, x, y, &OctaveParams::TERRAIN) * 0.6 + 0.4;

    let combined = if ocean_sample < sea_level {
        terrain_sample + ocean_sample
    } else {
        terrain_sample
    };
    combined.clamp(-1.0, 1.0)
}

/// Validated generation tables, reusable across worlds.
#[derive(Clone, Debug)]
pub struct WorldGenerator {
    sea_level: f64,
    registry: EntityRegistry,
    scatter: ScatterTables,
}

impl WorldGenerator {
    /// Validate `config` and resolve its entity names.
    ///
    /// # Errors
    ///
    /// - [`WorldGenError::SeaLevelOutOfRange`] unless `-1 < sea_level < 1`.
    /// - [`WorldGenError::MissingTileDef`] when a biome has no tile definition.
    /// - [`WorldGenError::DuplicateEntity`] or [`WorldGenError::UnknownEntity`]
    ///   for inconsistent entity tables.
    pub fn new(config: &GenerationConfig) -> Result<Self, WorldGenError> {
        let sea_level = config.sea_level;
        if !(sea_level > -1.0 && sea_level < 1.0) {
            return Err(WorldGenError::SeaLevelOutOfRange(sea_level));
        }
        if let Some(biome) = Biome::ALL
            .into_iter()
            .find(|biome| !config.tiles.iter().any(|t| t.biome == *biome))
        {
            return Err(WorldGenError::MissingTileDef(biome));
        }
        OctaveParams::TERRAIN.validate()?;

        let registry = EntityRegistry::from_defs(&config.entities)?;
        let scatter = ScatterTables::from_config(&config.scatter, &registry)?;
        Ok(Self {
            sea_level,
            registry,
            scatter,
        })
    }

    pub fn sea_level(&self) -> f64 {
        self.sea_level
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn scatter(&self) -> &ScatterTables {
        &self.scatter
    }

    /// Generate a world, building the ocean and then the terrain field from `rng`.
    ///
    /// # Errors
    ///
    /// [`WorldGenError::InvalidDimensions`] if either dimension is zero.
    pub fn generate<R: Rng>(
        &self,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<World, WorldGenError> {
        check_dimensions(width, height)?;
        let ocean = SimplexField::new(rng);
        let terrain = SimplexField::new(rng);
        self.generate_with_noise(width, height, &ocean, &terrain, rng)
    }

    /// Generate a world from caller-supplied noise channels.
    ///
    /// `rng` feeds scatter draws, entity heights and jitter seeds, consumed
    /// row by row.
    ///
    /// # Errors
    ///
    /// [`WorldGenError::InvalidDimensions`] if either dimension is zero.
    pub fn generate_with_noise<O, T, R>(
        &self,
        width: u32,
        height: u32,
        ocean: &O,
        terrain: &T,
        rng: &mut R,
    ) -> Result<World, WorldGenError>
    where
        O: NoiseFn<f64, 2>,
        T: NoiseFn<f64, 2>,
        R: Rng,
    {
        check_dimensions(width, height)?;
        let start = Instant::now();

        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let elevation = sample_elevation(ocean, terrain, x as f64, y as f64, self.sea_level);
                let biome = classify(elevation, self.sea_level);
                tiles.push(self.populate(biome, rng));
            }
        }

        let world = World::from_tiles(width, height, tiles)?;
        tracing::info!(
            "Generated {}x{} world in {:.2?}",
            width,
            height,
            start.elapsed()
        );
        let histogram = world.biome_histogram();
        for biome in Biome::ALL {
            tracing::debug!("{}: {} tiles", biome, histogram[biome.index()]);
        }
        tracing::debug!("{} entities placed", world.entity_count());
        Ok(world)
    }

    fn populate<R: Rng>(&self, biome: Biome, rng: &mut R) -> Tile {
        let roll = rng.random::<f64>();
        match self.scatter.draw(biome, roll) {
            Some(id) => {
                let entity = place_entity(id, self.registry.get(id), rng);
                Tile::with_resource(biome, entity)
            }
            None => Tile::bare(biome),
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), WorldGenError> {
    if width == 0 || height == 0 {
        return Err(WorldGenError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl World {
    /// Validate `config` and generate a `width` x `height` world from `rng`.
    ///
    /// # Errors
    ///
    /// Any [`WorldGenerator::new`] or [`WorldGenerator::generate`] error.
    pub fn generate<R: Rng>(
        config: &GenerationConfig,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<World, WorldGenError> {
        WorldGenerator::new(config)?.generate(width, height, rng)
    }
}
