//! Player spawn search.

use glam::UVec2;
use rand::Rng;
use tessera_config::SpawnConfig;

use crate::entity::EntityRegistry;
use crate::error::WorldGenError;
use crate::tile::{Occupant, Tile};
use crate::world::World;

/// Whether a player may stand on `tile`: dry ground without a colliding resource.
pub fn is_standable(tile: &Tile, registry: &EntityRegistry) -> bool {
    if tile.biome().is_water() {
        return false;
    }
    match tile.entity() {
        Some(Occupant::Resource(entity)) => !registry.get(entity.id).collision,
        Some(Occupant::Dropped(_)) | None => true,
    }
}

impl World {
    /// Pick the player's starting tile.
    ///
    /// Starts at the centre or the configured position. With
    /// `force_on_land`, uniformly random positions are drawn until one is
    /// standable.
    ///
    /// # Errors
    ///
    /// - [`WorldGenError::OutOfBounds`] when the configured position lies outside the world.
    /// - [`WorldGenError::NoSpawnFound`] after `max_attempts` unsuccessful draws.
    pub fn find_spawn<R: Rng>(
        &self,
        spawn: &SpawnConfig,
        registry: &EntityRegistry,
        rng: &mut R,
    ) -> Result<UVec2, WorldGenError> {
        let start = if spawn.centered {
            self.size() / 2
        } else {
            UVec2::new(spawn.position.0, spawn.position.1)
        };
        let tile = self.get(start)?;
        if !spawn.force_on_land || is_standable(tile, registry) {
            return Ok(start);
        }

        for _ in 0..spawn.max_attempts {
            let pos = UVec2::new(
                rng.random_range(0..self.width()),
                rng.random_range(0..self.height()),
            );
            if is_standable(self.get(pos)?, registry) {
                tracing::debug!("Spawn moved from {} to {}", start, pos);
                return Ok(pos);
            }
        }
        Err(WorldGenError::NoSpawnFound {
            attempts: spawn.max_attempts,
        })
    }
}
