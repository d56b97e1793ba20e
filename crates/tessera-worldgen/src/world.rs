//! The generated tile grid and its gameplay-facing accessors.

use glam::UVec2;
use tessera_config::Biome;

use crate::error::WorldGenError;
use crate::tile::{Occupant, Tile};

/// A rectangular grid of tiles, stored row-major (`y * width + x`).
///
/// Dimensions are fixed at construction. After generation only the
/// occupant of a tile may change, through [`World::set_entity`].
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl World {
    /// Assemble a world from tiles in row-major order.
    ///
    /// # Errors
    ///
    /// [`WorldGenError::InvalidDimensions`] if either dimension is zero or
    /// the tile count does not match `width * height`.
    pub fn from_tiles(width: u32, height: u32, tiles: Vec<Tile>) -> Result<Self, WorldGenError> {
        if width == 0 || height == 0 || tiles.len() != width as usize * height as usize {
            return Err(WorldGenError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` as a vector.
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn contains(&self, pos: UVec2) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: UVec2) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    fn out_of_bounds(&self, pos: UVec2) -> WorldGenError {
        WorldGenError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Read the tile at `pos`.
    ///
    /// # Errors
    ///
    /// [`WorldGenError::OutOfBounds`] outside the grid.
    pub fn get(&self, pos: UVec2) -> Result<&Tile, WorldGenError> {
        match self.index(pos) {
            Some(idx) => Ok(&self.tiles[idx]),
            None => {
                tracing::warn!("World::get out of bounds: ({}, {})", pos.x, pos.y);
                Err(self.out_of_bounds(pos))
            }
        }
    }

    /// Replace the occupant of the tile at `pos`. `None` clears it.
    ///
    /// Biome and ground layer are left untouched.
    ///
    /// # Errors
    ///
    /// [`WorldGenError::OutOfBounds`] outside the grid.
    pub fn set_entity(
        &mut self,
        pos: UVec2,
        occupant: Option<Occupant>,
    ) -> Result<Option<Occupant>, WorldGenError> {
        match self.index(pos) {
            Some(idx) => Ok(self.tiles[idx].replace_entity(occupant)),
            None => {
                tracing::warn!("World::set_entity out of bounds: ({}, {})", pos.x, pos.y);
                Err(self.out_of_bounds(pos))
            }
        }
    }

    /// Iterate all tiles with their positions, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (UVec2, &Tile)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let i = i as u32;
            (UVec2::new(i % width, i / width), tile)
        })
    }

    /// Tile count per biome, indexed by [`Biome::index`].
    pub fn biome_histogram(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for tile in &self.tiles {
            counts[tile.biome().index()] += 1;
        }
        counts
    }

    /// Number of tiles carrying any occupant.
    pub fn entity_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.entity().is_some()).count()
    }

    /// Number of tiles of the given biome.
    pub fn biome_count(&self, biome: Biome) -> usize {
        self.biome_histogram()[biome.index()]
    }
}
