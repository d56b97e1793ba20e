//! Entity placement: visual height and fixed sub-tile position jitter.

use glam::DVec2;
use rand::Rng;
use tessera_config::{EntityDef, HeightDef, PositionWindow};

use crate::entity::EntityTypeId;
use crate::tile::{RenderLayer, TileEntity};

/// Sub-tile visual offset of a placed entity.
///
/// `seed` is drawn once at placement and never changes, so the entity keeps
/// its position for the lifetime of the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionJitter {
    pub enabled: bool,
    /// Top-left corner of the window, normalized to the tile.
    pub offset: DVec2,
    /// Window extent, `br - tl`.
    pub range: DVec2,
    /// Uniform pair in `[0, 1)²`.
    pub seed: DVec2,
}

impl PositionJitter {
    /// Jitter for a window with a freshly drawn seed pair.
    pub fn from_window<R: Rng>(window: &PositionWindow, rng: &mut R) -> Self {
        let offset = DVec2::new(window.tl.0, window.tl.1);
        let br = DVec2::new(window.br.0, window.br.1);
        let seed_x = rng.random::<f64>();
        let seed_y = rng.random::<f64>();
        Self {
            enabled: window.enabled,
            offset,
            range: br - offset,
            seed: DVec2::new(seed_x, seed_y),
        }
    }

    /// Normalized anchor inside the tile, or `None` when jitter is disabled.
    pub fn anchor(&self) -> Option<DVec2> {
        self.enabled.then(|| self.offset + self.range * self.seed)
    }
}

/// Visual height for one placement: `value`, scaled by a uniform draw in
/// `[min, max)` when randomization is enabled.
pub fn entity_height<R: Rng>(height: &HeightDef, rng: &mut R) -> f64 {
    if height.random.enabled {
        let t = rng.random::<f64>();
        height.value * (t * (height.random.max - height.random.min) + height.random.min)
    } else {
        height.value
    }
}

/// Build a placed entity. Draws the height first, then the jitter seed pair.
pub fn place_entity<R: Rng>(id: EntityTypeId, def: &EntityDef, rng: &mut R) -> TileEntity {
    let height = entity_height(&def.height, rng);
    let randomized_position = PositionJitter::from_window(&def.randomized_position, rng);
    TileEntity {
        id,
        layer: RenderLayer::for_entity_height(height),
        height,
        randomized_position,
    }
}
