//! PNG export of the world minimap.

use std::path::Path;

use tessera_config::GenerationConfig;
use tessera_worldgen::debug_viz::render_biome_map;
use tessera_worldgen::{EntityRegistry, World};

/// Render `world` and write it to `path` as an RGBA PNG.
pub fn write_biome_map(
    world: &World,
    config: &GenerationConfig,
    registry: &EntityRegistry,
    path: &Path,
) -> Result<(), image::ImageError> {
    let map = render_biome_map(world, config, registry);
    let (width, height) = map.dimensions();
    image::save_buffer(
        path,
        &map.into_raw(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )?;
    tracing::info!("Wrote {}x{} biome map to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_worldgen::WorldGenerator;
    use tessera_worldgen::seed::world_rng;

    #[test]
    fn test_png_round_trip() {
        let config = GenerationConfig::default();
        let generator = WorldGenerator::new(&config).unwrap();
        let world = generator.generate(24, 16, &mut world_rng(4)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");

        write_biome_map(&world, &config, generator.registry(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (24, 16));
        let expected = render_biome_map(&world, &config, generator.registry());
        assert_eq!(decoded.get_pixel(5, 7).0, expected.get_pixel(5, 7));
    }
}
