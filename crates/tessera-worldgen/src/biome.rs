//! Biome classification: maps a combined elevation sample to one of five bands.
//!
//! The bands are anchored on the sea level. Everything below it is split
//! evenly into deep and shallow water; the first eighth above it is beach,
//! up to half is plains and the rest is forest.

use tessera_config::Biome;

/// A half-open `[lower, upper)` slice of the elevation range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiomeBand {
    pub biome: Biome,
    pub lower: f64,
    pub upper: f64,
}

impl BiomeBand {
    /// Whether `sample` falls inside this band. The top band includes `1.0`.
    pub fn contains(&self, sample: f64) -> bool {
        sample >= self.lower
            && (sample < self.upper || (self.biome == Biome::Forest && sample <= self.upper))
    }
}

/// The five contiguous bands covering `[-1, 1]` for `sea_level`.
///
/// Each band's lower bound is the previous band's upper bound.
pub fn biome_bands(sea_level: f64) -> [BiomeBand; 5] {
    let below = (-1.0 - sea_level).abs();
    let above = (sea_level - 1.0).abs();

    let bounds = [
        -1.0,
        -1.0 + below * 0.5,
        -1.0 + below,
        -1.0 + below + above * 0.125,
        -1.0 + below + above * 0.5,
        1.0,
    ];

    Biome::ALL.map(|biome| {
        let i = biome.index();
        BiomeBand {
            biome,
            lower: bounds[i],
            upper: bounds[i + 1],
        }
    })
}

/// Classify an elevation sample in `[-1, 1]`.
///
/// Bands are scanned lowest first. Samples outside `[-1, 1]` are clamped;
/// NaN falls to the lowest band.
pub fn classify(sample: f64, sea_level: f64) -> Biome {
    let sample = sample.clamp(-1.0, 1.0);
    biome_bands(sea_level)
        .iter()
        .find(|band| band.contains(sample))
        .map_or(Biome::DeepWater, |band| band.biome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEA_LEVELS: [f64; 9] = [-0.99, -0.75, -0.5, -0.125, 0.0, 0.125, 0.5, 0.75, 0.99];

    #[test]
    fn test_bands_partition_unit_interval() {
        for sea_level in SEA_LEVELS {
            let bands = biome_bands(sea_level);
            assert_eq!(bands[0].lower, -1.0);
            assert_eq!(bands[4].upper, 1.0);
            for pair in bands.windows(2) {
                assert_eq!(
                    pair[1].lower, pair[0].upper,
                    "gap between {} and {} at sea level {sea_level}",
                    pair[0].biome, pair[1].biome
                );
            }
            for band in &bands {
                assert!(band.lower < band.upper, "empty band {band:?}");
            }
        }
    }

    #[test]
    fn test_bands_are_in_biome_order() {
        let bands = biome_bands(-0.125);
        let order: Vec<Biome> = bands.iter().map(|b| b.biome).collect();
        assert_eq!(order, Biome::ALL.to_vec());
    }

    #[test]
    fn test_water_ends_at_sea_level() {
        for sea_level in SEA_LEVELS {
            let bands = biome_bands(sea_level);
            assert!((bands[1].upper - sea_level).abs() < 1e-12);
        }
    }

    #[test]
    fn test_extremes() {
        for sea_level in SEA_LEVELS {
            assert_eq!(classify(-1.0, sea_level), Biome::DeepWater);
            assert_eq!(
                classify(1.0, sea_level),
                Biome::Forest,
                "1.0 must be inside the top band at sea level {sea_level}"
            );
        }
    }

    #[test]
    fn test_default_sea_level_boundaries() {
        let sea = -0.125;
        assert_eq!(classify(-0.5625 - 1e-9, sea), Biome::DeepWater);
        assert_eq!(classify(-0.5625, sea), Biome::ShallowWater);
        assert_eq!(classify(-0.125, sea), Biome::Beach);
        assert_eq!(classify(0.015625, sea), Biome::Plains);
        assert_eq!(classify(0.4375 - 1e-9, sea), Biome::Plains);
        assert_eq!(classify(0.4375, sea), Biome::Forest);
    }

    #[test]
    fn test_every_sample_classified() {
        for sea_level in SEA_LEVELS {
            let bands = biome_bands(sea_level);
            for i in 0..=2000 {
                let sample = -1.0 + i as f64 / 1000.0;
                let matches = bands.iter().filter(|b| b.contains(sample)).count();
                assert_eq!(matches, 1, "sample {sample} in {matches} bands");
            }
        }
    }

    #[test]
    fn test_out_of_range_samples_clamped() {
        assert_eq!(classify(-3.0, 0.0), Biome::DeepWater);
        assert_eq!(classify(2.0, 0.0), Biome::Forest);
    }
}
