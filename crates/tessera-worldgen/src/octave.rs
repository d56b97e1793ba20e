//! Multi-octave noise combination and lattice-interpolated sampling.
//!
//! [`octave`] sums several layers of a noise source at increasing frequency
//! and decreasing amplitude, then renormalizes the sum into `[-1, 1]`.
//! Each layer is scaled by its amplitude before being shifted by `0.5`, so
//! layers with an amplitude above 1 can leave `[0, 1]` and widen the range.
//! [`interpolated_octave`] evaluates [`octave`] on the four integer lattice
//! corners around a point and blends them with a quintic smoothstep.

use noise::NoiseFn;

use crate::error::WorldGenError;

/// Configuration for multi-octave noise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctaveParams {
    /// Number of layers to combine. Must be at least 1.
    pub octaves: u32,
    /// Amplitude of the first layer.
    pub amplitude: f64,
    /// Frequency of the first layer.
    pub frequency: f64,
    /// Amplitude multiplier between successive layers.
    pub persistence: f64,
    /// Frequency multiplier between successive layers.
    pub lacunarity: f64,
}

impl OctaveParams {
    /// Parameters of the terrain elevation channel.
    pub const TERRAIN: Self = Self {
        octaves: 5,
        amplitude: 1.0,
        frequency: 0.03125,
        persistence: 0.5,
        lacunarity: 2.0,
    };

    /// Reject parameter sets that cannot be normalized.
    ///
    /// # Errors
    ///
    /// [`WorldGenError::InvalidOctaveCount`] for zero octaves and
    /// [`WorldGenError::DegenerateOctaveRange`] for non-finite parameters.
    pub fn validate(&self) -> Result<(), WorldGenError> {
        if self.octaves < 1 {
            return Err(WorldGenError::InvalidOctaveCount(self.octaves));
        }
        let finite = [
            self.amplitude,
            self.frequency,
            self.persistence,
            self.lacunarity,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(WorldGenError::DegenerateOctaveRange);
        }
        Ok(())
    }
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            octaves: 1,
            amplitude: 1.0,
            frequency: 1.0,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Running sum plus the min/max weighted layer value.
struct Accumulated {
    result: f64,
    min: f64,
    max: f64,
}

fn accumulate<N: NoiseFn<f64, 2>>(noise: &N, x: f64, y: f64, params: &OctaveParams) -> Accumulated {
    let mut amplitude = params.amplitude;
    let mut frequency = params.frequency;
    // min/max start at 0 and 1 rather than the first layer's value.
    let mut acc = Accumulated {
        result: 0.0,
        min: 0.0,
        max: 1.0,
    };

    for _ in 0..params.octaves {
        let v = noise.get([x * frequency, y * frequency]);
        let s = amplitude * v * 0.5 + 0.5;
        acc.result += s;
        acc.min = acc.min.min(s);
        acc.max = acc.max.max(s);

        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }

    acc
}

/// Combine `params.octaves` layers of `noise` at `(x, y)` into `[-1, 1]`.
///
/// Callers must pass validated parameters; with zero octaves the
/// normalization divides zero by zero and the result is NaN.
pub fn octave<N: NoiseFn<f64, 2>>(noise: &N, x: f64, y: f64, params: &OctaveParams) -> f64 {
    let acc = accumulate(noise, x, y, params);
    let n = params.octaves as f64;
    ((acc.result - acc.min * n) / (acc.max * n - acc.min * n)) * 2.0 - 1.0
}

/// Checked variant of [`octave`].
///
/// # Errors
///
/// Returns the [`OctaveParams::validate`] error, or
/// [`WorldGenError::DegenerateOctaveRange`] when the normalization
/// denominator is zero or the result is not finite.
pub fn try_octave<N: NoiseFn<f64, 2>>(
    noise: &N,
    x: f64,
    y: f64,
    params: &OctaveParams,
) -> Result<f64, WorldGenError> {
    params.validate()?;
    let acc = accumulate(noise, x, y, params);
    let n = params.octaves as f64;
    let denominator = acc.max * n - acc.min * n;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(WorldGenError::DegenerateOctaveRange);
    }
    let value = ((acc.result - acc.min * n) / denominator) * 2.0 - 1.0;
    if !value.is_finite() {
        return Err(WorldGenError::DegenerateOctaveRange);
    }
    Ok(value)
}

/// Quintic smoothstep `6t⁵ − 15t⁴ + 10t³`.
#[inline]
pub fn smootherstep(t: f64) -> f64 {
    6.0 * t.powi(5) - 15.0 * t.powi(4) + 10.0 * t.powi(3)
}

#[inline]
fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a + smootherstep(t) * (b - a)
}

/// Smoothly interpolated [`octave`] noise.
///
/// Samples the four integer lattice corners around `(x, y)`, blends each row
/// along x, then blends the rows along y.
pub fn interpolated_octave<N: NoiseFn<f64, 2>>(
    noise: &N,
    x: f64,
    y: f64,
    params: &OctaveParams,
) -> f64 {
    let floor_x = x.floor();
    let floor_y = y.floor();
    let tx = x - floor_x;
    let ty = y - floor_y;

    let v00 = octave(noise, floor_x, floor_y, params);
    let v01 = octave(noise, floor_x, floor_y + 1.0, params);
    let v10 = octave(noise, floor_x + 1.0, floor_y, params);
    let v11 = octave(noise, floor_x + 1.0, floor_y + 1.0, params);

    let row0 = interpolate(v00, v10, tx);
    let row1 = interpolate(v01, v11, tx);

    interpolate(row0, row1, ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::SimplexField;
    use noise::Constant;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPSILON: f64 = 1e-12;

    fn field(seed: u64) -> SimplexField {
        SimplexField::new(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_single_octave_is_identity() {
        let f = field(42);
        let params = OctaveParams::default();
        for i in 0..100 {
            let x = i as f64 * 0.71 - 30.0;
            let y = i as f64 * 0.23 + 5.0;
            let raw = f.sample(x, y);
            let combined = octave(&f, x, y, &params);
            assert!(
                (raw - combined).abs() < EPSILON,
                "one octave should reproduce the raw sample: {raw} vs {combined}"
            );
        }
    }

    #[test]
    fn test_constant_source_terrain_params() {
        // Every layer stays inside [0, 1], so min/max keep their 0/1 seeds and
        // the result is 0.2 * v * (1 + 1/2 + 1/4 + 1/8 + 1/16).
        let value = octave(&Constant::new(-0.9), 3.0, 4.0, &OctaveParams::TERRAIN);
        let expected = 0.2 * -0.9 * 1.9375;
        assert!((value - expected).abs() < EPSILON, "got {value}");

        let top = octave(&Constant::new(1.0), 0.0, 0.0, &OctaveParams::TERRAIN);
        assert!((top - 0.3875).abs() < EPSILON, "got {top}");
    }

    /// Returns `x`, clamped to `[-1, 1]`.
    struct RampX;

    impl NoiseFn<f64, 2> for RampX {
        fn get(&self, point: [f64; 2]) -> f64 {
            point[0].clamp(-1.0, 1.0)
        }
    }

    #[test]
    fn test_large_amplitude_widens_range() {
        let params = OctaveParams {
            octaves: 3,
            amplitude: 4.0,
            frequency: 1.0,
            persistence: 0.5,
            lacunarity: 2.0,
        };
        // Layers sample x = 0.5, 1, 2 -> v = 0.5, 1, 1 with amplitudes 4, 2, 1:
        // s = 1.5, 1.5, 1.0; max grows to 1.5, min stays 0.
        let high = octave(&RampX, 0.5, 0.0, &params);
        assert!((high - 7.0 / 9.0).abs() < EPSILON, "got {high}");

        // v = -0.5, -1, -1: s = -0.5, -0.5, 0.0; min drops to -0.5, max stays 1.
        let low = octave(&RampX, -0.5, 0.0, &params);
        assert!((low + 7.0 / 9.0).abs() < EPSILON, "got {low}");

        assert_eq!(try_octave(&RampX, 0.5, 0.0, &params), Ok(high));
    }

    #[test]
    fn test_output_within_unit_range() {
        let f = field(7);
        let params = OctaveParams::TERRAIN;
        for xi in 0..60 {
            for yi in 0..60 {
                let v = octave(&f, xi as f64, yi as f64, &params);
                assert!((-1.0..=1.0).contains(&v), "octave value {v} out of range");
            }
        }
    }

    #[test]
    fn test_zero_octaves_rejected() {
        let params = OctaveParams {
            octaves: 0,
            ..OctaveParams::TERRAIN
        };
        assert_eq!(params.validate(), Err(WorldGenError::InvalidOctaveCount(0)));
        assert_eq!(
            try_octave(&Constant::new(0.0), 1.0, 1.0, &params),
            Err(WorldGenError::InvalidOctaveCount(0))
        );
        assert!(octave(&Constant::new(0.0), 1.0, 1.0, &params).is_nan());
    }

    #[test]
    fn test_non_finite_params_rejected() {
        let params = OctaveParams {
            persistence: f64::NAN,
            ..OctaveParams::TERRAIN
        };
        assert_eq!(params.validate(), Err(WorldGenError::DegenerateOctaveRange));
    }

    #[test]
    fn test_denominator_never_zero_for_valid_params() {
        // The fixed 0/1 seeds keep max - min >= 1 for any finite layer values.
        let sources = [-1.0, -0.5, 0.0, 0.5, 1.0];
        let amplitudes = [0.0, 1e-300, 0.5, 1.0, 3.0, 1e6];
        let persistences = [0.0, 0.25, 0.5, 1.0, 2.0];
        for &src in &sources {
            for &amplitude in &amplitudes {
                for &persistence in &persistences {
                    for octaves in 1..=8 {
                        let params = OctaveParams {
                            octaves,
                            amplitude,
                            frequency: 0.03125,
                            persistence,
                            lacunarity: 2.0,
                        };
                        let result = try_octave(&Constant::new(src), 2.0, 3.0, &params);
                        assert!(
                            result.is_ok(),
                            "degenerate range for src={src} {params:?}: {result:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_overflowing_amplitude_detected() {
        let params = OctaveParams {
            octaves: 5,
            amplitude: f64::MAX,
            frequency: 1.0,
            persistence: 1.0,
            lacunarity: 2.0,
        };
        assert_eq!(
            try_octave(&Constant::new(1.0), 0.0, 0.0, &params),
            Err(WorldGenError::DegenerateOctaveRange)
        );
    }

    #[test]
    fn test_smootherstep_endpoints() {
        assert_eq!(smootherstep(0.0), 0.0);
        assert!((smootherstep(1.0) - 1.0).abs() < EPSILON);
        assert!((smootherstep(0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_interpolated_matches_octave_on_lattice() {
        let f = field(13);
        let params = OctaveParams::TERRAIN;
        for x in 0..20 {
            for y in 0..20 {
                let (x, y) = (x as f64, y as f64);
                assert_eq!(
                    interpolated_octave(&f, x, y, &params),
                    octave(&f, x, y, &params),
                    "interpolation must collapse to the corner at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_interpolated_is_continuous_across_cells() {
        let f = field(21);
        let params = OctaveParams::TERRAIN;
        let step = 1e-3;
        for i in 0..4_000 {
            let x = i as f64 * 0.01;
            let delta = (interpolated_octave(&f, x + step, 2.5, &params)
                - interpolated_octave(&f, x, 2.5, &params))
            .abs();
            assert!(delta < 0.05, "discontinuity of {delta} at x={x}");
        }
    }

    #[test]
    fn test_interpolated_constant_source_is_flat() {
        let c = Constant::new(0.3);
        let params = OctaveParams::TERRAIN;
        let corner = octave(&c, 0.0, 0.0, &params);
        let mid = interpolated_octave(&c, 0.4, 0.8, &params);
        assert!((corner - mid).abs() < EPSILON);
    }
}
