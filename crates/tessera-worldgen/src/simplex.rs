//! 2D simplex gradient noise over a shuffled permutation table.
//!
//! The permutation is drawn from an injected RNG, so two fields built from
//! the same seeded stream are identical and two fields drawn one after the
//! other from one stream are independent.

use noise::NoiseFn;
use rand::Rng;

/// Number of distinct permutation entries.
const PERM_SIZE: usize = 512;

/// Output scale that maps the summed corner contributions to roughly `[-1, 1]`.
const OUTPUT_SCALE: f64 = 70.0;

/// The 12 cube edge-midpoint gradients, projected onto the xy plane.
const GRAD3: [[f64; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

/// Skew factor `(√3 − 1) / 2` from the square grid to the simplex grid.
#[inline]
fn skew() -> f64 {
    0.5 * (3.0_f64.sqrt() - 1.0)
}

/// Unskew factor `(3 − √3) / 6`.
#[inline]
fn unskew() -> f64 {
    (3.0 - 3.0_f64.sqrt()) / 6.0
}

/// A continuous 2D noise field returning values in `[-1, 1]`.
#[derive(Clone)]
pub struct SimplexField {
    /// `[0, 512)` shuffled, then repeated once so lookups never wrap.
    perm: Box<[u16; PERM_SIZE * 2]>,
}

impl SimplexField {
    /// Build a field with a permutation shuffled by `rng`.
    ///
    /// Forward Fisher–Yates: entry `i` swaps with a uniform index in `[i, 512)`.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut perm = Box::new([0u16; PERM_SIZE * 2]);
        for (i, p) in perm[..PERM_SIZE].iter_mut().enumerate() {
            *p = i as u16;
        }
        for i in 0..PERM_SIZE {
            let r = rng.random_range(i..PERM_SIZE);
            perm.swap(i, r);
        }
        perm.copy_within(0..PERM_SIZE, PERM_SIZE);
        Self { perm }
    }

    /// The doubled permutation table.
    pub fn permutation(&self) -> &[u16] {
        &self.perm[..]
    }

    /// Sample the field at `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let f2 = skew();
        let g2 = unskew();

        // Locate the simplex cell containing the point.
        let s = (x + y) * f2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * g2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Lower or upper triangle of the unit square.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + g2;
        let y1 = y0 - j1 as f64 + g2;
        let x2 = x0 - 1.0 + 2.0 * g2;
        let y2 = y0 - 1.0 + 2.0 * g2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let perm = &self.perm;
        let gi0 = perm[ii + perm[jj] as usize] % 12;
        let gi1 = perm[ii + i1 + perm[jj + j1] as usize] % 12;
        let gi2 = perm[ii + 1 + perm[jj + 1] as usize] % 12;

        OUTPUT_SCALE * (corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2))
    }
}

/// Contribution of one simplex corner at offset `(x, y)`.
#[inline]
fn corner(gradient: u16, x: f64, y: f64) -> f64 {
    let t = (0.5 - x * x - y * y).max(0.0);
    let t2 = t * t;
    let g = GRAD3[gradient as usize];
    t2 * t2 * (g[0] * x + g[1] * y)
}

impl NoiseFn<f64, 2> for SimplexField {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}

impl std::fmt::Debug for SimplexField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexField")
            .field("perm", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}
