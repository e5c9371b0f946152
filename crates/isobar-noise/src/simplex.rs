#![forbid(unsafe_code)]

//! Seeded 2D simplex noise.
//!
//! The generator is built once from a seed and is immutable afterwards:
//! evaluation is a pure function of the tables and the input coordinates, so
//! a single instance can be shared freely.
//!
//! # Determinism
//!
//! Equal seeds produce bit-identical tables, and `noise2` performs the same
//! floating-point operations in the same order on every call. Two instances
//! constructed with the same seed agree exactly on every input.

use std::fmt;

/// Skew factor for mapping square coordinates onto the simplex grid,
/// `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.366_025_403_784_438_6;

/// Unskew factor for mapping simplex coordinates back, `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187_13;

/// Gradient directions for the simplex lattice corners.
///
/// The classic set of 12 edge-midpoint vectors of a cube; 2D evaluation only
/// reads the x and y components.
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

// ---------------------------------------------------------------------------
// Seeded shuffle source
// ---------------------------------------------------------------------------

/// Linear-congruential sequence that drives the permutation shuffle.
///
/// Uses the classic `(state * 9301 + 49297) mod 233280` triple. The state
/// space is tiny, but it only has to scatter a 256-entry table, and the
/// exact recurrence is part of the seed contract: changing it would remap
/// every seed to a different field.
#[derive(Debug, Clone)]
struct Lcg {
    state: u64,
}

impl Lcg {
    const MULTIPLIER: u64 = 9301;
    const INCREMENT: u64 = 49297;
    const MODULUS: u64 = 233_280;

    /// Seeds are reduced modulo the LCG modulus up front; the recurrence
    /// cannot distinguish seeds beyond that, and the reduction keeps the
    /// multiply comfortably inside `u64`.
    const fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    /// Advance and return a draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }
}

// ---------------------------------------------------------------------------
// SimplexNoise
// ---------------------------------------------------------------------------

/// Seeded 2D simplex noise generator.
///
/// Construction shuffles the identity permutation of `[0, 255]` with a
/// seeded Fisher–Yates pass, then duplicates it into 512-entry lookups (plus
/// a parallel mod-12 table for gradient selection) so evaluation never needs
/// a wrap-around bounds check.
///
/// Output is approximately within `[-1, 1]`; the bound is empirical, not
/// guaranteed (see `noise2`).
#[derive(Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

impl SimplexNoise {
    /// Build the generator for a seed.
    pub fn new(seed: u64) -> Self {
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);

        // Fisher-Yates from the top index down to 1: swap slot n with a
        // uniformly drawn slot in [0, n+1).
        let mut rng = Lcg::new(seed);
        let mut n = 256usize;
        while n > 1 {
            let k = (rng.next_f64() * n as f64).floor() as usize;
            n -= 1;
            p.swap(n, k);
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }

        Self { perm, perm_mod12 }
    }

    /// The base permutation table (first 256 entries of the duplicated
    /// lookup). Always a bijection on `[0, 255]`.
    pub fn permutation(&self) -> [u8; 256] {
        let mut out = [0u8; 256];
        out.copy_from_slice(&self.perm[..256]);
        out
    }

    /// Evaluate the noise field at `(x, y)`.
    ///
    /// The three simplex corner contributions use a squared-distance falloff
    /// `t = 0.5 - dx^2 - dy^2`; a corner contributes `t^4 * (g . d)` when
    /// `t >= 0` and nothing otherwise. The sum is scaled by 70, an empirical
    /// normalization that brings the output into roughly `[-1, 1]`.
    ///
    /// # Determinism
    ///
    /// Pure function of the tables and `(x, y)`; no state is mutated.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        // Skew the input square onto the simplex grid and find the cell.
        let s = (x + y) * F2;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;

        let t = (i + j) as f64 * G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // Which of the cell's two triangles holds the point.
        let (i1, j1) = if x0 > y0 { (1usize, 0usize) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let gi0 = self.perm_mod12[ii + self.perm[jj] as usize] as usize;
        let gi1 = self.perm_mod12[ii + i1 + self.perm[jj + j1] as usize] as usize;
        let gi2 = self.perm_mod12[ii + 1 + self.perm[jj + 1] as usize] as usize;

        let mut t0 = 0.5 - x0 * x0 - y0 * y0;
        let n0 = if t0 < 0.0 {
            0.0
        } else {
            t0 *= t0;
            t0 * t0 * (GRAD3[gi0][0] * x0 + GRAD3[gi0][1] * y0)
        };

        let mut t1 = 0.5 - x1 * x1 - y1 * y1;
        let n1 = if t1 < 0.0 {
            0.0
        } else {
            t1 *= t1;
            t1 * t1 * (GRAD3[gi1][0] * x1 + GRAD3[gi1][1] * y1)
        };

        let mut t2 = 0.5 - x2 * x2 - y2 * y2;
        let n2 = if t2 < 0.0 {
            0.0
        } else {
            t2 *= t2;
            t2 * t2 * (GRAD3[gi2][0] * x2 + GRAD3[gi2][1] * y2)
        };

        70.0 * (n0 + n1 + n2)
    }
}

impl Default for SimplexNoise {
    /// Seed from OS entropy for callers that do not care about
    /// reproducibility.
    fn default() -> Self {
        Self::new(rand::random::<u64>())
    }
}

impl fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The tables are noise to a human; show enough to tell instances apart.
        f.debug_struct("SimplexNoise")
            .field("perm_prefix", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
