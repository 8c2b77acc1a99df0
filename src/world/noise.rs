//! 3-D simplex noise for time-varying resource generation
//!
//! Two spatial dimensions plus time: sampling the same `(x, y)` at increasing
//! `t` yields resource blobs that drift coherently instead of flickering.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

/// Gradient vectors for 3D (midpoints of the cube edges)
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

/// 3D simplex noise generator
pub struct SimplexNoise {
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Create a generator with a seeded permutation table
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut perm = [0u8; 512];

        let mut p: Vec<u8> = (0..=255).collect();

        // Fisher-Yates shuffle
        for i in (1..256).rev() {
            let j = rng.gen_range(0..=i);
            p.swap(i, j);
        }

        // Duplicate for overflow handling
        for i in 0..512 {
            perm[i] = p[i & 255];
        }

        Self { perm }
    }

    /// Sample noise at (x, y, z), returning a value in roughly [-1, 1]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        // Skew input space to determine which simplex cell we're in
        let s = (x + y + z) * F3;
        let i = (x + s).floor() as i32;
        let j = (y + s).floor() as i32;
        let k = (z + s).floor() as i32;

        let t = (i + j + k) as f64 * G3;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);
        let z0 = z - (k as f64 - t);

        // Rank the coordinates to pick the simplex traversal order
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        // Hash coordinates of the four simplex corners
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;

        let gi0 = self.hash(ii, jj, kk);
        let gi1 = self.hash(ii + i1, jj + j1, kk + k1);
        let gi2 = self.hash(ii + i2, jj + j2, kk + k2);
        let gi3 = self.hash(ii + 1, jj + 1, kk + 1);

        let n0 = Self::corner_contribution(x0, y0, z0, gi0);
        let n1 = Self::corner_contribution(x1, y1, z1, gi1);
        let n2 = Self::corner_contribution(x2, y2, z2, gi2);
        let n3 = Self::corner_contribution(x3, y3, z3, gi3);

        // Scale to [-1, 1]
        32.0 * (n0 + n1 + n2 + n3)
    }

    /// Sample noise remapped to `[0, 1]`, the form thresholded by generation
    pub fn sample01(&self, x: f64, y: f64, z: f64) -> f64 {
        (0.5 * (self.sample(x, y, z) + 1.0)).clamp(0.0, 1.0)
    }

    fn hash(&self, i: usize, j: usize, k: usize) -> usize {
        self.perm[i + self.perm[j + self.perm[k] as usize] as usize] as usize % 12
    }

    fn corner_contribution(x: f64, y: f64, z: f64, gi: usize) -> f64 {
        let t = 0.6 - x * x - y * y - z * z;
        if t < 0.0 {
            0.0
        } else {
            let t = t * t;
            t * t * (GRAD3[gi][0] * x + GRAD3[gi][1] * y + GRAD3[gi][2] * z)
        }
    }
}
