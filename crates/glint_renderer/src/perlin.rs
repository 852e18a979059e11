//! Gradient (Perlin) noise.
//!
//! The lattice tables are generated once at construction and only read
//! afterwards, so one generator can be shared by every worker.

use glint_math::{random_unit_vector, Vec3};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

const POINT_COUNT: usize = 256;

/// Octaves summed by the turbulence used in noise textures.
pub const DEFAULT_TURBULENCE_DEPTH: u32 = 7;

/// Perlin noise generator with random unit gradients on an integer lattice.
#[derive(Debug, Clone)]
pub struct Perlin {
    ranvec: Vec<Vec3>,
    perm_x: Vec<usize>,
    perm_y: Vec<usize>,
    perm_z: Vec<usize>,
}

impl Perlin {
    /// Build the lattice tables from the given random stream.
    pub fn new(rng: &mut dyn RngCore) -> Self {
        let ranvec = (0..POINT_COUNT).map(|_| random_unit_vector(rng)).collect();

        Self {
            ranvec,
            perm_x: Self::generate_perm(rng),
            perm_y: Self::generate_perm(rng),
            perm_z: Self::generate_perm(rng),
        }
    }

    /// Build the lattice tables from a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Smoothly interpolated noise at `p`, in `[-1, 1]`.
    pub fn noise(&self, p: Vec3) -> f32 {
        let floor = p.floor();
        let frac = p - floor;
        let (i, j, k) = (floor.x as i64, floor.y as i64, floor.z as i64);

        let mut c = [[[Vec3::ZERO; 2]; 2]; 2];
        for (di, plane) in c.iter_mut().enumerate() {
            for (dj, row) in plane.iter_mut().enumerate() {
                for (dk, corner) in row.iter_mut().enumerate() {
                    let index = self.perm_x[lattice(i + di as i64)]
                        ^ self.perm_y[lattice(j + dj as i64)]
                        ^ self.perm_z[lattice(k + dk as i64)];
                    *corner = self.ranvec[index];
                }
            }
        }

        perlin_interp(&c, frac)
    }

    /// Sum of `depth` octaves of noise, halving weight and doubling frequency.
    pub fn turb(&self, p: Vec3, depth: u32) -> f32 {
        let mut accum = 0.0;
        let mut temp_p = p;
        let mut weight = 1.0;

        for _ in 0..depth {
            accum += weight * self.noise(temp_p);
            weight *= 0.5;
            temp_p *= 2.0;
        }

        accum.abs()
    }

    fn generate_perm(rng: &mut dyn RngCore) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..POINT_COUNT).collect();
        perm.shuffle(rng);
        perm
    }
}

/// Wrap a lattice coordinate into the table range.
#[inline]
fn lattice(n: i64) -> usize {
    (n & (POINT_COUNT as i64 - 1)) as usize
}

/// Trilinear blend of corner gradients with Hermite smoothing.
fn perlin_interp(c: &[[[Vec3; 2]; 2]; 2], frac: Vec3) -> f32 {
    let smooth = frac * frac * (Vec3::splat(3.0) - 2.0 * frac);
    let mut accum = 0.0;

    for (i, plane) in c.iter().enumerate() {
        for (j, row) in plane.iter().enumerate() {
            for (k, gradient) in row.iter().enumerate() {
                let corner = Vec3::new(i as f32, j as f32, k as f32);
                let weight_v = frac - corner;
                let blend = corner * smooth + (Vec3::ONE - corner) * (Vec3::ONE - smooth);
                accum += blend.x * blend.y * blend.z * gradient.dot(weight_v);
            }
        }
    }

    accum
}
