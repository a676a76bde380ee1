//! Random scalars and vectors.

use crate::vector::{Vector2, Vector3, Vector4};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Source of uniformly distributed random components.
///
/// Seed it once per run, either with a fixed seed for a reproducible
/// sequence or from OS entropy.
#[derive(Clone, Debug)]
pub struct VectorRng {
    rng: Pcg64Mcg,
}

impl VectorRng {
    /// Creates a generator producing the sequence determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64Mcg::from_os_rng(),
        }
    }

    /// Returns a random value in the closed interval `[min, max]`.
    ///
    /// # Panics
    /// If `min` exceeds `max`.
    pub fn random_float(&mut self, min: f32, max: f32) -> f32 {
        assert!(min <= max);
        self.rng.random_range(min..=max)
    }

    /// Returns a vector whose components are each drawn from `[min, max]`.
    pub fn random_vector2(&mut self, min: f32, max: f32) -> Vector2 {
        Vector2::new(self.random_float(min, max), self.random_float(min, max))
    }

    /// Returns a vector whose components are each drawn from `[min, max]`.
    pub fn random_vector3(&mut self, min: f32, max: f32) -> Vector3 {
        Vector3::new(
            self.random_float(min, max),
            self.random_float(min, max),
            self.random_float(min, max),
        )
    }

    /// Returns a vector whose components are each drawn from `[min, max]`.
    pub fn random_vector4(&mut self, min: f32, max: f32) -> Vector4 {
        Vector4::new(
            self.random_float(min, max),
            self.random_float(min, max),
            self.random_float(min, max),
            self.random_float(min, max),
        )
    }
}
