// src/io/demand.rs

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Daily demand generator based on a Normal (Bell Curve) distribution.
///
/// Draws are `mean + std_dev * z` with `z` standard normal, so a zero
/// standard deviation yields exactly `mean` every day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandModel {
    mean: f64,
    std_dev: f64,
    clamp_at_zero: bool,
}

impl DemandModel {
    /// # Arguments
    /// * `mean` - Mean daily demand.
    /// * `std_dev` - Standard deviation of daily demand.
    /// * `clamp_at_zero` - Replace negative draws with 0.
    ///
    /// `std_dev` must be finite and non-negative; validated parameters
    /// guarantee this.
    pub fn new(mean: f64, std_dev: f64, clamp_at_zero: bool) -> Self {
        debug_assert!(std_dev.is_finite() && std_dev >= 0.0);
        Self {
            mean,
            std_dev,
            clamp_at_zero,
        }
    }

    /// Draws one day of demand.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        let val = self.mean + self.std_dev * z;
        if self.clamp_at_zero {
            val.max(0.0)
        } else {
            val
        }
    }

    /// Draws `days` independent daily demands.
    pub fn schedule<R: Rng + ?Sized>(&self, days: usize, rng: &mut R) -> Vec<f64> {
        (0..days).map(|_| self.sample(rng)).collect()
    }
}
