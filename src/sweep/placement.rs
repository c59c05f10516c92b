//! Uniform random particle placement
//!
//! Each coordinate is drawn independently from `[0, L − h)`, where `h` is the
//! grid spacing reported by the solver handle. The margin keeps the particle
//! inside the solver's addressable interior.

use rand::Rng;
use rand::distr::{Distribution, Uniform};

use crate::error::SweepError;

/// Sampler of particle positions inside one cubic domain
#[derive(Debug, Clone)]
pub struct UniformPlacement {
    upper: f64,
    distribution: Uniform<f64>,
}

impl UniformPlacement {
    /// Build a sampler for a domain of edge `domain_size` and a solver grid
    /// spacing `grid_spacing`
    ///
    /// Fails with a configuration error when `domain_size − grid_spacing` is
    /// not a positive, finite upper bound.
    pub fn new(domain_size: f64, grid_spacing: f64) -> Result<Self, SweepError> {
        let upper = domain_size - grid_spacing;
        if !upper.is_finite() || upper <= 0.0 {
            return Err(SweepError::config(format!(
                "Degenerate placement bounds for domain size {}: grid spacing {} leaves [0, {})",
                domain_size, grid_spacing, upper
            )));
        }
        let distribution = Uniform::new(0.0, upper).map_err(|e| {
            SweepError::config(format!("Invalid placement range [0, {}): {}", upper, e))
        })?;
        Ok(Self { upper, distribution })
    }

    /// Exclusive upper bound of every coordinate
    pub fn upper_bound(&self) -> f64 {
        self.upper
    }

    /// Draw flat positions (`3 × particle_count` coordinates)
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R, particle_count: usize) -> Vec<f64> {
        (0..3 * particle_count)
            .map(|_| self.distribution.sample(rng))
            .collect()
    }

    /// True when every coordinate of `positions` lies in `[0, upper)`
    pub fn contains(&self, positions: &[f64]) -> bool {
        positions.iter().all(|x| *x >= 0.0 && *x < self.upper)
    }
}

// ================================================================================================
// Tests
// ================================================================================================
