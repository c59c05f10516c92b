//! Sweep configuration
//!
//! `SweepConfig` is written literally in code: a `Default` reproducing the
//! reference triply periodic study, factory constructors for the domain-size
//! list, and builder-style setters for everything else.

use std::collections::BTreeMap;

use nalgebra::Vector3;

use crate::error::SweepError;
use crate::physics::FluidProperties;
use crate::solver::{Discretization, DomainBounds, SolverParameters};

/// Configuration of a finite-size mobility sweep
///
/// # Examples
///
/// ```rust
/// use fcm_mobility::sweep::SweepConfig;
///
/// // Five sizes between 60 and 200, five trials each
/// let config = SweepConfig::linspace(60.0, 200.0, 5, 5)
///     .with_viscosity(1.0)
///     .with_radius(1.0);
///
/// assert_eq!(config.domain_sizes, vec![60.0, 95.0, 130.0, 165.0, 200.0]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Cubic domain edge lengths, swept in this order
    pub domain_sizes: Vec<f64>,

    /// Trials per domain size
    pub trials: usize,

    /// Per-size trial counts, keyed by index into `domain_sizes` (may be 0)
    pub trial_overrides: BTreeMap<usize, usize>,

    /// Number of particles placed in each trial
    pub particle_count: usize,

    /// Viscosity and hydrodynamic radius
    pub fluid: FluidProperties,

    /// Ask the solver for angular velocities as well
    pub has_torque: bool,

    /// Selectors forwarded to the solver
    pub discretization: Discretization,

    /// Force applied to every particle
    pub force: Vector3<f64>,
}

impl Default for SweepConfig {
    /// One particle, sizes `linspace(60, 200, 5)`, 5 trials, unit radius,
    /// viscosity `1/(4√π)`, unit force along x, triply periodic
    fn default() -> Self {
        Self::linspace(60.0, 200.0, 5, 5)
    }
}

impl SweepConfig {
    /// Create a configuration for explicit domain sizes
    pub fn new(domain_sizes: Vec<f64>, trials: usize) -> Self {
        Self {
            domain_sizes,
            trials,
            trial_overrides: BTreeMap::new(),
            particle_count: 1,
            fluid: FluidProperties::default(),
            has_torque: false,
            discretization: Discretization::default(),
            force: Vector3::x(),
        }
    }

    /// Create a configuration with `count` evenly spaced sizes from `start`
    /// to `stop` inclusive
    pub fn linspace(start: f64, stop: f64, count: usize, trials: usize) -> Self {
        let sizes = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (count - 1) as f64;
                (0..count).map(|i| start + step * i as f64).collect()
            }
        };
        Self::new(sizes, trials)
    }

    // ====================================== Builder methods ======================================

    /// Builder pattern: set viscosity
    pub fn with_viscosity(mut self, viscosity: f64) -> Self {
        self.fluid.viscosity = viscosity;
        self
    }

    /// Builder pattern: set hydrodynamic radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.fluid.hydrodynamic_radius = radius;
        self
    }

    /// Builder pattern: set particle count
    pub fn with_particles(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    /// Builder pattern: request angular velocities
    pub fn with_torque(mut self, has_torque: bool) -> Self {
        self.has_torque = has_torque;
        self
    }

    /// Builder pattern: set discretization selectors
    pub fn with_discretization(mut self, discretization: Discretization) -> Self {
        self.discretization = discretization;
        self
    }

    /// Builder pattern: set the force applied to every particle
    pub fn with_force(mut self, force: Vector3<f64>) -> Self {
        self.force = force;
        self
    }

    /// Builder pattern: override the trial count of the size at `index`
    pub fn with_trials_for(mut self, index: usize, trials: usize) -> Self {
        self.trial_overrides.insert(index, trials);
        self
    }

    // ====================================== Derived values =======================================

    /// Trial count for the size at `index`
    pub fn trials_for(&self, index: usize) -> usize {
        self.trial_overrides.get(&index).copied().unwrap_or(self.trials)
    }

    /// Normalization applied once to every raw sample (`6·π·η`)
    pub fn mobility_scale(&self) -> f64 {
        self.fluid.drag_scale()
    }

    /// Flat force array handed to the mobility operator
    pub fn flat_forces(&self) -> Vec<f64> {
        self.force
            .iter()
            .copied()
            .cycle()
            .take(3 * self.particle_count)
            .collect()
    }

    /// Solver initialization parameters for a cubic domain of edge `edge`
    pub fn solver_parameters(&self, edge: f64) -> SolverParameters {
        SolverParameters {
            particle_count: self.particle_count,
            hydrodynamic_radius: self.fluid.hydrodynamic_radius,
            has_torque: self.has_torque,
            bounds: DomainBounds::cubic(edge),
            viscosity: self.fluid.viscosity,
            discretization: self.discretization,
        }
    }

    /// Validate configuration
    ///
    /// Runs before any solver call. The draw-bounds check that depends on the
    /// solver's grid spacing happens later, once a handle exists.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.domain_sizes.is_empty() {
            return Err(SweepError::config("At least one domain size is required"));
        }
        for (index, size) in self.domain_sizes.iter().enumerate() {
            if !size.is_finite() || *size <= 0.0 {
                return Err(SweepError::config(format!(
                    "Domain size #{} must be positive and finite, got {}",
                    index, size
                )));
            }
        }
        if self.trials == 0 {
            return Err(SweepError::config("Trial count must be at least 1"));
        }
        if let Some(index) = self.trial_overrides.keys().find(|i| **i >= self.domain_sizes.len()) {
            return Err(SweepError::config(format!(
                "Trial override refers to domain size #{}, but only {} sizes are configured",
                index,
                self.domain_sizes.len()
            )));
        }
        if self.particle_count == 0 {
            return Err(SweepError::config("Particle count must be at least 1"));
        }
        self.fluid.validate().map_err(SweepError::Configuration)?;
        if self.force.iter().any(|f| !f.is_finite()) {
            return Err(SweepError::config("Applied force must be finite"));
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
