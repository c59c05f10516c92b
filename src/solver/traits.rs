//! Mobility solver collaborator traits and types
//!
//! # Design Philosophy
//!
//! The FCM solver is an external numerical service. The sweep driver only
//! needs four operations from it, split across two traits:
//!
//! - `MobilitySolver::initialize` builds a handle bound to one domain
//! - `SolverHandle::set_positions` replaces the particle configuration
//! - `SolverHandle::apply_mobility` maps forces to velocities
//! - `SolverHandle::release` frees the solver's internal grids
//!
//! Errors cross this seam as plain `String` messages; the driver adds the
//! domain size, trial and operation before surfacing them.
//!
//! # Stability Guarantee
//!
//! - `MobilitySolver` and `SolverHandle`: the four operations will not change
//! - `SolverParameters`: fields won't be removed

use crate::solver::domain::{DomainBounds, Discretization};

// =================================================================================================
// Initialization parameters
// =================================================================================================

/// Everything a solver needs to build a handle for one domain
///
/// # Examples
///
/// ```rust
/// use fcm_mobility::solver::{SolverParameters, DomainBounds, Discretization};
///
/// let parameters = SolverParameters {
///     particle_count: 1,
///     hydrodynamic_radius: 1.0,
///     has_torque: false,
///     bounds: DomainBounds::cubic(60.0),
///     viscosity: 0.5,
///     discretization: Discretization::triply_periodic(),
/// };
/// assert!(parameters.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParameters {
    /// Number of particles the handle will hold
    pub particle_count: usize,

    /// Particle hydrodynamic radius
    pub hydrodynamic_radius: f64,

    /// Whether the solver should also return angular velocities
    pub has_torque: bool,

    /// Domain limits
    pub bounds: DomainBounds,

    /// Fluid viscosity
    pub viscosity: f64,

    /// Kernel and domain selectors
    pub discretization: Discretization,
}

impl SolverParameters {
    /// Length of the flat position and force arrays (`3 × particle_count`)
    pub fn flat_len(&self) -> usize {
        3 * self.particle_count
    }

    /// Validate parameters before they reach the solver
    pub fn validate(&self) -> Result<(), String> {
        if self.particle_count == 0 {
            return Err("Particle count must be at least 1".to_string());
        }
        if !self.hydrodynamic_radius.is_finite() || self.hydrodynamic_radius <= 0.0 {
            return Err(format!(
                "Hydrodynamic radius must be positive and finite, got {}",
                self.hydrodynamic_radius
            ));
        }
        if !self.viscosity.is_finite() || self.viscosity <= 0.0 {
            return Err(format!("Viscosity must be positive and finite, got {}", self.viscosity));
        }
        self.bounds.validate()
    }
}

// =================================================================================================
// Mobility response
// =================================================================================================

/// Result of applying the mobility operator
///
/// Both arrays are flat, three components per particle.
#[derive(Debug, Clone, PartialEq)]
pub struct MobilityResponse {
    /// Linear velocities
    pub velocities: Vec<f64>,

    /// Angular velocities (only when the handle was built with torque)
    pub angular_velocities: Option<Vec<f64>>,
}

impl MobilityResponse {
    /// Response carrying linear velocities only
    pub fn linear(velocities: Vec<f64>) -> Self {
        Self { velocities, angular_velocities: None }
    }

    /// Response carrying linear and angular velocities
    pub fn with_angular(velocities: Vec<f64>, angular_velocities: Vec<f64>) -> Self {
        Self { velocities, angular_velocities: Some(angular_velocities) }
    }

    /// Check shape and finiteness against the expected flat length
    /// (see [`SolverParameters::flat_len`])
    pub fn validate(&self, expected: usize) -> Result<(), String> {
        if self.velocities.len() != expected {
            return Err(format!(
                "Velocity length mismatch: expected {} components, got {}",
                expected,
                self.velocities.len()
            ));
        }
        if self.velocities.iter().any(|v| !v.is_finite()) {
            return Err("NaN or Inf detected in returned velocities".to_string());
        }
        if let Some(angular) = &self.angular_velocities {
            if angular.len() != expected {
                return Err(format!(
                    "Angular velocity length mismatch: expected {} components, got {}",
                    expected,
                    angular.len()
                ));
            }
            if angular.iter().any(|v| !v.is_finite()) {
                return Err("NaN or Inf detected in returned angular velocities".to_string());
            }
        }
        Ok(())
    }
}

// =================================================================================================
// Collaborator traits
// =================================================================================================

/// A mobility solver able to build handles for a given domain
///
/// Implementations must be cheap to share: the solver itself holds no
/// per-domain state, every domain gets its own handle.
pub trait MobilitySolver {
    /// Handle type owning the solver's per-domain resources
    type Handle: SolverHandle;

    /// Human-readable solver name
    fn name(&self) -> &str;

    /// Initialize a handle bound to the domain described by `parameters`
    fn initialize(&self, parameters: &SolverParameters) -> Result<Self::Handle, String>;
}

/// Per-domain solver resource
///
/// A handle is driven by exactly one owner. `release` is called once, after
/// which the handle is dropped without further calls.
pub trait SolverHandle {
    /// Grid spacing chosen by the solver for this domain
    fn grid_spacing(&self) -> f64;

    /// Replace all particle positions (flat, `3 × particle_count`)
    fn set_positions(&mut self, positions: &[f64]) -> Result<(), String>;

    /// Apply the mobility operator to flat forces (`3 × particle_count`)
    fn apply_mobility(&mut self, forces: &[f64]) -> Result<MobilityResponse, String>;

    /// Free the solver's resources
    fn release(&mut self) -> Result<(), String>;
}

// =================================================================================================
// Tests
// =================================================================================================
