//! Stokes-flow relations used to normalize and check mobility samples
//!
//! Nothing here solves a flow problem. These are the closed-form quantities a
//! finite-size study compares against:
//!
//! - the Stokes drag coefficient `6·π·η` used to make sampled velocities
//!   dimensionless,
//! - the isolated-sphere mobility `1 / (6·π·η·a)`,
//! - Hasimoto's correction for a sphere in a cubic periodic lattice.

use std::f64::consts::PI;

/// Viscosity used by the reference triply periodic study: `1 / (4·√π)`
///
/// With this value and a unit radius, the Stokes drag `6·π·η·a` equals
/// `(3/2)·√π`.
pub const DEFAULT_VISCOSITY: f64 = 0.141_047_395_886_939_07;

/// Leading coefficient of Hasimoto's expansion (cubic lattice)
pub const HASIMOTO_LINEAR: f64 = 2.837_297;

/// Coefficient of the `(a/L)⁶` term in Hasimoto's expansion
pub const HASIMOTO_SIXTH: f64 = 27.4;

// =================================================================================================
// Fluid properties
// =================================================================================================

/// Fluid and particle properties shared by every domain size of a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Dynamic viscosity η
    pub viscosity: f64,

    /// Particle hydrodynamic radius a
    pub hydrodynamic_radius: f64,
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self {
            viscosity: DEFAULT_VISCOSITY,
            hydrodynamic_radius: 1.0,
        }
    }
}

impl FluidProperties {
    /// Create fluid properties
    pub fn new(viscosity: f64, hydrodynamic_radius: f64) -> Self {
        Self { viscosity, hydrodynamic_radius }
    }

    /// Validate that both properties are finite and strictly positive
    pub fn validate(&self) -> Result<(), String> {
        if !self.viscosity.is_finite() || self.viscosity <= 0.0 {
            return Err(format!("Viscosity must be positive and finite, got {}", self.viscosity));
        }
        if !self.hydrodynamic_radius.is_finite() || self.hydrodynamic_radius <= 0.0 {
            return Err(format!(
                "Hydrodynamic radius must be positive and finite, got {}",
                self.hydrodynamic_radius
            ));
        }
        Ok(())
    }

    /// Drag normalization `6·π·η` applied to raw velocity samples
    pub fn drag_scale(&self) -> f64 {
        stokes_drag_scale(self.viscosity)
    }

    /// Mobility of an isolated sphere in unbounded fluid
    pub fn stokes_mobility(&self) -> f64 {
        stokes_mobility(self.viscosity, self.hydrodynamic_radius)
    }
}

// =================================================================================================
// Closed-form relations
// =================================================================================================

/// Stokes drag normalization `6·π·η`
pub fn stokes_drag_scale(viscosity: f64) -> f64 {
    6.0 * PI * viscosity
}

/// Isolated-sphere mobility `1 / (6·π·η·a)`
pub fn stokes_mobility(viscosity: f64, radius: f64) -> f64 {
    1.0 / (stokes_drag_scale(viscosity) * radius)
}

/// Hasimoto's finite-size correction factor for a sphere of radius `radius`
/// in a cubic periodic box of edge `edge`
///
/// ```text
/// μ(L) / μ₀ = 1 − 2.837297·(a/L) + (4π/3)·(a/L)³ − 27.4·(a/L)⁶
/// ```
///
/// The expansion is only meaningful for `a ≪ L`.
pub fn hasimoto_correction(radius: f64, edge: f64) -> f64 {
    let ratio = radius / edge;
    1.0 - HASIMOTO_LINEAR * ratio + (4.0 * PI / 3.0) * ratio.powi(3) - HASIMOTO_SIXTH * ratio.powi(6)
}

/// Periodic self-mobility predicted by Hasimoto's expansion
pub fn hasimoto_mobility(fluid: &FluidProperties, edge: f64) -> f64 {
    fluid.stokes_mobility() * hasimoto_correction(fluid.hydrodynamic_radius, edge)
}

// =================================================================================================
// Tests
// =================================================================================================
