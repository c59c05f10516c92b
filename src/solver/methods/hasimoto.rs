//! Analytic reference solver for a single sphere in a cubic periodic box
//!
//! `HasimotoSolver` implements the collaborator traits without any grid: the
//! returned velocity is the applied force times Hasimoto's periodic
//! self-mobility. It stands in for an FCM solver when exercising the sweep
//! driver end to end, and gives the finite-size plot a curve with a known
//! `1/L → 0` limit.
//!
//! # Limits
//!
//! - one particle (no pair interactions are modelled)
//! - cubic, triply periodic domains only
//! - the result does not depend on where the particle sits
//!
//! # Example
//!
//! ```rust
//! use fcm_mobility::solver::{HasimotoSolver, MobilitySolver, SolverHandle};
//! use fcm_mobility::solver::{SolverParameters, DomainBounds, Discretization};
//!
//! let solver = HasimotoSolver::new(0.5);
//! let parameters = SolverParameters {
//!     particle_count: 1,
//!     hydrodynamic_radius: 1.0,
//!     has_torque: false,
//!     bounds: DomainBounds::cubic(60.0),
//!     viscosity: 1.0,
//!     discretization: Discretization::triply_periodic(),
//! };
//!
//! let mut handle = solver.initialize(&parameters).unwrap();
//! handle.set_positions(&[10.0, 10.0, 10.0]).unwrap();
//! let response = handle.apply_mobility(&[1.0, 0.0, 0.0]).unwrap();
//! assert!(response.velocities[0] > 0.0);
//! handle.release().unwrap();
//! ```

use crate::physics::{FluidProperties, hasimoto_mobility};
use crate::solver::domain::DomainType;
use crate::solver::traits::{MobilityResponse, MobilitySolver, SolverHandle, SolverParameters};

/// Analytic periodic-lattice mobility solver
#[derive(Debug, Clone, Copy)]
pub struct HasimotoSolver {
    /// Grid spacing reported by every handle, as a fraction of the radius
    spacing_per_radius: f64,
}

impl HasimotoSolver {
    /// Create a solver whose handles report `spacing_per_radius × radius`
    /// as their grid spacing
    pub fn new(spacing_per_radius: f64) -> Self {
        Self { spacing_per_radius }
    }
}

impl Default for HasimotoSolver {
    /// Grid spacing of half a radius, a common FCM resolution
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl MobilitySolver for HasimotoSolver {
    type Handle = HasimotoHandle;

    fn name(&self) -> &str {
        "Hasimoto (analytic)"
    }

    fn initialize(&self, parameters: &SolverParameters) -> Result<HasimotoHandle, String> {
        parameters.validate()?;

        if !self.spacing_per_radius.is_finite() || self.spacing_per_radius <= 0.0 {
            return Err(format!(
                "Grid spacing factor must be positive, got {}",
                self.spacing_per_radius
            ));
        }
        if parameters.particle_count != 1 {
            return Err(format!(
                "HasimotoSolver supports a single particle, got {}",
                parameters.particle_count
            ));
        }
        if parameters.discretization.domain_type != DomainType::TriplyPeriodic {
            return Err(format!(
                "HasimotoSolver requires a triply periodic domain, got {}",
                parameters.discretization.domain_type
            ));
        }
        if !parameters.bounds.is_cubic() {
            return Err(format!("HasimotoSolver requires a cubic domain, got {}", parameters.bounds));
        }

        let fluid = FluidProperties::new(parameters.viscosity, parameters.hydrodynamic_radius);
        let edge = parameters.bounds.min_extent();

        Ok(HasimotoHandle {
            mobility: hasimoto_mobility(&fluid, edge),
            grid_spacing: self.spacing_per_radius * parameters.hydrodynamic_radius,
            has_torque: parameters.has_torque,
            positions: None,
            released: false,
        })
    }
}

/// Handle for one cubic domain
#[derive(Debug)]
pub struct HasimotoHandle {
    mobility: f64,
    grid_spacing: f64,
    has_torque: bool,
    positions: Option<[f64; 3]>,
    released: bool,
}

impl HasimotoHandle {
    /// Scalar self-mobility applied to every force
    pub fn mobility(&self) -> f64 {
        self.mobility
    }

    fn ensure_live(&self) -> Result<(), String> {
        if self.released {
            Err("Handle used after release".to_string())
        } else {
            Ok(())
        }
    }
}

impl SolverHandle for HasimotoHandle {
    fn grid_spacing(&self) -> f64 {
        self.grid_spacing
    }

    fn set_positions(&mut self, positions: &[f64]) -> Result<(), String> {
        self.ensure_live()?;
        match positions {
            [x, y, z] if x.is_finite() && y.is_finite() && z.is_finite() => {
                self.positions = Some([*x, *y, *z]);
                Ok(())
            }
            [_, _, _] => Err("Particle position must be finite".to_string()),
            _ => Err(format!("Expected 3 position components, got {}", positions.len())),
        }
    }

    fn apply_mobility(&mut self, forces: &[f64]) -> Result<MobilityResponse, String> {
        self.ensure_live()?;
        if self.positions.is_none() {
            return Err("Positions must be set before applying the mobility operator".to_string());
        }
        if forces.len() != 3 {
            return Err(format!("Expected 3 force components, got {}", forces.len()));
        }

        let velocities: Vec<f64> = forces.iter().map(|f| self.mobility * f).collect();

        if self.has_torque {
            Ok(MobilityResponse::with_angular(velocities, vec![0.0; 3]))
        } else {
            Ok(MobilityResponse::linear(velocities))
        }
    }

    fn release(&mut self) -> Result<(), String> {
        self.ensure_live()?;
        self.released = true;
        self.positions = None;
        Ok(())
    }
}

// ================================================================================================
// Tests
// ================================================================================================
