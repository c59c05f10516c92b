//! Mobility solver collaborators
//!
//! This module defines the seam between the sweep driver and the external
//! mobility solver. A mobility solver applies the hydrodynamic mobility
//! operator of a particle suspension inside a given domain; the driver only
//! orchestrates it.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Sweep configuration** (`SweepConfig`) - WHAT to measure
//!    - Domain sizes, trials, fluid properties
//!
//! 2. **Solver parameters** (`SolverParameters`) - the domain handed to the solver
//!    - Bounds, particle count, discretization selectors
//!
//! 3. **Solver** (`MobilitySolver` + `SolverHandle`) - HOW the mobility is computed
//!    - Opaque to the driver
//!
//! # Module Organization
//!
//! - **`traits`**: `MobilitySolver`, `SolverHandle`, `SolverParameters`, `MobilityResponse`
//! - **`domain`**: `DomainBounds`, `DomainType`, `Discretization`
//! - **`scoped`**: `ScopedHandle`, release-on-every-exit ownership of a handle
//! - **`methods`**: solvers shipped with the crate (`HasimotoSolver`)
//!
//! # Handle Lifecycle
//!
//! ```text
//! ┌──────────────────┐
//! │ initialize(params)│ ← once per domain size
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ set_positions    │ ◄─┐
//! └────────┬─────────┘   │ once per trial
//! ┌────────▼─────────┐   │
//! │ apply_mobility   │ ──┘
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ release          │ ← exactly once, also on error
//! └──────────────────┘
//! ```
//!
//! # Implementing a Solver
//!
//! ```rust
//! use fcm_mobility::solver::{MobilitySolver, SolverHandle, SolverParameters, MobilityResponse};
//!
//! struct FreeSpace;
//! struct FreeSpaceHandle { mobility: f64 }
//!
//! impl MobilitySolver for FreeSpace {
//!     type Handle = FreeSpaceHandle;
//!     fn name(&self) -> &str { "free space" }
//!     fn initialize(&self, p: &SolverParameters) -> Result<FreeSpaceHandle, String> {
//!         let mobility = 1.0 / (6.0 * std::f64::consts::PI * p.viscosity * p.hydrodynamic_radius);
//!         Ok(FreeSpaceHandle { mobility })
//!     }
//! }
//!
//! impl SolverHandle for FreeSpaceHandle {
//!     fn grid_spacing(&self) -> f64 { 0.0 }
//!     fn set_positions(&mut self, _positions: &[f64]) -> Result<(), String> { Ok(()) }
//!     fn apply_mobility(&mut self, forces: &[f64]) -> Result<MobilityResponse, String> {
//!         Ok(MobilityResponse::linear(forces.iter().map(|f| f * self.mobility).collect()))
//!     }
//!     fn release(&mut self) -> Result<(), String> { Ok(()) }
//! }
//! ```

pub mod traits;
pub mod domain;
pub mod scoped;
pub mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    MobilityResponse,
    MobilitySolver,
    SolverHandle,
    SolverParameters,
};

pub use domain::{Discretization, DomainBounds, DomainType};
pub use scoped::ScopedHandle;

pub use methods::{HasimotoHandle, HasimotoSolver};
