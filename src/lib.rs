//! fcm-mobility: Finite-Size Mobility Sweeps
//!
//! Measures how the self-mobility of a particle in a periodic Stokes flow
//! depends on the size of its domain. A sweep places particles at random in
//! cubic domains of increasing edge length, asks an external mobility solver
//! for the velocity produced by a unit force, and collects the normalized
//! results as a curve versus `1/L`.
//!
//! # Architecture
//!
//! fcm-mobility is built on two core principles:
//!
//! 1. **Separation of Orchestration and Numerics**
//!    - The sweep driver decides what to measure (sizes, trials, placement)
//!    - A solver collaborator provides the mobility operator (how to measure)
//!
//! 2. **Deterministic, Checked Lifecycle**
//!    - Solver handles are scoped and released exactly once, even on errors
//!    - The random source is injected, so a seed reproduces a sweep
//!
//! # Quick Start
//!
//! ```rust
//! use fcm_mobility::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), SweepError> {
//! // 1. Configure the sweep: 5 sizes from 60 to 200, 5 trials each
//! let config = SweepConfig::linspace(60.0, 200.0, 5, 5);
//! let driver = MobilitySweepDriver::new(config);
//!
//! // 2. Run it against a solver with a seeded random source
//! let mut rng = StdRng::seed_from_u64(0);
//! let result = driver.run(&HasimotoSolver::default(), &mut rng)?;
//!
//! // 3. Extrapolate to an infinite domain
//! let extrapolation = extrapolate(&result.curve)?;
//! assert!((extrapolation.infinite_domain_mobility() - 1.0).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Fluid properties and closed-form hydrodynamics
//! - [`solver`]: Solver collaborator contract and the analytic reference solver
//! - [`sweep`]: Configuration, placement and the sweep driver
//! - [`analysis`]: Statistics and extrapolation of finished curves
//! - [`output`]: Plotting and CSV export

// Core modules
pub mod error;
pub mod physics;
pub mod solver;
pub mod sweep;

// Post-processing
pub mod analysis;
pub mod output;

pub use error::{SolverOperation, SweepError};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use fcm_mobility::prelude::*;
    //! ```
    pub use crate::error::SweepError;
    pub use crate::physics::FluidProperties;
    pub use crate::solver::{Discretization,
                            DomainBounds,
                            DomainType,
                            HasimotoSolver,
                            MobilityResponse,
                            MobilitySolver,
                            SolverHandle,
                            SolverParameters};
    pub use crate::sweep::{MobilityCurve,
                           MobilitySweepDriver,
                           SweepConfig,
                           SweepResult};
    pub use crate::analysis::{extrapolate, Extrapolation};
}
