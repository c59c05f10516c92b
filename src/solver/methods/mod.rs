//! Concrete mobility solver collaborators
//!
//! This module contains implementations of [`MobilitySolver`](crate::solver::MobilitySolver)
//! that ship with the crate. Production FCM solvers live outside the crate and
//! plug in through the same traits.
//!
//! # Available Solvers
//!
//! - **[`HasimotoSolver`]**: closed-form periodic self-mobility of one sphere
//!   - Cost: no grid, constant time per trial
//!   - Use: exercising sweeps end to end, reference curves, benchmarks of the
//!     driver itself

pub mod hasimoto;

// Re-exports for convenience
pub use hasimoto::{HasimotoHandle, HasimotoSolver};
