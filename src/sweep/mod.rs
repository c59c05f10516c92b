//! Finite-size mobility sweeps
//!
//! A sweep measures the self-mobility of randomly placed particles in cubic
//! periodic domains of increasing size, so that the periodic-image artifact
//! can be extrapolated away (`1/L → 0`).
//!
//! # Module Organization
//!
//! - **`config`**: `SweepConfig`, the literal sweep configuration
//! - **`placement`**: `UniformPlacement`, random positions inside `[0, L − h)`
//! - **`sample`**: `TrialSample`, `MobilityCurve`, `SweepResult`
//! - **`driver`**: `MobilitySweepDriver`, the orchestration loop
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────────┐     ┌─────────────────┐
//! │ SweepConfig  │ ──► │ MobilitySweepDriver │ ──► │ SweepResult     │
//! └──────────────┘     │  (solver, rng)      │     │  MobilityCurve  │
//!                      └─────────────────────┘     └────────┬────────┘
//!                                                           │
//!                                  ┌────────────────────────┼──────────────┐
//!                                  ▼                        ▼              ▼
//!                           analysis::extrapolate   output::plot   output::export
//! ```

pub mod config;
pub mod placement;
pub mod sample;
pub mod driver;

pub use config::SweepConfig;
pub use placement::UniformPlacement;
pub use sample::{CurveEntry, MobilityCurve, SweepResult, TrialSample};
pub use driver::MobilitySweepDriver;
