//! Error types for mobility sweeps
//!
//! Every failure aborts the sweep that raised it. The variants separate
//! problems the caller can fix (configuration) from failures reported by the
//! external solver collaborator (initialization, operation, release).

use thiserror::Error;

/// Solver call that failed during a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverOperation {
    /// Handing particle positions to the solver
    SetPositions,

    /// Applying the mobility operator to a force vector
    ApplyMobility,
}

impl std::fmt::Display for SolverOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverOperation::SetPositions => write!(f, "set_positions"),
            SolverOperation::ApplyMobility => write!(f, "apply_mobility"),
        }
    }
}

/// Top-level error type for the sweep driver and its analysis layer
#[derive(Debug, Error)]
pub enum SweepError {
    /// Invalid sweep parameters, detected before (or instead of) any trial
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The solver rejected its initialization parameters
    #[error("Solver initialization failed for domain size {domain_size}: {reason}")]
    SolverInitialization { domain_size: f64, reason: String },

    /// A solver call failed while a trial was running
    #[error("Solver {operation} failed for domain size {domain_size}, trial {trial}: {reason}")]
    SolverOperation {
        domain_size: f64,
        trial: usize,
        operation: SolverOperation,
        reason: String,
    },

    /// Explicit release of a solver handle reported an error
    #[error("Solver release failed for domain size {domain_size}: {reason}")]
    SolverRelease { domain_size: f64, reason: String },

    /// Post-processing of a finished curve failed
    #[error("Analysis error: {0}")]
    Analysis(String),
}

impl SweepError {
    /// Shorthand for a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        SweepError::Configuration(message.into())
    }

    /// True for errors the caller can fix by changing the configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, SweepError::Configuration(_))
    }
}
