//! Common utilities for integration tests

pub mod mock_solvers;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_solvers::{Call, CallLog, StubSolver};
pub use test_helpers::{
    default_drag,
    drag,
    relative_error,
    small_config,
};
