//! Scoped ownership of a solver handle
//!
//! A `ScopedHandle` is acquired at the start of a domain size and released
//! when the domain's trials are done. If a trial fails, the guard is dropped
//! while the error propagates and the handle is released from `Drop`, so the
//! solver's grids never outlive the iteration that created them.

use std::ops::{Deref, DerefMut};

use crate::error::SweepError;
use crate::solver::traits::{MobilitySolver, SolverHandle, SolverParameters};

/// Guard that releases its handle exactly once
pub struct ScopedHandle<H: SolverHandle> {
    handle: H,
    domain_size: f64,
    released: bool,
}

impl<H: SolverHandle> ScopedHandle<H> {
    /// Initialize a handle through `solver` and take ownership of it
    pub fn acquire<S>(
        solver: &S,
        parameters: &SolverParameters,
        domain_size: f64,
    ) -> Result<Self, SweepError>
    where
        S: MobilitySolver<Handle = H> + ?Sized,
    {
        let handle = solver
            .initialize(parameters)
            .map_err(|reason| SweepError::SolverInitialization { domain_size, reason })?;

        log::debug!(
            "Acquired {} handle for domain size {} (grid spacing {})",
            solver.name(),
            domain_size,
            handle.grid_spacing()
        );

        Ok(Self { handle, domain_size, released: false })
    }

    /// Domain size this handle was built for
    pub fn domain_size(&self) -> f64 {
        self.domain_size
    }

    /// Release the handle and report the solver's answer
    pub fn release(mut self) -> Result<(), SweepError> {
        self.released = true;
        log::debug!("Releasing handle for domain size {}", self.domain_size);
        self.handle.release().map_err(|reason| SweepError::SolverRelease {
            domain_size: self.domain_size,
            reason,
        })
    }
}

impl<H: SolverHandle> Deref for ScopedHandle<H> {
    type Target = H;

    fn deref(&self) -> &H {
        &self.handle
    }
}

impl<H: SolverHandle> DerefMut for ScopedHandle<H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut self.handle
    }
}

impl<H: SolverHandle> Drop for ScopedHandle<H> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        log::debug!("Releasing handle for domain size {} on early exit", self.domain_size);
        if let Err(reason) = self.handle.release() {
            log::warn!(
                "Solver release failed for domain size {} while unwinding: {}",
                self.domain_size,
                reason
            );
        }
    }
}

// ================================================================================================
// Tests
// ================================================================================================
