//! Finite-size mobility sweep driver
//!
//! # Algorithm
//!
//! For each domain size L, in configured order:
//!
//! 1. acquire a scoped solver handle for the cubic domain `[0, L]³`
//! 2. build the placement sampler on `[0, L − h)` from the handle's grid spacing h
//! 3. for every trial: draw positions, set them, apply the configured force,
//!    keep the returned velocity
//! 4. release the handle
//!
//! Once every size is done the raw samples are scaled by `6·π·η`, exactly
//! once, into a [`MobilityCurve`].
//!
//! # Failure policy
//!
//! Any error aborts the whole sweep. The handle of the size being processed
//! is released before the error reaches the caller, and no partial curve is
//! returned.
//!
//! # Example
//!
//! ```rust
//! use fcm_mobility::sweep::{MobilitySweepDriver, SweepConfig};
//! use fcm_mobility::solver::HasimotoSolver;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = SweepConfig::linspace(60.0, 200.0, 3, 2);
//! let driver = MobilitySweepDriver::new(config);
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let result = driver.run(&HasimotoSolver::default(), &mut rng).unwrap();
//! assert_eq!(result.curve.domain_sizes(), vec![60.0, 130.0, 200.0]);
//! assert_eq!(result.trial_count(), 6);
//! ```

use rand::Rng;

use crate::error::{SolverOperation, SweepError};
use crate::solver::{MobilitySolver, ScopedHandle, SolverHandle};
use crate::sweep::config::SweepConfig;
use crate::sweep::placement::UniformPlacement;
use crate::sweep::sample::{MobilityCurve, SweepResult, TrialSample};

/// Orchestrates a sweep over domain sizes against one solver collaborator
///
/// The driver owns no numerical state of its own: the solver and the random
/// source are passed to every run, so repeated runs with equally seeded
/// sources reproduce each other.
#[derive(Debug, Clone)]
pub struct MobilitySweepDriver {
    config: SweepConfig,
}

impl MobilitySweepDriver {
    /// Create a driver for `config`
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Configuration this driver runs
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run the sweep sequentially
    ///
    /// # Errors
    ///
    /// - `SweepError::Configuration` before any solver call when the
    ///   configuration is invalid, or after initialization when the grid
    ///   spacing leaves no room to place a particle
    /// - `SweepError::SolverInitialization`, `SolverOperation`, `SolverRelease`
    ///   when the collaborator fails
    pub fn run<S, R>(&self, solver: &S, rng: &mut R) -> Result<SweepResult, SweepError>
    where
        S: MobilitySolver + ?Sized,
        R: Rng + ?Sized,
    {
        // ====== Step 1: Validation ======

        self.config.validate()?;

        log::info!(
            "Starting mobility sweep with {} over {} domain sizes",
            solver.name(),
            self.config.domain_sizes.len()
        );

        // ====== Step 2: Sweep ======

        let mut per_domain = Vec::with_capacity(self.config.domain_sizes.len());
        for (index, &domain_size) in self.config.domain_sizes.iter().enumerate() {
            per_domain.push(self.run_domain(solver, index, domain_size, rng)?);
        }

        // ====== Step 3: Assemble ======

        Ok(self.assemble(solver.name(), per_domain))
    }

    /// Run the sweep with one task per domain size
    ///
    /// Every size owns its own handle and its own `StdRng`, seeded from `rng`
    /// in configured order before the fan-out. The result is therefore
    /// reproducible for a given seed, but differs from [`run`](Self::run)
    /// with the same seed.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<S, R>(&self, solver: &S, rng: &mut R) -> Result<SweepResult, SweepError>
    where
        S: MobilitySolver + Sync + ?Sized,
        R: Rng + ?Sized,
    {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use rayon::prelude::*;

        self.config.validate()?;

        let seeds: Vec<u64> = self.config.domain_sizes.iter().map(|_| rng.random()).collect();

        log::info!(
            "Starting parallel mobility sweep with {} over {} domain sizes",
            solver.name(),
            seeds.len()
        );

        let per_domain = self
            .config
            .domain_sizes
            .par_iter()
            .zip(seeds.par_iter())
            .enumerate()
            .map(|(index, (&domain_size, &seed))| {
                let mut local = StdRng::seed_from_u64(seed);
                self.run_domain(solver, index, domain_size, &mut local)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.assemble(solver.name(), per_domain))
    }

    /// Trials of one domain size, on a handle scoped to this call
    fn run_domain<S, R>(
        &self,
        solver: &S,
        index: usize,
        domain_size: f64,
        rng: &mut R,
    ) -> Result<Vec<TrialSample>, SweepError>
    where
        S: MobilitySolver + ?Sized,
        R: Rng + ?Sized,
    {
        let trials = self.config.trials_for(index);
        let particle_count = self.config.particle_count;
        let parameters = self.config.solver_parameters(domain_size);
        let expected_len = parameters.flat_len();

        let mut handle = ScopedHandle::acquire(solver, &parameters, domain_size)?;
        let mut samples = Vec::with_capacity(trials);

        if trials > 0 {
            let placement = UniformPlacement::new(domain_size, handle.grid_spacing())?;
            let forces = self.config.flat_forces();

            for trial in 0..trials {
                let positions = placement.draw(rng, particle_count);

                handle.set_positions(&positions).map_err(|reason| SweepError::SolverOperation {
                    domain_size,
                    trial,
                    operation: SolverOperation::SetPositions,
                    reason,
                })?;

                let response = handle
                    .apply_mobility(&forces)
                    .and_then(|response| response.validate(expected_len).map(|_| response))
                    .map_err(|reason| SweepError::SolverOperation {
                        domain_size,
                        trial,
                        operation: SolverOperation::ApplyMobility,
                        reason,
                    })?;

                log::info!("L = {}, trial {}: V = {:?}", domain_size, trial, response.velocities);

                samples.push(TrialSample {
                    domain_size,
                    trial,
                    positions,
                    velocities: response.velocities,
                    angular_velocities: response.angular_velocities,
                });
            }
        } else {
            log::warn!("Domain size {} has no trials, its curve entry will be empty", domain_size);
        }

        handle.release()?;
        Ok(samples)
    }

    fn assemble(&self, solver_name: &str, per_domain: Vec<Vec<TrialSample>>) -> SweepResult {
        let scale = self.config.mobility_scale();
        let curve = MobilityCurve::from_raw(
            self.config
                .domain_sizes
                .iter()
                .copied()
                .zip(per_domain.iter().map(Vec::as_slice)),
            scale,
        );

        log::info!(
            "Mobility sweep finished: {} samples over {} sizes",
            curve.total_samples(),
            curve.len()
        );

        SweepResult {
            curve,
            samples: per_domain,
            solver_name: solver_name.to_string(),
            scale,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
