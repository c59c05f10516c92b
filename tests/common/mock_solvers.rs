//! Mock solver collaborators for testing
//!
//! `StubSolver` returns a fixed velocity and records every call in a shared
//! log, so tests can check what the sweep driver asked of its collaborator.

use std::sync::{Arc, Mutex};

use fcm_mobility::solver::{MobilityResponse, MobilitySolver, SolverHandle, SolverParameters};

// =================================================================================================
// Call log
// =================================================================================================

/// One call received by a stub solver or one of its handles
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Initialize { domain_size: f64 },
    SetPositions { domain_size: f64, positions: Vec<f64> },
    ApplyMobility { domain_size: f64, forces: Vec<f64> },
    Release { domain_size: f64 },
}

/// Everything a stub solver saw, in call order
#[derive(Debug, Default)]
pub struct CallLog {
    pub calls: Vec<Call>,
    pub parameters: Vec<SolverParameters>,
}

impl CallLog {
    pub fn initializations(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Initialize { .. })).count()
    }

    pub fn releases(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Release { .. })).count()
    }

    pub fn releases_of(&self, size: f64) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Release { domain_size } if *domain_size == size))
            .count()
    }

    pub fn applies(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::ApplyMobility { .. })).count()
    }

    /// Trial-level calls (positions or mobility) made for `size`
    pub fn trial_calls_of(&self, size: f64) -> usize {
        self.calls
            .iter()
            .filter(|c| match c {
                Call::SetPositions { domain_size, .. } | Call::ApplyMobility { domain_size, .. } => {
                    *domain_size == size
                }
                _ => false,
            })
            .count()
    }

    /// Positions handed to the solver, with their domain size
    pub fn positions(&self) -> Vec<(f64, Vec<f64>)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::SetPositions { domain_size, positions } => Some((*domain_size, positions.clone())),
                _ => None,
            })
            .collect()
    }
}

// =================================================================================================
// Stub solver
// =================================================================================================

/// Solver returning the same velocity for every particle
#[derive(Debug, Clone)]
pub struct StubSolver {
    pub velocity: [f64; 3],
    pub grid_spacing: f64,

    /// Domain size whose initialization fails
    pub fail_initialize_at: Option<f64>,

    /// 1-based index (over the whole sweep) of the set_positions call that fails
    pub fail_set_positions_on_call: Option<usize>,

    /// 1-based index (over the whole sweep) of the apply call that fails
    pub fail_apply_on_call: Option<usize>,

    /// Domain size whose release fails
    pub fail_release_at: Option<f64>,

    pub log: Arc<Mutex<CallLog>>,
}

impl StubSolver {
    pub fn new(velocity: [f64; 3]) -> Self {
        Self {
            velocity,
            grid_spacing: 0.5,
            fail_initialize_at: None,
            fail_set_positions_on_call: None,
            fail_apply_on_call: None,
            fail_release_at: None,
            log: Arc::new(Mutex::new(CallLog::default())),
        }
    }

    pub fn with_grid_spacing(mut self, grid_spacing: f64) -> Self {
        self.grid_spacing = grid_spacing;
        self
    }

    pub fn failing_initialize_at(mut self, domain_size: f64) -> Self {
        self.fail_initialize_at = Some(domain_size);
        self
    }

    pub fn failing_set_positions_on_call(mut self, call: usize) -> Self {
        self.fail_set_positions_on_call = Some(call);
        self
    }

    pub fn failing_apply_on_call(mut self, call: usize) -> Self {
        self.fail_apply_on_call = Some(call);
        self
    }

    pub fn failing_release_at(mut self, domain_size: f64) -> Self {
        self.fail_release_at = Some(domain_size);
        self
    }

    /// Lock the shared call log
    pub fn log(&self) -> std::sync::MutexGuard<'_, CallLog> {
        self.log.lock().unwrap()
    }
}

impl MobilitySolver for StubSolver {
    type Handle = StubHandle;

    fn name(&self) -> &str {
        "Stub"
    }

    fn initialize(&self, parameters: &SolverParameters) -> Result<StubHandle, String> {
        let [xmin, xmax, ..] = parameters.bounds.as_limits();
        let domain_size = xmax - xmin;
        {
            let mut log = self.log();
            log.calls.push(Call::Initialize { domain_size });
            log.parameters.push(parameters.clone());
        }

        if self.fail_initialize_at == Some(domain_size) {
            return Err(format!("refusing domain size {}", domain_size));
        }

        Ok(StubHandle {
            solver: self.clone(),
            domain_size,
            flat_len: parameters.flat_len(),
        })
    }
}

/// Handle of a [`StubSolver`]
#[derive(Debug)]
pub struct StubHandle {
    solver: StubSolver,
    domain_size: f64,
    flat_len: usize,
}

impl SolverHandle for StubHandle {
    fn grid_spacing(&self) -> f64 {
        self.solver.grid_spacing
    }

    fn set_positions(&mut self, positions: &[f64]) -> Result<(), String> {
        let call = {
            let mut log = self.solver.log();
            log.calls.push(Call::SetPositions {
                domain_size: self.domain_size,
                positions: positions.to_vec(),
            });
            log.positions().len()
        };

        if positions.len() != self.flat_len {
            return Err(format!("expected {} coordinates, got {}", self.flat_len, positions.len()));
        }
        if self.solver.fail_set_positions_on_call == Some(call) {
            return Err(format!("set_positions call {} failed", call));
        }
        Ok(())
    }

    fn apply_mobility(&mut self, forces: &[f64]) -> Result<MobilityResponse, String> {
        let call = {
            let mut log = self.solver.log();
            log.calls.push(Call::ApplyMobility {
                domain_size: self.domain_size,
                forces: forces.to_vec(),
            });
            log.applies()
        };

        if self.solver.fail_apply_on_call == Some(call) {
            return Err(format!("apply call {} failed", call));
        }

        let velocities = self
            .solver
            .velocity
            .iter()
            .copied()
            .cycle()
            .take(self.flat_len)
            .collect();
        Ok(MobilityResponse::linear(velocities))
    }

    fn release(&mut self) -> Result<(), String> {
        self.solver.log().calls.push(Call::Release { domain_size: self.domain_size });
        if self.solver.fail_release_at == Some(self.domain_size) {
            return Err(format!("cannot free grids of domain size {}", self.domain_size));
        }
        Ok(())
    }
}
