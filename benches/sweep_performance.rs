//! Performance benchmarks for the sweep driver
//!
//! The analytic solver costs almost nothing, so these benchmarks measure the
//! driver's own overhead: handle lifecycle, placement draws, bookkeeping and
//! the final scaling pass.
//!
//! # What We're Measuring
//!
//! 1. **Trials per size**: time should grow linearly with the trial count
//! 2. **Particles per trial**: placement and force arrays grow with `3N`
//! 3. **Extrapolation**: summary statistics and the SVD least-squares fit
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench sweep_performance
//!
//! # Only the trial scaling group
//! cargo bench --bench sweep_performance trials
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fcm_mobility::analysis::extrapolate;
use fcm_mobility::solver::{HasimotoSolver, MobilityResponse, MobilitySolver, SolverHandle, SolverParameters};
use fcm_mobility::sweep::{MobilitySweepDriver, SweepConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

// =================================================================================================
// Free-space solver for multi-particle runs
// =================================================================================================

/// Isolated Stokes drag for every particle, ignoring interactions
struct FreeSpace;

struct FreeSpaceHandle {
    mobility: f64,
}

impl MobilitySolver for FreeSpace {
    type Handle = FreeSpaceHandle;

    fn name(&self) -> &str {
        "Free space"
    }

    fn initialize(&self, parameters: &SolverParameters) -> Result<FreeSpaceHandle, String> {
        let drag = 6.0 * std::f64::consts::PI * parameters.viscosity * parameters.hydrodynamic_radius;
        Ok(FreeSpaceHandle { mobility: 1.0 / drag })
    }
}

impl SolverHandle for FreeSpaceHandle {
    fn grid_spacing(&self) -> f64 {
        0.5
    }

    fn set_positions(&mut self, _positions: &[f64]) -> Result<(), String> {
        Ok(())
    }

    fn apply_mobility(&mut self, forces: &[f64]) -> Result<MobilityResponse, String> {
        Ok(MobilityResponse::linear(forces.iter().map(|f| f * self.mobility).collect()))
    }

    fn release(&mut self) -> Result<(), String> {
        Ok(())
    }
}

// =================================================================================================
// Benchmarks
// =================================================================================================

/// Default sizes, increasing trial counts
fn benchmark_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("trials");
    let solver = HasimotoSolver::default();

    for trials in [1, 10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(trials), trials, |b, &trials| {
            // Setup phase (not measured)
            let driver = MobilitySweepDriver::new(SweepConfig::linspace(60.0, 200.0, 5, trials));

            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(0);
                driver.run(black_box(&solver), &mut rng).unwrap()
            });
        });
    }

    group.finish();
}

/// One size, increasing particle counts
fn benchmark_particles(c: &mut Criterion) {
    let mut group = c.benchmark_group("particles");

    for particles in [1, 10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(particles), particles, |b, &particles| {
            let driver =
                MobilitySweepDriver::new(SweepConfig::new(vec![200.0], 10).with_particles(particles));

            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(0);
                driver.run(black_box(&FreeSpace), &mut rng).unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_extrapolation(c: &mut Criterion) {
    let driver = MobilitySweepDriver::new(SweepConfig::linspace(60.0, 200.0, 50, 20));
    let result = driver
        .run(&HasimotoSolver::default(), &mut StdRng::seed_from_u64(0))
        .unwrap();

    c.bench_function("extrapolation/50 sizes", |b| {
        b.iter(|| extrapolate(black_box(&result.curve)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_trials,
    benchmark_particles,
    benchmark_extrapolation,
);

criterion_main!(benches);
