//! Integration tests: sweep + analytic solver + extrapolation
//!
//! With the analytic periodic-lattice solver every scaled sample equals
//! Hasimoto's correction, so the extrapolated infinite-domain mobility is
//! known in closed form.

use approx::assert_relative_eq;
use fcm_mobility::analysis::{extrapolate, summarize};
use fcm_mobility::output::{export_summary_csv, Overlay};
use fcm_mobility::physics::{HASIMOTO_LINEAR, hasimoto_correction};
use fcm_mobility::solver::{Discretization, DomainType, HasimotoSolver};
use fcm_mobility::sweep::{MobilitySweepDriver, SweepConfig};
use fcm_mobility::SweepError;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod common;
use common::relative_error;

#[test]
fn test_default_sweep_matches_hasimoto() {
    let driver = MobilitySweepDriver::new(SweepConfig::default());
    let result = driver
        .run(&HasimotoSolver::default(), &mut StdRng::seed_from_u64(0))
        .unwrap();

    for entry in &result.curve {
        let expected = hasimoto_correction(1.0, entry.domain_size);
        assert_eq!(entry.mobilities.len(), 5);
        for mobility in &entry.mobilities {
            assert!(
                relative_error(*mobility, expected) < 1e-12,
                "L = {}: {} vs {}",
                entry.domain_size,
                mobility,
                expected
            );
        }
    }
}

#[test]
fn test_extrapolation_recovers_stokes_limit() {
    let driver = MobilitySweepDriver::new(SweepConfig::default());
    let result = driver
        .run(&HasimotoSolver::default(), &mut StdRng::seed_from_u64(0))
        .unwrap();

    let extrapolation = extrapolate(&result.curve).unwrap();

    assert_relative_eq!(extrapolation.infinite_domain_mobility(), 1.0, epsilon = 1e-4);
    assert_relative_eq!(extrapolation.fit.slope, -HASIMOTO_LINEAR, epsilon = 1e-2);
    assert!(extrapolation.fit.r_squared > 0.999);
    assert_eq!(extrapolation.summaries.len(), 5);
    for summary in &extrapolation.summaries {
        assert_eq!(summary.count, 5);
        assert!(summary.std_dev < 1e-12);
    }
}

#[test]
fn test_larger_radius_scales_correction() {
    let config = SweepConfig::linspace(60.0, 200.0, 4, 2).with_radius(2.0);
    let result = MobilitySweepDriver::new(config)
        .run(&HasimotoSolver::default(), &mut StdRng::seed_from_u64(1))
        .unwrap();

    // 6πη·mobility = correction / a
    let extrapolation = extrapolate(&result.curve).unwrap();
    assert_relative_eq!(extrapolation.infinite_domain_mobility(), 0.5, epsilon = 1e-3);
}

#[test]
fn test_analytic_solver_rejects_non_periodic_domain() {
    let config = SweepConfig::new(vec![60.0], 1).with_discretization(
        Discretization::triply_periodic().domain_type(DomainType::DoublyPeriodic),
    );
    let error = MobilitySweepDriver::new(config)
        .run(&HasimotoSolver::default(), &mut StdRng::seed_from_u64(0))
        .unwrap_err();

    assert!(matches!(error, SweepError::SolverInitialization { .. }));
}

#[test]
fn test_single_size_cannot_be_extrapolated() {
    let result = MobilitySweepDriver::new(SweepConfig::new(vec![60.0], 3))
        .run(&HasimotoSolver::default(), &mut StdRng::seed_from_u64(0))
        .unwrap();

    assert_eq!(summarize(&result.curve).len(), 1);
    assert!(matches!(extrapolate(&result.curve), Err(SweepError::Analysis(_))));
}

#[test]
fn test_fit_overlay_and_summary_export() {
    let result = MobilitySweepDriver::new(SweepConfig::linspace(60.0, 200.0, 3, 2))
        .run(&HasimotoSolver::default(), &mut StdRng::seed_from_u64(0))
        .unwrap();
    let fit = extrapolate(&result.curve).unwrap().fit;

    let overlay = Overlay::from_fit("fit", &fit, 1.0 / 60.0, 10);
    assert_eq!(overlay.points.len(), 10);
    assert_eq!(overlay.points[0].0, 0.0);
    assert_relative_eq!(overlay.points[0].1, fit.intercept);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.csv");
    export_summary_csv(&result.curve, path.to_str().unwrap(), None).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(content.lines().nth(1).unwrap().starts_with("60.000000,"));
}
