//! Helper functions for integration tests

use std::f64::consts::PI;

use fcm_mobility::physics::DEFAULT_VISCOSITY;
use fcm_mobility::sweep::SweepConfig;

/// Relative error |computed - expected| / |expected|
pub fn relative_error(computed: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-15 {
        computed.abs()
    } else {
        (computed - expected).abs() / expected.abs()
    }
}

/// Stokes drag scale `6·π·η`
pub fn drag(viscosity: f64) -> f64 {
    6.0 * PI * viscosity
}

/// Drag scale of the default fluid
pub fn default_drag() -> f64 {
    drag(DEFAULT_VISCOSITY)
}

/// Small sweep over explicit sizes with the default fluid
pub fn small_config(sizes: &[f64], trials: usize) -> SweepConfig {
    SweepConfig::new(sizes.to_vec(), trials)
}
