//! Example: Finite-size mobility of a single sphere, triply periodic
//!
//! Sweeps a cubic periodic box from L = 60 to L = 200 (5 sizes, 5 random
//! placements each), measures the x-velocity of a sphere pushed by a unit
//! force, and plots `6πη · mobility` against `1/L`.
//!
//! **Physical System**:
//! - One sphere, hydrodynamic radius a = 1
//! - Viscosity η = 1/(4√π)
//! - Force F = (1, 0, 0), no torque
//!
//! **Reference**: Hasimoto's expansion for a periodic lattice of spheres,
//! `1 − 2.837297 (a/L) + (4π/3)(a/L)³ − 27.4 (a/L)⁶`, which tends to 1.
//!
//! Run with `RUST_LOG=info` to see every trial.

use fcm_mobility::{
    analysis::extrapolate,
    output::{export_curve_csv, export_summary_csv, plot_finite_size, CsvConfig, CsvMetadata, Overlay, PlotConfig},
    physics::hasimoto_correction,
    solver::{Discretization, DomainType, HasimotoSolver},
    sweep::{MobilitySweepDriver, SweepConfig},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use std::time::Instant;

const SEED: u64 = 0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Finite-size Mobility - Triply Periodic Sweep");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Sweep configuration ======

    // Kernel type 0, triply periodic box
    let discretization = Discretization::triply_periodic()
        .kernel_type(0)
        .domain_type(DomainType::TriplyPeriodic);
    let config = SweepConfig::default().with_discretization(discretization);
    let radius = config.fluid.hydrodynamic_radius;

    println!("Parameters:");
    println!("  a (radius)    : {}", radius);
    println!("  η (viscosity) : {:.6}", config.fluid.viscosity);
    println!("  L (sizes)     : {:?}", config.domain_sizes);
    println!("  domain        : {}", config.discretization.domain_type);
    println!("  trials        : {}", config.trials);
    println!("  seed          : {}\n", SEED);

    // ====== Sweep ======

    let driver = MobilitySweepDriver::new(config);
    let solver = HasimotoSolver::default();
    let mut rng = StdRng::seed_from_u64(SEED);

    let start = Instant::now();
    let result = driver.run(&solver, &mut rng)?;
    println!("✓ {} trials in {:.3}s\n", result.trial_count(), start.elapsed().as_secs_f64());

    // ====== Extrapolation ======

    let extrapolation = extrapolate(&result.curve)?;

    println!("{:>8} {:>10} {:>14} {:>14}", "L", "1/L", "6πη·M (mean)", "Hasimoto");
    println!("{:-<50}", "");
    for summary in &extrapolation.summaries {
        println!(
            "{:>8.1} {:>10.6} {:>14.8} {:>14.8}",
            summary.domain_size,
            summary.inverse_size,
            summary.mean,
            hasimoto_correction(radius, summary.domain_size) / radius
        );
    }
    println!("\nLinear fit:");
    println!("  intercept (L → ∞) : {:.6}", extrapolation.infinite_domain_mobility());
    println!("  slope             : {:.6}", extrapolation.fit.slope);
    println!("  R²                : {:.8}\n", extrapolation.fit.r_squared);

    // ====== Output ======

    let tmp_dir = std::env::temp_dir();
    let max_inverse = result
        .curve
        .iter()
        .map(|e| e.inverse_size())
        .fold(0.0, f64::max);

    let overlays = vec![
        Overlay::from_fn("Hasimoto", max_inverse, 100, |x| {
            if x > 0.0 { hasimoto_correction(radius, 1.0 / x) / radius } else { 1.0 / radius }
        }),
        Overlay::from_fit("Linear fit", &extrapolation.fit, max_inverse, 2),
    ];

    let plot_path = tmp_dir.join("hasimoto_tp.png");
    let plot_config = PlotConfig::finite_size("Triply periodic, a = 1");
    plot_finite_size(&result.curve, &overlays, &plot_path.to_string_lossy(), Some(&plot_config))?;
    println!("Plot    : {}", plot_path.display());

    let metadata = CsvMetadata::from_sweep(&result, driver.config()).seed(SEED);
    let csv_config = CsvConfig::default().with_metadata(metadata);

    let csv_path = tmp_dir.join("hasimoto_tp.csv");
    export_curve_csv(&result.curve, &csv_path.to_string_lossy(), Some(&csv_config))?;
    println!("Samples : {}", csv_path.display());

    let summary_path = tmp_dir.join("hasimoto_tp_summary.csv");
    export_summary_csv(&result.curve, &summary_path.to_string_lossy(), Some(&csv_config))?;
    println!("Summary : {}", summary_path.display());

    Ok(())
}
