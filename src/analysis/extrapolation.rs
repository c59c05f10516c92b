//! Finite-size extrapolation of a mobility curve
//!
//! The leading periodic-image correction to the self-mobility is linear in
//! `1/L`, so the infinite-domain value is the intercept of a straight line
//! fitted through the per-size means.

use nalgebra::{DMatrix, DVector};

use crate::error::SweepError;
use crate::sweep::MobilityCurve;

/// Summary statistics of one domain size
#[derive(Debug, Clone, PartialEq)]
pub struct SizeSummary {
    /// Cubic domain edge length L
    pub domain_size: f64,

    /// `1/L`
    pub inverse_size: f64,

    /// Mean scaled mobility
    pub mean: f64,

    /// Sample standard deviation (0 for a single sample)
    pub std_dev: f64,

    /// Number of samples
    pub count: usize,
}

/// Straight line `y = intercept + slope · x`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,

    /// Coefficient of determination R²
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Result of extrapolating a curve to `1/L → 0`
#[derive(Debug, Clone)]
pub struct Extrapolation {
    /// Per-size statistics used for the fit (non-empty sizes only)
    pub summaries: Vec<SizeSummary>,

    /// Fit of mean mobility against `1/L`
    pub fit: LinearFit,
}

impl Extrapolation {
    /// Extrapolated mobility of an infinite domain
    pub fn infinite_domain_mobility(&self) -> f64 {
        self.fit.intercept
    }
}

/// Per-size statistics, skipping sizes without samples
pub fn summarize(curve: &MobilityCurve) -> Vec<SizeSummary> {
    curve
        .iter()
        .filter(|entry| !entry.mobilities.is_empty())
        .map(|entry| {
            let count = entry.mobilities.len();
            let mean = entry.mobilities.iter().sum::<f64>() / count as f64;
            let std_dev = if count > 1 {
                let ss: f64 = entry.mobilities.iter().map(|m| (m - mean).powi(2)).sum();
                (ss / (count - 1) as f64).sqrt()
            } else {
                0.0
            };
            SizeSummary {
                domain_size: entry.domain_size,
                inverse_size: entry.inverse_size(),
                mean,
                std_dev,
                count,
            }
        })
        .collect()
}

/// Least-squares line through `(x, y)`
///
/// # Errors
///
/// `SweepError::Analysis` when lengths differ, data is not finite, or fewer
/// than two distinct abscissae are given.
pub fn fit_linear(x: &[f64], y: &[f64]) -> Result<LinearFit, SweepError> {
    if x.len() != y.len() {
        return Err(SweepError::Analysis(format!(
            "Data length mismatch: {} abscissae versus {} ordinates",
            x.len(),
            y.len()
        )));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(SweepError::Analysis("NaN or Inf detected in fit data".to_string()));
    }

    let first = x.first().copied().unwrap_or(f64::NAN);
    if x.len() < 2 || x.iter().all(|v| *v == first) {
        return Err(SweepError::Analysis(
            "At least two distinct domain sizes are required for a linear fit".to_string(),
        ));
    }

    let n = x.len();
    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { x[i] });
    let rhs = DVector::from_column_slice(y);

    let coefficients = design
        .svd(true, true)
        .solve(&rhs, 1e-14)
        .map_err(|e| SweepError::Analysis(format!("Least-squares solve failed: {}", e)))?;

    let intercept = coefficients[0];
    let slope = coefficients[1];

    let mean_y = rhs.mean();
    let ss_tot: f64 = y.iter().map(|v| (v - mean_y).powi(2)).sum();
    let ss_res: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| (yi - (intercept + slope * xi)).powi(2))
        .sum();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 1.0 };

    Ok(LinearFit { intercept, slope, r_squared })
}

/// Fit mean mobility against `1/L` and extrapolate to an infinite domain
pub fn extrapolate(curve: &MobilityCurve) -> Result<Extrapolation, SweepError> {
    let summaries = summarize(curve);
    let x: Vec<f64> = summaries.iter().map(|s| s.inverse_size).collect();
    let y: Vec<f64> = summaries.iter().map(|s| s.mean).collect();

    let fit = fit_linear(&x, &y)?;

    log::info!(
        "Finite-size fit over {} sizes: mobility(1/L → 0) = {:.6}, slope = {:.6}, R² = {:.6}",
        summaries.len(),
        fit.intercept,
        fit.slope,
        fit.r_squared
    );

    Ok(Extrapolation { summaries, fit })
}

// =================================================================================================
// Tests
// =================================================================================================
