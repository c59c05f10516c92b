//! Finite-size scaling plot
//!
//! One hollow square per trial at `(1/L, 6πη·mobility)`, optionally overlaid
//! with reference curves (Hasimoto's expansion, the linear fit) drawn as
//! lines down to `1/L = 0`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fcm_mobility::output::visualization::{plot_finite_size, Overlay};
//!
//! let result = driver.run(&solver, &mut rng)?;
//! let fit = extrapolate(&result.curve)?.fit;
//! let overlays = vec![Overlay::from_fit("Linear fit", &fit, 1.0 / 60.0, 50)];
//! plot_finite_size(&result.curve, &overlays, "mobility.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;

use super::config::{PlotConfig, NO_TITLE};
use crate::analysis::LinearFit;
use crate::sweep::MobilityCurve;

// =================================================================================================
// Overlays
// =================================================================================================

/// A labelled line drawn over the samples
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Legend label
    pub label: String,

    /// Line vertices `(1/L, value)`
    pub points: Vec<(f64, f64)>,
}

impl Overlay {
    /// Create an overlay from explicit points
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), points }
    }

    /// Sample `f(1/L)` on `n` evenly spaced abscissae in `[0, max_inverse]`
    ///
    /// `f` receives `1/L`; the abscissa 0 is passed as is, so `f` must handle
    /// the infinite-domain limit.
    pub fn from_fn<F>(label: impl Into<String>, max_inverse: f64, n: usize, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let n = n.max(2);
        let points = (0..n)
            .map(|i| {
                let x = max_inverse * i as f64 / (n - 1) as f64;
                (x, f(x))
            })
            .collect();
        Self::new(label, points)
    }

    /// Straight line of a fit over `[0, max_inverse]`
    pub fn from_fit(label: impl Into<String>, fit: &LinearFit, max_inverse: f64, n: usize) -> Self {
        Self::from_fn(label, max_inverse, n, |x| fit.evaluate(x))
    }
}

// =================================================================================================
// Axis ranges
// =================================================================================================

/// Axis ranges covering samples and overlays
///
/// The x axis always starts at 0 so the extrapolation point is visible.
/// Returns `None` when there is nothing to draw.
pub fn axis_ranges(samples: &[(f64, f64)], overlays: &[Overlay]) -> Option<(Range<f64>, Range<f64>)> {
    let all: Vec<(f64, f64)> = samples
        .iter()
        .chain(overlays.iter().flat_map(|o| o.points.iter()))
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    if all.is_empty() {
        return None;
    }

    let max_x = all.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let min_y = all.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = all.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    let x_range = 0.0..(max_x * 1.1).max(1e-10);

    let span = (max_y - min_y).abs();
    let pad = if span > 0.0 { 0.1 * span } else { 0.05 * max_y.abs().max(1e-10) };
    let y_range = (min_y - pad)..(max_y + pad);

    Some((x_range, y_range))
}

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot a mobility curve against `1/L`
///
/// # Arguments
///
/// * `curve` - Finished mobility curve
/// * `overlays` - Reference lines drawn over the samples (may be empty)
/// * `output_path` - Path to save the plot (PNG or SVG, by extension)
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// plot_finite_size(&result.curve, &[], "mobility.svg", None)?;
/// ```
pub fn plot_finite_size(
    curve: &MobilityCurve,
    overlays: &[Overlay],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let samples = curve.points();
    if samples.is_empty() {
        return Err("Empty curve: no samples to plot".into());
    }

    let (x_range, y_range) = axis_ranges(&samples, overlays)
        .ok_or("Invalid data: no finite samples to plot")?;

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::finite_size(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_finite_size_impl(backend, &samples, overlays, config, x_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_finite_size_impl(backend, &samples, overlays, config, x_range, y_range)
        }
    }
}

/// Implementation for finite-size plotting with concrete backend
fn plot_finite_size_impl<DB: DrawingBackend>(
    backend: DB,
    samples: &[(f64, f64)],
    overlays: &[Overlay],
    config: &PlotConfig,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    if config.show_grid {
        chart.configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.4}", x))
            .y_label_formatter(&|y| format!("{:.4}", y))
            .draw()?;
    }

    let size = config.marker_size;
    let marker_style = ShapeStyle::from(&config.marker_color).stroke_width(2);

    chart.draw_series(samples.iter().map(|&(x, y)| {
        EmptyElement::at((x, y)) + Rectangle::new([(-size, -size), (size, size)], marker_style)
    }))?
        .label("Samples")
        .legend(move |(x, y)| Rectangle::new([(x - size, y - size), (x + size, y + size)], marker_style));

    for (i, overlay) in overlays.iter().enumerate() {
        let color = config.get_overlay_color(i);
        chart.draw_series(LineSeries::new(
            overlay.points.iter().copied(),
            ShapeStyle::from(&color).stroke_width(config.line_width),
        ))?
            .label(overlay.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    log::debug!("Finite-size plot written with {} samples and {} overlays", samples.len(), overlays.len());

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
