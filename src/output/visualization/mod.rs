//! Visualization of mobility sweeps
//!
//! This module renders finished curves using the `plotters` library. Plotting
//! never runs inside the sweep: it consumes a [`MobilityCurve`](crate::sweep::MobilityCurve)
//! after the driver has returned.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`)
//! - **finite_size**: `1/L` versus scaled mobility, with overlays
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fcm_mobility::output::visualization::{plot_finite_size, PlotConfig};
//!
//! let result = driver.run(&solver, &mut rng)?;
//!
//! // Plot with default config
//! plot_finite_size(&result.curve, &[], "mobility.png", None)?;
//!
//! // Or with custom config
//! let config = PlotConfig::finite_size("Triply periodic");
//! plot_finite_size(&result.curve, &[], "mobility.svg", Some(&config))?;
//! ```

pub mod config;
pub mod finite_size;

pub use config::{PlotConfig, NO_TITLE};

pub use finite_size::{Overlay, axis_ranges, plot_finite_size};
