//! Output module for sweep results
//!
//! This module provides tools to output finished mobility curves:
//! - **Visualization**: PNG/SVG finite-size plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── finite_size.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use fcm_mobility::output::{plot_finite_size, PlotConfig};
//!
//! plot_finite_size(&result.curve, &[], "mobility.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use fcm_mobility::output::{export_curve_csv, CsvConfig};
//!
//! export_curve_csv(&result.curve, "mobility.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! Both sub-modules only read a finished `MobilityCurve`, so the sweep itself
//! stays testable without any rendering or file system dependency.

pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_finite_size,
    Overlay,
    PlotConfig,
};

pub use export::{
    export_curve_csv,
    export_summary_csv,
    CsvConfig,
    CsvError,
    CsvExporter,
    CsvMetadata,
    Exporter,
};
