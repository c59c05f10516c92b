//! Export module for sweep results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file and existing ones stay untouched.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use fcm_mobility::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // One row per trial
//! exporter.export_curve(&result.curve, "mobility.csv")?;
//!
//! // One row per domain size
//! exporter.export_summary(&result.curve, "mobility_summary.csv")?;
//! ```

pub mod csv;

pub use csv::{
    export_curve_csv,
    export_summary_csv,
    write_curve_csv,
    write_summary_csv,
    CsvConfig,
    CsvError,
    CsvExporter,
    CsvMetadata,
};

use crate::sweep::MobilityCurve;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so the caller
/// can react on the concrete error instead of a boxed one.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports every sample of the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `curve` contains no samples
    fn export_curve(&self, curve: &MobilityCurve, path: &str) -> Result<(), Self::Error>;

    /// Exports per-size statistics (mean, standard deviation, count).
    ///
    /// Sizes without samples are omitted.
    fn export_summary(&self, curve: &MobilityCurve, path: &str) -> Result<(), Self::Error>;
}
