//! CSV export of mobility curves
//!
//! This module exports finished curves to CSV (Comma-Separated Values), which
//! is readable by Excel, Python pandas, MATLAB, and most data analysis tools.
//!
//! # Features
//!
//! - **Per-sample export**: one row per trial
//! - **Summary export**: one row per domain size (mean, std, count)
//! - **Metadata support**: optional `#` header with sweep parameters
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Validation**: rejects empty curves and NaN/Inf samples
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use fcm_mobility::output::export::export_curve_csv;
//!
//! export_curve_csv(&result.curve, "mobility.csv", None)?;
//! ```
//!
//! **Output** (`mobility.csv`):
//! ```csv
//! domain_size,inverse_size,trial,mobility
//! 60.000000,0.016667,0,0.952709
//! 60.000000,0.016667,1,0.952709
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use fcm_mobility::output::export::{export_curve_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_sweep(&result, driver.config()).seed(0);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_curve_csv(&result.curve, "mobility.csv", Some(&config))?;
//! ```
//!
//! **Output** (`mobility.csv`):
//! ```csv
//! # Finite-size Mobility Sweep
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Solver: Hasimoto (analytic)
//! # Viscosity: 0.14104739588693907
//! # Hydrodynamic Radius: 1
//! # Trials: 5
//! # Total Trials: 25
//! # Seed: 0
//! #
//! domain_size,inverse_size,trial,mobility
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::analysis::summarize;
use crate::sweep::{MobilityCurve, SweepConfig, SweepResult};

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while exporting CSV
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add header comments with sweep info
/// - `metadata`: Sweep metadata to include
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Solver name (e.g., "Hasimoto (analytic)")
    pub solver_name: Option<String>,

    /// Fluid viscosity
    pub viscosity: Option<f64>,

    /// Particle hydrodynamic radius
    pub hydrodynamic_radius: Option<f64>,

    /// Trials per domain size
    pub trials: Option<usize>,

    /// Per-size trial counts that differ from `trials`, as `(domain_size, trials)`
    pub trial_overrides: Vec<(f64, usize)>,

    /// Trials actually executed over the whole sweep
    pub total_trials: Option<usize>,

    /// Seed of the random source
    pub seed: Option<u64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from a finished sweep and its configuration
    ///
    /// Trial overrides are recorded per domain size, next to the total number
    /// of trials the sweep executed.
    pub fn from_sweep(result: &SweepResult, config: &SweepConfig) -> Self {
        let trial_overrides = config
            .trial_overrides
            .iter()
            .filter_map(|(index, trials)| config.domain_sizes.get(*index).map(|size| (*size, *trials)))
            .collect();

        Self {
            solver_name: Some(result.solver_name.clone()),
            viscosity: Some(config.fluid.viscosity),
            hydrodynamic_radius: Some(config.fluid.hydrodynamic_radius),
            trials: Some(config.trials),
            trial_overrides,
            total_trials: Some(result.trial_count()),
            ..Default::default()
        }
    }

    /// Builder pattern: record the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(writer: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(writer, "# Finite-size Mobility Sweep")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(writer, "# Generated: {}", now.to_rfc3339())?;

    if let Some(solver) = &metadata.solver_name {
        writeln!(writer, "# Solver: {}", solver)?;
    }
    if let Some(viscosity) = metadata.viscosity {
        writeln!(writer, "# Viscosity: {}", viscosity)?;
    }
    if let Some(radius) = metadata.hydrodynamic_radius {
        writeln!(writer, "# Hydrodynamic Radius: {}", radius)?;
    }
    if let Some(trials) = metadata.trials {
        writeln!(writer, "# Trials: {}", trials)?;
    }
    for (size, trials) in &metadata.trial_overrides {
        writeln!(writer, "# Trials (L = {}): {}", size, trials)?;
    }
    if let Some(total) = metadata.total_trials {
        writeln!(writer, "# Total Trials: {}", total)?;
    }
    if let Some(seed) = metadata.seed {
        writeln!(writer, "# Seed: {}", seed)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(writer, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn validate_curve(curve: &MobilityCurve) -> Result<(), CsvError> {
    if curve.total_samples() == 0 {
        return Err(CsvError::EmptyData("curve has no samples".to_string()));
    }
    for entry in curve {
        if !entry.domain_size.is_finite() {
            return Err(CsvError::InvalidData(format!(
                "non-finite domain size {}",
                entry.domain_size
            )));
        }
        if entry.mobilities.iter().any(|m| !m.is_finite()) {
            return Err(CsvError::InvalidData(format!(
                "NaN or Inf detected in samples of domain size {}",
                entry.domain_size
            )));
        }
    }
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, columns: &[&str], config: &CsvConfig) -> Result<(), CsvError> {
    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(writer, metadata)?;
        }
    }
    writeln!(writer, "{}", columns.join(config.delimiter.to_string().as_str()))?;
    Ok(())
}

// =============================================================================
// Writers
// =============================================================================

/// Write one row per sample: `domain_size, inverse_size, trial, mobility`
pub fn write_curve_csv<W: Write>(
    writer: &mut W,
    curve: &MobilityCurve,
    config: &CsvConfig,
) -> Result<(), CsvError> {
    validate_curve(curve)?;
    write_header(writer, &["domain_size", "inverse_size", "trial", "mobility"], config)?;

    let d = config.delimiter;
    for entry in curve {
        let size = format_number(entry.domain_size, config);
        let inverse = format_number(entry.inverse_size(), config);
        for (trial, mobility) in entry.mobilities.iter().enumerate() {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}",
                size,
                inverse,
                trial,
                format_number(*mobility, config)
            )?;
        }
    }

    Ok(())
}

/// Write one row per non-empty size: `domain_size, inverse_size, mean, std_dev, count`
pub fn write_summary_csv<W: Write>(
    writer: &mut W,
    curve: &MobilityCurve,
    config: &CsvConfig,
) -> Result<(), CsvError> {
    validate_curve(curve)?;
    write_header(writer, &["domain_size", "inverse_size", "mean", "std_dev", "count"], config)?;

    let d = config.delimiter;
    for summary in summarize(curve) {
        writeln!(
            writer,
            "{}{d}{}{d}{}{d}{}{d}{}",
            format_number(summary.domain_size, config),
            format_number(summary.inverse_size, config),
            format_number(summary.mean, config),
            format_number(summary.std_dev, config),
            summary.count
        )?;
    }

    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export every sample of a curve to a CSV file
///
/// # Errors
///
/// - Empty curve
/// - NaN or Inf samples
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_curve_csv(&result.curve, "mobility.csv", None)?;
/// ```
pub fn export_curve_csv(
    curve: &MobilityCurve,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // Validate before creating the file so nothing is left behind on error
    validate_curve(curve)?;

    let mut writer = BufWriter::new(File::create(output_path)?);
    write_curve_csv(&mut writer, curve, configuration)?;
    writer.flush()?;
    Ok(())
}

/// Export per-size statistics of a curve to a CSV file
pub fn export_summary_csv(
    curve: &MobilityCurve,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    validate_curve(curve)?;

    let mut writer = BufWriter::new(File::create(output_path)?);
    write_summary_csv(&mut writer, curve, configuration)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`](super::Exporter)
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Create an exporter with a given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl super::Exporter for CsvExporter {
    type Error = CsvError;

    fn export_curve(&self, curve: &MobilityCurve, path: &str) -> Result<(), CsvError> {
        export_curve_csv(curve, path, Some(&self.config))
    }

    fn export_summary(&self, curve: &MobilityCurve, path: &str) -> Result<(), CsvError> {
        export_summary_csv(curve, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::export::Exporter;
    use std::fs;
    use tempfile::NamedTempFile;

    fn curve() -> MobilityCurve {
        let mut curve = MobilityCurve::new();
        curve.push(10.0, vec![0.5, 0.25]);
        curve.push(20.0, vec![]);
        curve.push(40.0, vec![0.75]);
        curve
    }

    fn to_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_curve_rows() {
        let mut out = Vec::new();
        write_curve_csv(&mut out, &curve(), &CsvConfig::default().precision(3)).unwrap();

        let text = to_string(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "domain_size,inverse_size,trial,mobility");
        assert_eq!(lines[1], "10.000,0.100,0,0.500");
        assert_eq!(lines[2], "10.000,0.100,1,0.250");
        assert_eq!(lines[3], "40.000,0.025,0,0.750");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_summary_rows() {
        let mut out = Vec::new();
        write_summary_csv(&mut out, &curve(), &CsvConfig::default().precision(4)).unwrap();

        let text = to_string(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "domain_size,inverse_size,mean,std_dev,count");
        assert_eq!(lines[1], "10.0000,0.1000,0.3750,0.1768,2");
        assert_eq!(lines[2], "40.0000,0.0250,0.7500,0.0000,1");
    }

    #[test]
    fn test_european_format() {
        let mut out = Vec::new();
        let mut single = MobilityCurve::new();
        single.push(10.0, vec![0.5]);
        write_curve_csv(&mut out, &single, &CsvConfig::european().precision(1)).unwrap();

        let text = to_string(out);
        assert!(text.contains("domain_size;inverse_size;trial;mobility"));
        assert!(text.contains("10,0;0,1;0;0,5"));
    }

    #[test]
    fn test_metadata_header() {
        let mut metadata = CsvMetadata {
            solver_name: Some("Stub".to_string()),
            viscosity: Some(0.5),
            trials: Some(3),
            ..Default::default()
        }
        .seed(7);
        metadata.add_custom("Domain".to_string(), "TP".to_string());

        let mut out = Vec::new();
        write_curve_csv(&mut out, &curve(), &CsvConfig::default().with_metadata(metadata)).unwrap();

        let text = to_string(out);
        assert!(text.starts_with("# Finite-size Mobility Sweep\n# Generated: "));
        assert!(text.contains("# Solver: Stub\n"));
        assert!(text.contains("# Viscosity: 0.5\n"));
        assert!(text.contains("# Trials: 3\n"));
        assert!(text.contains("# Seed: 7\n"));
        assert!(text.contains("# Domain: TP\n"));
        assert!(!text.contains("# Hydrodynamic Radius"));
        assert!(text.contains("#\ndomain_size,"));
    }

    #[test]
    fn test_metadata_from_sweep_records_overrides() {
        use crate::solver::HasimotoSolver;
        use crate::sweep::MobilitySweepDriver;
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let config = SweepConfig::new(vec![60.0, 100.0, 140.0], 2).with_trials_for(1, 0);
        let driver = MobilitySweepDriver::new(config);
        let result = driver
            .run(&HasimotoSolver::default(), &mut StdRng::seed_from_u64(0))
            .unwrap();

        let metadata = CsvMetadata::from_sweep(&result, driver.config());
        assert_eq!(metadata.trials, Some(2));
        assert_eq!(metadata.trial_overrides, vec![(100.0, 0)]);
        assert_eq!(metadata.total_trials, Some(4));

        let mut out = Vec::new();
        write_curve_csv(&mut out, &result.curve, &CsvConfig::default().with_metadata(metadata)).unwrap();

        let text = to_string(out);
        assert!(text.contains("# Trials: 2\n# Trials (L = 100): 0\n# Total Trials: 4\n"));
    }

    #[test]
    fn test_rejects_empty_and_invalid_curves() {
        let mut out = Vec::new();

        let mut empty = MobilityCurve::new();
        empty.push(10.0, vec![]);
        assert!(matches!(
            write_curve_csv(&mut out, &empty, &CsvConfig::default()),
            Err(CsvError::EmptyData(_))
        ));

        let mut nan = MobilityCurve::new();
        nan.push(10.0, vec![f64::NAN]);
        assert!(matches!(
            write_curve_csv(&mut out, &nan, &CsvConfig::default()),
            Err(CsvError::InvalidData(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_export_to_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        export_curve_csv(&curve(), path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_exporter_summary_to_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        CsvExporter::default().export_summary(&curve(), path).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("domain_size,inverse_size,mean,std_dev,count"));
        assert_eq!(content.lines().count(), 3);
    }
}
