//! Trial samples and the finite-size mobility curve
//!
//! # Data flow
//!
//! ```text
//! trial ──► TrialSample (raw velocity) ──► MobilityCurve (scaled by 6πη, once)
//! ```

/// Outcome of one trial: a single placement and mobility application
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSample {
    /// Cubic domain edge length
    pub domain_size: f64,

    /// Trial index within its domain size
    pub trial: usize,

    /// Flat particle positions used for the trial
    pub positions: Vec<f64>,

    /// Flat linear velocities returned by the solver
    pub velocities: Vec<f64>,

    /// Flat angular velocities, when torque was requested
    pub angular_velocities: Option<Vec<f64>>,
}

impl TrialSample {
    /// Raw (unscaled) mobility: first component of the first particle's velocity
    pub fn raw_mobility(&self) -> f64 {
        self.velocities.first().copied().unwrap_or(f64::NAN)
    }
}

// =================================================================================================
// Mobility curve
// =================================================================================================

/// Scaled mobility samples collected at one domain size
#[derive(Debug, Clone, PartialEq)]
pub struct CurveEntry {
    /// Cubic domain edge length L
    pub domain_size: f64,

    /// Scaled mobility of every trial, in trial order
    pub mobilities: Vec<f64>,
}

impl CurveEntry {
    /// Abscissa of the finite-size plot, `1/L`
    pub fn inverse_size(&self) -> f64 {
        1.0 / self.domain_size
    }

    /// Mean of the samples, `None` when the entry is empty
    pub fn mean(&self) -> Option<f64> {
        if self.mobilities.is_empty() {
            None
        } else {
            Some(self.mobilities.iter().sum::<f64>() / self.mobilities.len() as f64)
        }
    }
}

/// Ordered mapping from domain size to scaled mobility samples
///
/// Entries keep the order in which sizes were swept. An entry may be empty
/// when its size was configured with zero trials.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MobilityCurve {
    entries: Vec<CurveEntry>,
}

impl MobilityCurve {
    /// Create an empty curve
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a curve from raw samples grouped per size, applying `scale`
    /// exactly once to every sample
    pub fn from_raw<'a, I>(groups: I, scale: f64) -> Self
    where
        I: IntoIterator<Item = (f64, &'a [TrialSample])>,
    {
        let mut curve = Self::new();
        for (domain_size, samples) in groups {
            curve.push(
                domain_size,
                samples.iter().map(|s| s.raw_mobility() * scale).collect(),
            );
        }
        curve
    }

    /// Append the samples of one domain size
    pub fn push(&mut self, domain_size: f64, mobilities: Vec<f64>) {
        self.entries.push(CurveEntry { domain_size, mobilities });
    }

    /// All entries, in sweep order
    pub fn entries(&self) -> &[CurveEntry] {
        &self.entries
    }

    /// Iterate over entries
    pub fn iter(&self) -> std::slice::Iter<'_, CurveEntry> {
        self.entries.iter()
    }

    /// Domain sizes, in sweep order
    pub fn domain_sizes(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.domain_size).collect()
    }

    /// Samples recorded for `domain_size` (first matching entry)
    pub fn samples(&self, domain_size: f64) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|e| e.domain_size == domain_size)
            .map(|e| e.mobilities.as_slice())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no domain size was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of samples over all sizes
    pub fn total_samples(&self) -> usize {
        self.entries.iter().map(|e| e.mobilities.len()).sum()
    }

    /// Every `(1/L, mobility)` pair, one per sample
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .flat_map(|e| {
                let x = e.inverse_size();
                e.mobilities.iter().map(move |m| (x, *m))
            })
            .collect()
    }

    /// `(1/L, mean mobility)` for every non-empty size
    pub fn mean_points(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .filter_map(|e| e.mean().map(|m| (e.inverse_size(), m)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a MobilityCurve {
    type Item = &'a CurveEntry;
    type IntoIter = std::slice::Iter<'a, CurveEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =================================================================================================
// Sweep result
// =================================================================================================

/// Everything a finished sweep produced
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Scaled mobility curve
    pub curve: MobilityCurve,

    /// Raw trial samples, grouped by domain size in sweep order
    pub samples: Vec<Vec<TrialSample>>,

    /// Name of the solver that produced the samples
    pub solver_name: String,

    /// Scale factor applied to the raw samples (`6·π·η`)
    pub scale: f64,
}

impl SweepResult {
    /// Total number of trials executed
    pub fn trial_count(&self) -> usize {
        self.samples.iter().map(Vec::len).sum()
    }

    /// Iterate over every trial sample
    pub fn all_samples(&self) -> impl Iterator<Item = &TrialSample> {
        self.samples.iter().flatten()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(domain_size: f64, trial: usize, vx: f64) -> TrialSample {
        TrialSample {
            domain_size,
            trial,
            positions: vec![1.0, 2.0, 3.0],
            velocities: vec![vx, 0.0, 0.0],
            angular_velocities: None,
        }
    }

    #[test]
    fn test_raw_mobility_is_first_component() {
        assert_eq!(sample(60.0, 0, 0.25).raw_mobility(), 0.25);
    }

    #[test]
    fn test_from_raw_scales_once() {
        let small = vec![sample(10.0, 0, 2.0), sample(10.0, 1, 4.0)];
        let large = vec![sample(20.0, 0, 1.0)];

        let curve = MobilityCurve::from_raw(
            vec![(10.0, small.as_slice()), (20.0, large.as_slice())],
            3.0,
        );

        assert_eq!(curve.domain_sizes(), vec![10.0, 20.0]);
        assert_eq!(curve.samples(10.0), Some(&[6.0, 12.0][..]));
        assert_eq!(curve.samples(20.0), Some(&[3.0][..]));
        assert_eq!(curve.total_samples(), 3);
    }

    #[test]
    fn test_points_and_means() {
        let mut curve = MobilityCurve::new();
        curve.push(10.0, vec![1.0, 3.0]);
        curve.push(20.0, vec![]);
        curve.push(40.0, vec![5.0]);

        assert_eq!(curve.points(), vec![(0.1, 1.0), (0.1, 3.0), (0.025, 5.0)]);
        assert_eq!(curve.mean_points(), vec![(0.1, 2.0), (0.025, 5.0)]);
        assert_eq!(curve.samples(20.0), Some(&[][..]));
        assert_eq!(curve.samples(30.0), None);
    }

    #[test]
    fn test_empty_entry_has_no_mean() {
        let entry = CurveEntry { domain_size: 10.0, mobilities: vec![] };
        assert_eq!(entry.mean(), None);
    }
}
