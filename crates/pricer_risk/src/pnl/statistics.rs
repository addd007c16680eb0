//! Descriptive statistics over simulated PnL samples.
//!
//! Moments are population moments (divide by `n`). Skewness is `m3 / m2^1.5`
//! and kurtosis is excess kurtosis `m4 / m2² − 3`. Percentiles interpolate
//! linearly between order statistics.

use pricer_pricing::mc::ConfigError;

use super::PnlError;

/// Relative spread below which a sample is treated as constant.
const ZERO_VARIANCE_TOLERANCE: f64 = 1e-10;

/// Summary statistics of a PnL sample.
///
/// # Examples
///
/// ```
/// use pricer_risk::pnl::PnlStatistics;
///
/// let stats = PnlStatistics::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(stats.mean, 3.0);
/// assert_eq!(stats.min, 1.0);
/// assert_eq!(stats.max, 5.0);
/// assert!((stats.percentile_5 - 1.2).abs() < 1e-12);
/// assert!((stats.percentile_95 - 4.8).abs() < 1e-12);
/// assert_eq!(stats.skew, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PnlStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    /// Third standardised moment
    pub skew: f64,
    /// Fourth standardised moment minus 3
    pub kurtosis: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// 5th percentile
    pub percentile_5: f64,
    /// 95th percentile
    pub percentile_95: f64,
}

impl PnlStatistics {
    /// Summarises `samples`.
    ///
    /// Non-finite samples are not filtered: an `inf` sample shows up as
    /// `max = inf` and poisons the moments. A constant sample has zero
    /// skewness and kurtosis.
    ///
    /// # Errors
    ///
    /// `PnlError::EmptySample` if `samples` is empty.
    pub fn from_samples(samples: &[f64]) -> Result<Self, PnlError> {
        if samples.is_empty() {
            return Err(PnlError::EmptySample);
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;

        let (m2, m3, m4) = samples.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), &x| {
            let d = x - mean;
            let d2 = d * d;
            (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
        });
        let (m2, m3, m4) = (m2 / n, m3 / n, m4 / n);
        let std = m2.sqrt();

        let (skew, kurtosis) = if std <= ZERO_VARIANCE_TOLERANCE * mean.abs().max(1.0) {
            (0.0, 0.0)
        } else {
            (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
        };

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        Ok(Self {
            mean,
            std,
            skew,
            kurtosis,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            percentile_5: percentile(&sorted, 5.0),
            percentile_95: percentile(&sorted, 95.0),
        })
    }
}

/// Percentile `p` (in percent) of an ascending slice by linear
/// interpolation between the two nearest ranks.
///
/// Returns NaN for an empty slice. `p` is clamped to [0, 100].
///
/// ```
/// use pricer_risk::pnl::percentile;
///
/// let sorted = [10.0, 20.0, 30.0, 40.0];
/// assert_eq!(percentile(&sorted, 0.0), 10.0);
/// assert_eq!(percentile(&sorted, 50.0), 25.0);
/// assert_eq!(percentile(&sorted, 100.0), 40.0);
/// ```
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let (a, b) = (sorted[lo], sorted[hi]);

    // Equal neighbours (including a pair of infinities) need no interpolation
    if a == b {
        return a;
    }
    a + (b - a) * (rank - lo as f64)
}

/// Equal-width histogram of the finite values in a sample.
///
/// # Examples
///
/// ```
/// use pricer_risk::pnl::Histogram;
///
/// let hist = Histogram::from_samples(&[0.0, 1.0, 1.5, 2.0, 4.0], 4).unwrap();
/// assert_eq!(hist.counts(), &[1, 2, 1, 1]);
/// assert_eq!(hist.edges(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bins the finite values of `samples` into `bins` equal-width bins
    /// spanning their minimum and maximum.
    ///
    /// Bins are half-open `[lo, hi)` except the last, which also holds the
    /// maximum. A constant sample is centred in a range of width one.
    ///
    /// # Errors
    ///
    /// - `PnlError::Config` if `bins` is zero
    /// - `PnlError::EmptySample` if no sample is finite
    pub fn from_samples(samples: &[f64], bins: usize) -> Result<Self, PnlError> {
        if bins == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "bins",
                value: "0, must be at least 1".to_string(),
            }
            .into());
        }

        let finite = || samples.iter().copied().filter(|x| x.is_finite());
        let (mut lower, mut upper) = finite().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
        if lower > upper {
            return Err(PnlError::EmptySample);
        }
        if lower == upper {
            lower -= 0.5;
            upper += 0.5;
        }

        let width = (upper - lower) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| match i {
                0 => lower,
                i if i == bins => upper,
                i => lower + width * i as f64,
            })
            .collect();

        let mut counts = vec![0usize; bins];
        for x in finite() {
            let index = (((x - lower) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        Ok(Self { edges, counts })
    }

    /// Bin edges, one more than the number of bins.
    #[inline]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Sample count per bin.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of samples binned.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterates over `(lower edge, upper edge, count)`.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty_sample_rejected() {
        assert_eq!(
            PnlStatistics::from_samples(&[]).unwrap_err(),
            PnlError::EmptySample
        );
    }

    #[test]
    fn test_single_sample() {
        let stats = PnlStatistics::from_samples(&[7.5]).unwrap();
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.skew, 0.0);
        assert_eq!(stats.kurtosis, 0.0);
        assert_eq!(stats.percentile_5, 7.5);
        assert_eq!(stats.percentile_95, 7.5);
    }

    #[test]
    fn test_constant_sample_has_zero_shape() {
        let stats = PnlStatistics::from_samples(&[-9.87654321; 10_000]).unwrap();
        assert_eq!(stats.skew, 0.0);
        assert_eq!(stats.kurtosis, 0.0);
        assert_eq!(stats.min, stats.max);
    }

    #[test]
    fn test_known_moments() {
        // Population moments of {1, 2, 3, 4, 10}: mean 4, m2 10.0
        let samples = [1.0, 2.0, 3.0, 4.0, 10.0];
        let stats = PnlStatistics::from_samples(&samples).unwrap();
        assert_relative_eq!(stats.mean, 4.0, epsilon = 1e-12);
        assert_relative_eq!(stats.std, 10.0_f64.sqrt(), epsilon = 1e-12);

        // m3 = (−27 − 8 − 1 + 0 + 216)/5 = 36; m4 = (81 + 16 + 1 + 0 + 1296)/5 = 278.8
        assert_relative_eq!(stats.skew, 36.0 / 10.0_f64.powf(1.5), epsilon = 1e-12);
        assert_relative_eq!(stats.kurtosis, 278.8 / 100.0 - 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric_sample_has_zero_skew() {
        let samples: Vec<f64> = (-50..=50).map(|i| i as f64).collect();
        let stats = PnlStatistics::from_samples(&samples).unwrap();
        assert_relative_eq!(stats.skew, 0.0, epsilon = 1e-12);
        // Discrete uniform is platykurtic
        assert!(stats.kurtosis < 0.0);
    }

    #[test]
    fn test_infinite_sample_propagates() {
        let stats = PnlStatistics::from_samples(&[1.0, 2.0, f64::INFINITY]).unwrap();
        assert_eq!(stats.max, f64::INFINITY);
        assert_eq!(stats.min, 1.0);
    }

    #[test]
    fn test_percentile_interpolation() {
        let sorted: Vec<f64> = (1..=101).map(|i| i as f64).collect();
        assert_relative_eq!(percentile(&sorted, 5.0), 6.0, epsilon = 1e-12);
        assert_relative_eq!(percentile(&sorted, 95.0), 96.0, epsilon = 1e-12);
        assert_relative_eq!(percentile(&[0.0, 10.0], 25.0), 2.5, epsilon = 1e-12);
        assert!(percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_percentile_between_infinities() {
        let sorted = [1.0, f64::INFINITY, f64::INFINITY];
        assert_eq!(percentile(&sorted, 95.0), f64::INFINITY);
    }

    #[test]
    fn test_histogram_counts_every_finite_sample() {
        let samples = [-3.0, -1.0, 0.0, 0.5, 2.0, f64::NAN, f64::INFINITY];
        let hist = Histogram::from_samples(&samples, 5).unwrap();
        assert_eq!(hist.total(), 5);
        assert_eq!(hist.edges().len(), 6);
        assert_eq!(hist.edges()[0], -3.0);
        assert_eq!(hist.edges()[5], 2.0);
        assert_eq!(hist.counts()[4], 1);
    }

    #[test]
    fn test_histogram_constant_sample() {
        let hist = Histogram::from_samples(&[4.0; 10], 3).unwrap();
        assert_eq!(hist.edges()[0], 3.5);
        assert_eq!(hist.edges()[3], 4.5);
        assert_eq!(hist.counts(), &[0, 10, 0]);
        assert_eq!(hist.max_count(), 10);
    }

    #[test]
    fn test_histogram_errors() {
        assert!(matches!(
            Histogram::from_samples(&[1.0], 0),
            Err(PnlError::Config(_))
        ));
        assert_eq!(
            Histogram::from_samples(&[f64::NAN], 4).unwrap_err(),
            PnlError::EmptySample
        );
    }

    #[test]
    fn test_histogram_edges_over_full_float_range() {
        let hist = Histogram::from_samples(&[-f64::MAX, f64::MAX], 4).unwrap();
        assert_eq!(hist.edges()[0], -f64::MAX);
        assert_eq!(hist.edges()[4], f64::MAX);
        assert!(hist.edges().iter().all(|e| !e.is_nan()));
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn test_histogram_bins_iterator() {
        let hist = Histogram::from_samples(&[0.0, 2.0], 2).unwrap();
        let bins: Vec<_> = hist.bins().collect();
        assert_eq!(bins, vec![(0.0, 1.0, 1), (1.0, 2.0, 1)]);
    }

    proptest! {
        #[test]
        fn prop_percentiles_are_ordered(
            samples in proptest::collection::vec(-1_000.0..1_000.0_f64, 1..200),
        ) {
            let stats = PnlStatistics::from_samples(&samples).unwrap();
            prop_assert!(stats.min <= stats.percentile_5);
            prop_assert!(stats.percentile_5 <= stats.percentile_95);
            prop_assert!(stats.percentile_95 <= stats.max);
            prop_assert!(stats.std >= 0.0);
        }

        #[test]
        fn prop_histogram_total_matches(
            samples in proptest::collection::vec(-1_000.0..1_000.0_f64, 1..200),
            bins in 1usize..50,
        ) {
            let hist = Histogram::from_samples(&samples, bins).unwrap();
            prop_assert_eq!(hist.total(), samples.len());
            prop_assert_eq!(hist.counts().len(), bins);
        }
    }
}
