//! Running statistics (min, max, mean, variance)
//!
//! Computes streaming statistics using Welford's numerically stable online algorithm.
//! Supports merging for combining partial summaries.

use crate::math;
use crate::traits::Summary;

/// One-pass accumulator of min, max, mean and variance
///
/// Keeps only the sufficient statistics for Welford's algorithm (count,
/// running mean and `m2`, the sum of squared deviations from the running
/// mean), so memory is O(1) no matter how long the stream is.
///
/// Before the first observation the accessors return the identity values:
/// `min()` is `+inf`, `max()` is `-inf`, mean and both variances are `0.0`.
/// Check [`count`](Self::count) before trusting `min`/`max`.
///
/// # Example
///
/// ```
/// use dfa_corpus::statistics::NumericAccumulator;
///
/// let mut stats = NumericAccumulator::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.observe(value);
/// }
///
/// assert!((stats.mean() - 5.0).abs() < 0.001);
/// assert!((stats.population_variance() - 4.0).abs() < 0.001);
/// assert!((stats.population_std_dev() - 2.0).abs() < 0.001);
/// assert_eq!(stats.min(), 2.0);
/// assert_eq!(stats.max(), 9.0);
/// ```
///
/// # Combining partial summaries
///
/// ```
/// use dfa_corpus::statistics::NumericAccumulator;
///
/// let mut training = NumericAccumulator::new();
/// let mut test = NumericAccumulator::new();
///
/// training.extend([1.0, 2.0, 3.0]);
/// test.extend([4.0, 5.0, 6.0]);
///
/// training.merge(&test);
/// assert_eq!(training.count(), 6);
/// assert!((training.mean() - 3.5).abs() < 0.001);
/// ```
#[derive(Clone, Debug)]
pub struct NumericAccumulator {
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
}

impl Default for NumericAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericAccumulator {
    /// Create an accumulator in the identity state
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Add a value to the statistics
    ///
    /// Infinite values are accepted and will saturate the mean and variance.
    /// NaN is not filtered: feeding one leaves the moments undefined.
    pub fn observe(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }

        self.count += 1;

        // Welford's algorithm
        let delta = value - self.mean;
        let new_mean = self.mean + delta / self.count as f64;
        self.m2 += delta * (value - new_mean);
        self.mean = new_mean;
    }

    /// Add an integer value, same as `observe(value as f64)`
    pub fn observe_int(&mut self, value: i64) {
        self.observe(value as f64);
    }

    /// Number of values observed
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if nothing has been observed
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Smallest value seen, `+inf` while empty
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value seen, `-inf` while empty
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Running mean, `0.0` while empty
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the population variance
    ///
    /// `m2 / n`, or `0.0` until at least two values have been observed.
    pub fn population_variance(&self) -> f64 {
        if self.count > 1 {
            self.m2 / self.count as f64
        } else {
            0.0
        }
    }

    /// Get the sample variance
    ///
    /// The unbiased estimator `m2 / (n - 1)` (Bessel's correction), or `0.0`
    /// until at least two values have been observed.
    pub fn sample_variance(&self) -> f64 {
        if self.count > 1 {
            self.m2 / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Get the population standard deviation
    pub fn population_std_dev(&self) -> f64 {
        math::sqrt(self.population_variance())
    }

    /// Get the sample standard deviation
    pub fn sample_std_dev(&self) -> f64 {
        math::sqrt(self.sample_variance())
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max - self.min)
        }
    }

    /// Get the sum of all values
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    /// Merge with another accumulator using the parallel algorithm
    ///
    /// Uses Chan et al.'s update for combining partial moments, so the
    /// result matches feeding both streams into one accumulator.
    pub fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }

        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let combined_count = self.count + other.count;
        let delta = other.mean - self.mean;

        let combined_mean = self.mean + delta * (other.count as f64 / combined_count as f64);

        let combined_m2 = self.m2
            + other.m2
            + delta * delta * (self.count as f64 * other.count as f64 / combined_count as f64);

        self.count = combined_count;
        self.mean = combined_mean;
        self.m2 = combined_m2;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Reset to the identity state
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Summary for NumericAccumulator {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.observe(*item);
    }

    fn merge(&mut self, other: &Self) {
        NumericAccumulator::merge(self, other);
    }

    fn clear(&mut self) {
        NumericAccumulator::clear(self);
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Extend<f64> for NumericAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.observe(value);
        }
    }
}

impl Extend<i64> for NumericAccumulator {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.observe_int(value);
        }
    }
}

impl FromIterator<f64> for NumericAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut stats = NumericAccumulator::new();

        stats.observe(2.0);
        stats.observe(4.0);
        stats.observe(4.0);
        stats.observe(4.0);
        stats.observe(5.0);
        stats.observe(5.0);
        stats.observe(7.0);
        stats.observe(9.0);

        assert_eq!(stats.count(), 8);
        assert!((stats.mean() - 5.0).abs() < 0.001);
        assert!((stats.population_variance() - 4.0).abs() < 0.001);
        assert!((stats.population_std_dev() - 2.0).abs() < 0.001);
        assert_eq!(stats.min(), 2.0);
        assert_eq!(stats.max(), 9.0);
    }

    #[test]
    fn test_identity_state() {
        let stats = NumericAccumulator::new();

        assert!(stats.is_empty());
        assert_eq!(stats.min(), f64::INFINITY);
        assert_eq!(stats.max(), f64::NEG_INFINITY);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.population_variance(), 0.0);
        assert_eq!(stats.sample_variance(), 0.0);
        assert_eq!(stats.population_std_dev(), 0.0);
        assert_eq!(stats.sample_std_dev(), 0.0);
        assert_eq!(stats.range(), None);
    }

    #[test]
    fn test_single_value() {
        let mut stats = NumericAccumulator::new();
        stats.observe(42.0);

        assert_eq!(stats.count(), 1);
        assert_eq!(stats.mean(), 42.0);
        assert_eq!(stats.population_variance(), 0.0);
        assert_eq!(stats.sample_variance(), 0.0);
        assert_eq!(stats.min(), 42.0);
        assert_eq!(stats.max(), 42.0);
        assert_eq!(stats.range(), Some(0.0));
    }

    #[test]
    fn test_sample_variance() {
        let mut stats = NumericAccumulator::new();

        // Dataset: [2, 4, 4, 4, 5, 5, 7, 9]
        // Population variance = 32/8 = 4.0
        // Sample variance = 32/7 ≈ 4.571
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stats.observe(v);
        }

        assert!((stats.population_variance() - 4.0).abs() < 0.001);
        assert!((stats.sample_variance() - 32.0 / 7.0).abs() < 1e-12);
        assert!((stats.sample_std_dev() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_two_values() {
        let mut stats = NumericAccumulator::new();
        stats.observe(1.0);
        stats.observe(3.0);

        assert_eq!(stats.mean(), 2.0);
        assert_eq!(stats.population_variance(), 1.0);
        assert_eq!(stats.sample_variance(), 2.0);
    }

    #[test]
    fn test_observe_int_matches_observe() {
        let mut ints = NumericAccumulator::new();
        let mut floats = NumericAccumulator::new();

        for v in [-7i64, 0, 3, 12, 12, 40_000] {
            ints.observe_int(v);
            floats.observe(v as f64);
        }

        assert_eq!(ints.count(), floats.count());
        assert_eq!(ints.mean(), floats.mean());
        assert_eq!(ints.sample_variance(), floats.sample_variance());
        assert_eq!(ints.min(), floats.min());
        assert_eq!(ints.max(), floats.max());
    }

    #[test]
    fn test_negative_values() {
        let stats: NumericAccumulator = [-3.0, -1.0, -2.0].into_iter().collect();

        assert_eq!(stats.min(), -3.0);
        assert_eq!(stats.max(), -1.0);
        assert_eq!(stats.mean(), -2.0);
        assert_eq!(stats.range(), Some(2.0));
    }

    #[test]
    fn test_extend_int() {
        let mut stats = NumericAccumulator::new();
        stats.extend([1i64, 2, 3, 4]);

        assert_eq!(stats.count(), 4);
        assert!((stats.sum() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_merge() {
        let mut stats1 = NumericAccumulator::new();
        let mut stats2 = NumericAccumulator::new();

        stats1.extend([1.0, 2.0, 3.0]);
        stats2.extend([4.0, 5.0, 6.0]);

        stats1.merge(&stats2);

        assert_eq!(stats1.count(), 6);
        assert!((stats1.mean() - 3.5).abs() < 0.001);
        assert_eq!(stats1.min(), 1.0);
        assert_eq!(stats1.max(), 6.0);
        assert!((stats1.sum() - 21.0).abs() < 0.001);
    }

    #[test]
    fn test_merge_empty() {
        let mut stats1 = NumericAccumulator::new();
        let stats2 = NumericAccumulator::new();

        stats1.observe(1.0);
        stats1.observe(2.0);

        stats1.merge(&stats2);

        assert_eq!(stats1.count(), 2);
        assert!((stats1.mean() - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_clear() {
        let mut stats = NumericAccumulator::new();
        stats.extend([1.0, 2.0, 3.0]);

        stats.clear();

        assert!(stats.is_empty());
        assert_eq!(stats.min(), f64::INFINITY);
        assert_eq!(stats.max(), f64::NEG_INFINITY);
        assert_eq!(stats.mean(), 0.0);
    }

    #[test]
    fn test_summary_trait() {
        let mut stats = NumericAccumulator::new();
        Summary::update(&mut stats, &3.0);
        Summary::update(&mut stats, &5.0);

        assert_eq!(Summary::count(&stats), 2);
        assert!(!Summary::is_empty(&stats));

        Summary::clear(&mut stats);
        assert!(Summary::is_empty(&stats));
    }

    #[test]
    fn test_numerical_stability() {
        let mut stats = NumericAccumulator::new();

        let base = 1e12;
        for i in 0..1000 {
            stats.observe(base + i as f64);
        }

        // Mean should be base + 499.5, variance (n^2 - 1) / 12
        let expected_mean = base + 499.5;
        let expected_variance = (1000.0 * 1000.0 - 1.0) / 12.0;
        assert!(
            (stats.mean() - expected_mean).abs() < 1.0,
            "Mean: {} expected: {}",
            stats.mean(),
            expected_mean
        );
        assert!(
            (stats.population_variance() - expected_variance).abs() / expected_variance < 1e-4,
            "Variance: {} expected: {}",
            stats.population_variance(),
            expected_variance
        );
    }

    #[test]
    fn test_infinity() {
        let mut stats = NumericAccumulator::new();

        stats.observe(1.0);
        stats.observe(f64::INFINITY);
        stats.observe(2.0);

        assert_eq!(stats.count(), 3);
        assert_eq!(stats.max(), f64::INFINITY);
        assert_eq!(stats.min(), 1.0);
    }
}
