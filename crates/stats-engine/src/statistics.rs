//! Snapshot Statistics Computation

use std::fmt;

/// Summary statistics for one consumer activation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatisticsSnapshot {
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (divides by N)
    pub std_dev: f64,
    /// Number of values the figures cover
    pub count: usize,
}

impl StatisticsSnapshot {
    /// Compute statistics over every value in the slice.
    ///
    /// Zero slots of a ring that has not filled yet are ordinary values
    /// here and pull the mean toward zero.
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;

        // Min/Max/Sum in one linear scan
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        let mean = sum / n;

        let m2: f64 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();
        let std_dev = (m2 / n).sqrt();

        Self {
            min,
            max,
            mean,
            std_dev,
            count: values.len(),
        }
    }
}

impl fmt::Display for StatisticsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={:.2} max={:.2} avg={:.2} std_dev={:.2} (n={})",
            self.min, self.max, self.mean, self.std_dev, self.count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_population_figures() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = StatisticsSnapshot::compute(&values);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.count, 8);
    }

    #[test]
    fn test_zero_slots_bias_mean() {
        // Half-filled ring: zeros count toward every figure
        let values = [0.0, 0.0, 10.0, 10.0];
        let stats = StatisticsSnapshot::compute(&values);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 5.0);
        assert_eq!(stats.min, 0.0);
    }

    #[test]
    fn test_constant_values() {
        let stats = StatisticsSnapshot::compute(&[3.5; 50]);
        assert_eq!(stats.mean, 3.5);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, stats.max);
    }

    #[test]
    fn test_empty_values() {
        let stats = StatisticsSnapshot::compute(&[]);
        assert_eq!(stats, StatisticsSnapshot::default());
    }

    #[test]
    fn test_display_line() {
        let stats = StatisticsSnapshot::compute(&[1.0, 3.0]);
        assert_eq!(
            stats.to_string(),
            "min=1.00 max=3.00 avg=2.00 std_dev=1.00 (n=2)"
        );
    }

    proptest! {
        #[test]
        fn prop_mean_within_bounds(values in prop::collection::vec(0.0f64..1.0e5, 1..64)) {
            let stats = StatisticsSnapshot::compute(&values);
            prop_assert!(stats.min <= stats.mean + 1e-9);
            prop_assert!(stats.mean <= stats.max + 1e-9);
            prop_assert!(stats.std_dev >= 0.0);
            prop_assert!(stats.std_dev <= (stats.max - stats.min) + 1e-9);
        }
    }
}
