//! Summary statistics over score distributions
//!
//! The reductions are free functions over any numeric slice. They refuse to
//! summarise empty input, and `sample_stdev` also refuses a single point.

use crate::error::StatsError;
use serde::Serialize;

/// Every score observed over a sample space, in no particular order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreDistribution(Vec<u32>);

impl ScoreDistribution {
    pub fn with_capacity(capacity: usize) -> Self {
        ScoreDistribution(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, score: u32) {
        self.0.push(score);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn scores(&self) -> &[u32] {
        &self.0
    }

    /// Occurrences of each score, indexed by score
    pub fn counts(&self) -> Vec<usize> {
        let top = self.0.iter().copied().max().map_or(0, |max| max as usize + 1);
        let mut counts = vec![0usize; top];
        for &score in &self.0 {
            counts[score as usize] += 1;
        }
        counts
    }
}

impl From<Vec<u32>> for ScoreDistribution {
    fn from(scores: Vec<u32>) -> Self {
        ScoreDistribution(scores)
    }
}

impl FromIterator<u32> for ScoreDistribution {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        ScoreDistribution(iter.into_iter().collect())
    }
}

/// Arithmetic mean
pub fn mean<T: Copy + Into<f64>>(values: &[T]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::NoSamples);
    }
    let sum: f64 = values.iter().map(|&v| v.into()).sum();
    Ok(sum / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator)
pub fn sample_stdev<T: Copy + Into<f64>>(values: &[T]) -> Result<f64, StatsError> {
    let mean = mean(values)?;
    if values.len() < 2 {
        return Err(StatsError::SingleSample);
    }
    let squares: f64 = values
        .iter()
        .map(|&v| {
            let d = v.into() - mean;
            d * d
        })
        .sum();
    Ok((squares / (values.len() - 1) as f64).sqrt())
}

/// Median; the mean of the two middle values for an even count
pub fn median<T: Copy + Into<f64>>(values: &[T]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::NoSamples);
    }
    let mut sorted: Vec<f64> = values.iter().map(|&v| v.into()).collect();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Immutable summary of one score distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringStats {
    pub mean: f64,
    pub stdev: f64,
    pub median: f64,
    pub min: u32,
    pub max: u32,
    pub samples: usize,
    /// counts[score] = number of samples with that score
    pub counts: Vec<usize>,
}

impl ScoringStats {
    pub fn from_distribution(distribution: &ScoreDistribution) -> Result<Self, StatsError> {
        let scores = distribution.scores();
        let (min, max) = scores
            .iter()
            .fold(None, |acc: Option<(u32, u32)>, &s| match acc {
                None => Some((s, s)),
                Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
            })
            .ok_or(StatsError::NoSamples)?;

        Ok(ScoringStats {
            mean: mean(scores)?,
            stdev: sample_stdev(scores)?,
            median: median(scores)?,
            min,
            max,
            samples: scores.len(),
            counts: distribution.counts(),
        })
    }
}

impl std::fmt::Display for ScoringStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.2}±{:.2}", self.mean, self.stdev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_median_stdev() {
        let values = [2u32, 4, 4, 4, 5, 5, 7, 9];
        assert!((mean(&values).unwrap() - 5.0).abs() < 1e-12);
        assert!((median(&values).unwrap() - 4.5).abs() < 1e-12);
        // population variance 4, sample variance 32/7
        assert!((sample_stdev(&values).unwrap() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_median_odd_count_ignores_order() {
        assert_eq!(median(&[9u32, 1, 5]), Ok(5.0));
    }

    #[test]
    fn test_empty_input_is_no_samples() {
        let empty: [u32; 0] = [];
        assert_eq!(mean(&empty), Err(StatsError::NoSamples));
        assert_eq!(median(&empty), Err(StatsError::NoSamples));
        assert_eq!(sample_stdev(&empty), Err(StatsError::NoSamples));
        assert_eq!(
            ScoringStats::from_distribution(&ScoreDistribution::default()),
            Err(StatsError::NoSamples)
        );
    }

    #[test]
    fn test_single_sample_stdev_fails() {
        assert_eq!(sample_stdev(&[3u32]), Err(StatsError::SingleSample));
        assert_eq!(
            ScoringStats::from_distribution(&ScoreDistribution::from(vec![3])),
            Err(StatsError::SingleSample)
        );
    }

    #[test]
    fn test_scoring_stats_summary() {
        let distribution: ScoreDistribution = [0u32, 2, 2, 4, 12].into_iter().collect();
        let stats = ScoringStats::from_distribution(&distribution).unwrap();
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 12);
        assert_eq!(stats.median, 2.0);
        assert!((stats.mean - 4.0).abs() < 1e-12);
        assert_eq!(stats.samples, 5);
        assert_eq!(stats.counts.len(), 13);
        assert_eq!(stats.counts[2], 2);
        assert_eq!(stats.counts.iter().sum::<usize>(), 5);
        assert!(stats.min as f64 <= stats.mean && stats.mean <= stats.max as f64);
    }

    #[test]
    fn test_constant_distribution_has_zero_stdev() {
        let stats =
            ScoringStats::from_distribution(&ScoreDistribution::from(vec![6, 6, 6])).unwrap();
        assert_eq!(stats.stdev, 0.0);
        assert_eq!(stats.to_string(), "6.00±0.00");
    }
}
