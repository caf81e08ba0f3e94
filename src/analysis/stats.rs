use crate::analysis::error::AnalysisError;
use crate::analysis::series::CleanedSeries;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a cleaned series, covering both temperature
/// directions at once.
///
/// All temperatures are in °C. `count` is shared because cleaning drops a
/// day whole, keeping the minimum and maximum series the same length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Number of days with both temperatures present.
    pub count: usize,
    /// Coldest daily minimum.
    pub min_of_min: f64,
    /// Warmest daily minimum.
    pub max_of_min: f64,
    pub mean_of_min: f64,
    /// Coolest daily maximum.
    pub min_of_max: f64,
    /// Hottest daily maximum.
    pub max_of_max: f64,
    pub mean_of_max: f64,
    /// Spread between the hottest maximum and the coldest minimum.
    pub range: f64,
}

impl SummaryStats {
    /// Computes the statistics in a single pass over the series.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptySeries`] when the series holds no
    /// samples, since minima and maxima are undefined there.
    pub fn from_series(series: &CleanedSeries) -> Result<Self, AnalysisError> {
        let samples = series.samples();
        let Some(first) = samples.first() else {
            return Err(AnalysisError::EmptySeries);
        };

        let mut min_of_min = first.temp_min;
        let mut max_of_min = first.temp_min;
        let mut sum_of_min = 0.0;
        let mut min_of_max = first.temp_max;
        let mut max_of_max = first.temp_max;
        let mut sum_of_max = 0.0;

        for sample in samples {
            min_of_min = min_of_min.min(sample.temp_min);
            max_of_min = max_of_min.max(sample.temp_min);
            sum_of_min += sample.temp_min;
            min_of_max = min_of_max.min(sample.temp_max);
            max_of_max = max_of_max.max(sample.temp_max);
            sum_of_max += sample.temp_max;
        }

        let count = samples.len();
        Ok(Self {
            count,
            min_of_min,
            max_of_min,
            mean_of_min: sum_of_min / count as f64,
            min_of_max,
            max_of_max,
            mean_of_max: sum_of_max / count as f64,
            range: max_of_max - min_of_min,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::daily_sample::DailySample;
    use chrono::NaiveDate;

    fn series(temps: &[(f64, f64)]) -> CleanedSeries {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let samples: Vec<DailySample> = temps
            .iter()
            .enumerate()
            .map(|(i, &(mn, mx))| {
                let date = start + chrono::Duration::days(i as i64);
                DailySample::new(date, Some(mn), Some(mx))
            })
            .collect();
        CleanedSeries::from_samples(&samples)
    }

    #[test]
    fn summarizes_both_directions() {
        let stats = SummaryStats::from_series(&series(&[(1.0, 5.0), (2.0, 6.0), (3.0, 7.0)]))
            .unwrap();

        assert_eq!(stats.count, 3);
        assert_eq!(stats.min_of_min, 1.0);
        assert_eq!(stats.max_of_min, 3.0);
        assert!((stats.mean_of_min - 2.0).abs() < 1e-12);
        assert_eq!(stats.min_of_max, 5.0);
        assert_eq!(stats.max_of_max, 7.0);
        assert!((stats.mean_of_max - 6.0).abs() < 1e-12);
        assert_eq!(stats.range, 6.0);
    }

    #[test]
    fn range_spans_coldest_minimum_to_hottest_maximum() {
        let stats = SummaryStats::from_series(&series(&[(-12.5, -3.0), (-4.0, 8.5)])).unwrap();

        assert_eq!(stats.min_of_min, -12.5);
        assert_eq!(stats.max_of_max, 8.5);
        assert_eq!(stats.range, 21.0);
    }

    #[test]
    fn single_sample_collapses_extremes_and_means() {
        let stats = SummaryStats::from_series(&series(&[(0.4, 9.6)])).unwrap();

        assert_eq!(stats.count, 1);
        assert_eq!(stats.min_of_min, 0.4);
        assert_eq!(stats.max_of_min, 0.4);
        assert_eq!(stats.mean_of_min, 0.4);
        assert_eq!(stats.min_of_max, 9.6);
        assert_eq!(stats.max_of_max, 9.6);
        assert_eq!(stats.mean_of_max, 9.6);
        assert!((stats.range - 9.2).abs() < 1e-12);
    }

    #[test]
    fn empty_series_is_an_error() {
        let empty = CleanedSeries::from_samples(&[]);
        assert!(matches!(
            SummaryStats::from_series(&empty),
            Err(AnalysisError::EmptySeries)
        ));
    }
}
