use crate::analysis::error::AnalysisError;
use crate::analysis::stats::SummaryStats;
use crate::types::daily_sample::{CleanedSample, DailySample};
use serde::{Deserialize, Serialize};

/// The usable subset of an analysis input: every sample with both
/// temperatures present and finite, in arrival order.
///
/// Rows missing either temperature are discarded whole, so the minimum and
/// maximum series always stay aligned day for day. The number of discarded
/// rows is kept for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedSeries {
    samples: Vec<CleanedSample>,
    dropped: usize,
}

impl CleanedSeries {
    /// Drops every sample whose minimum or maximum temperature is absent
    /// or not finite. Archives that encode gaps as NaN are handled the
    /// same as explicit nulls.
    ///
    /// Order is preserved and the input is never re-sorted. An input where
    /// every row has a gap yields an empty series rather than an error, so
    /// callers decide how to surface that.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tempdist::{CleanedSeries, DailySample};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let samples = vec![
    ///     DailySample::new(date, Some(1.0), Some(5.0)),
    ///     DailySample::new(date.succ_opt().unwrap(), None, Some(6.0)),
    /// ];
    ///
    /// let cleaned = CleanedSeries::from_samples(&samples);
    /// assert_eq!(cleaned.len(), 1);
    /// assert_eq!(cleaned.dropped(), 1);
    /// ```
    pub fn from_samples(samples: &[DailySample]) -> Self {
        let cleaned: Vec<CleanedSample> = samples
            .iter()
            .filter_map(|sample| match (sample.temp_min, sample.temp_max) {
                (Some(temp_min), Some(temp_max))
                    if temp_min.is_finite() && temp_max.is_finite() =>
                {
                    Some(CleanedSample {
                        date: sample.date,
                        temp_min,
                        temp_max,
                    })
                }
                _ => None,
            })
            .collect();
        let dropped = samples.len() - cleaned.len();

        Self {
            samples: cleaned,
            dropped,
        }
    }

    /// The retained samples, in input order.
    pub fn samples(&self) -> &[CleanedSample] {
        &self.samples
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of input rows discarded for a missing temperature.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Minimum temperatures in series order.
    pub fn min_temps(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.temp_min).collect()
    }

    /// Maximum temperatures in series order.
    pub fn max_temps(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.temp_max).collect()
    }

    /// Summary statistics over the retained samples.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptySeries`] when nothing was retained.
    pub fn summary(&self) -> Result<SummaryStats, AnalysisError> {
        SummaryStats::from_series(self)
    }
}
