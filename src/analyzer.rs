use crate::analysis::distribution::{Comparison, DistributionTable};
use crate::analysis::error::AnalysisError;
use crate::analysis::grid::{DEFAULT_STEP, ThresholdGrid};
use crate::analysis::series::CleanedSeries;
use crate::analysis::stats::SummaryStats;
use crate::types::daily_sample::DailySample;
use bon::bon;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Everything one analysis run hands to a rendering layer: the two
/// cumulative distribution tables and the summary statistics over the
/// cleaned series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Days with a minimum temperature strictly below each threshold.
    pub cold: DistributionTable,
    /// Days with a maximum temperature strictly above each threshold.
    pub hot: DistributionTable,
    /// Aggregate statistics over the cleaned series.
    pub summary: SummaryStats,
}

/// The entry point for threshold-distribution analysis of daily temperature
/// series.
///
/// An `Analyzer` holds the grid spacing used when a call does not override
/// it and is cheap to construct and reuse across runs. Samples come from
/// whatever acquisition layer the application has; [`samples_from_frame`]
/// covers the common case of a polars `DataFrame`.
///
/// [`samples_from_frame`]: crate::samples_from_frame
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tempdist::{Analyzer, DailySample};
///
/// let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let samples = vec![
///     DailySample::new(day(1), Some(-1.0), Some(5.0)),
///     DailySample::new(day(2), Some(0.0), Some(6.0)),
///     DailySample::new(day(3), Some(2.3), Some(7.0)),
/// ];
///
/// let report = Analyzer::new().analyze().samples(&samples).call()?;
///
/// assert_eq!(report.summary.count, 3);
/// assert_eq!(report.cold.len(), 19);
/// assert_eq!(report.summary.range, 8.0);
/// # Ok::<(), tempdist::AnalysisError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Analyzer {
    step: f64,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl Analyzer {
    /// Creates an analyzer with the default grid spacing of
    /// [`DEFAULT_STEP`] °C.
    pub fn new() -> Self {
        Self { step: DEFAULT_STEP }
    }

    /// Creates an analyzer with a custom grid spacing.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not finite and positive.
    pub fn with_step(step: f64) -> Self {
        assert!(
            step.is_finite() && step > 0.0,
            "threshold step must be finite and positive, got {step}"
        );
        Self { step }
    }

    /// Runs the full analysis over `samples`.
    ///
    /// Cleaning drops every day missing a finite temperature, then both
    /// distribution tables and the summary statistics are computed over the
    /// surviving series. The cold table counts days with a minimum strictly
    /// below each threshold, the hot table days with a maximum strictly
    /// above it, each over its own grid.
    ///
    /// # Arguments
    ///
    /// * `samples` - The daily samples to analyze, in any order.
    /// * `step` - Optional grid spacing in °C overriding the analyzer's.
    ///
    /// # Returns
    ///
    /// A `Result` containing the [`AnalysisReport`] for the cleaned series.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptySeries`] when no sample keeps both
    /// temperatures, including when `samples` itself is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tempdist::{Analyzer, DailySample};
    ///
    /// let day = |d: u32| NaiveDate::from_ymd_opt(2024, 7, d).unwrap();
    /// let samples = vec![
    ///     DailySample::new(day(1), Some(14.2), Some(27.9)),
    ///     DailySample::new(day(2), None, Some(30.1)),
    ///     DailySample::new(day(3), Some(16.8), Some(31.4)),
    /// ];
    ///
    /// let report = Analyzer::new()
    ///     .analyze()
    ///     .samples(&samples)
    ///     .step(0.5)
    ///     .call()?;
    ///
    /// // The day with a missing minimum is dropped whole.
    /// assert_eq!(report.summary.count, 2);
    /// assert_eq!(report.hot.entries().first().map(|e| e.count), Some(2));
    /// # Ok::<(), tempdist::AnalysisError>(())
    /// ```
    #[builder]
    pub fn analyze(
        &self,
        samples: &[DailySample],
        step: Option<f64>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let step = step.unwrap_or(self.step);
        let cleaned = CleanedSeries::from_samples(samples);
        if cleaned.is_empty() {
            warn!(
                "no usable samples after cleaning ({} input rows)",
                samples.len()
            );
            return Err(AnalysisError::EmptySeries);
        }
        debug!(
            "analyzing {} samples ({} dropped) with {} °C steps",
            cleaned.len(),
            cleaned.dropped(),
            step
        );

        let summary = cleaned.summary()?;
        Ok(AnalysisReport {
            cold: cold_table(&cleaned, step),
            hot: hot_table(&cleaned, step),
            summary,
        })
    }

    /// Computes only the cold-direction table: for each threshold, the
    /// number of days whose minimum lies strictly below it.
    ///
    /// Cleaning still drops days missing either temperature, so the counts
    /// match the `cold` table of [`Analyzer::analyze`] exactly. An input
    /// with no usable samples yields an empty table.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tempdist::{Analyzer, DailySample};
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let samples = vec![DailySample::new(day, Some(-3.4), Some(1.2))];
    ///
    /// let cold = Analyzer::new().cold_days().samples(&samples).call();
    /// assert_eq!(cold.len(), 2);
    /// ```
    #[builder]
    pub fn cold_days(&self, samples: &[DailySample], step: Option<f64>) -> DistributionTable {
        let step = step.unwrap_or(self.step);
        cold_table(&CleanedSeries::from_samples(samples), step)
    }

    /// Computes only the hot-direction table: for each threshold, the
    /// number of days whose maximum lies strictly above it.
    ///
    /// The counterpart of [`Analyzer::cold_days`] over daily maximums.
    #[builder]
    pub fn hot_days(&self, samples: &[DailySample], step: Option<f64>) -> DistributionTable {
        let step = step.unwrap_or(self.step);
        hot_table(&CleanedSeries::from_samples(samples), step)
    }
}

fn cold_table(cleaned: &CleanedSeries, step: f64) -> DistributionTable {
    let minimums = cleaned.min_temps();
    let grid = ThresholdGrid::from_values(&minimums, step);
    DistributionTable::aggregate(&minimums, &grid, Comparison::Below)
}

fn hot_table(cleaned: &CleanedSeries, step: f64) -> DistributionTable {
    let maximums = cleaned.max_temps();
    let grid = ThresholdGrid::from_values(&maximums, step);
    DistributionTable::aggregate(&maximums, &grid, Comparison::Above)
}
