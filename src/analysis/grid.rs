use serde::{Deserialize, Serialize};

/// Default spacing between consecutive thresholds, in °C.
pub const DEFAULT_STEP: f64 = 0.2;

/// An evenly spaced ladder of candidate thresholds covering an observed
/// value range with margin.
///
/// The first threshold is the observed minimum floored to the step grid and
/// the last lies one full step above the observed maximum ceiled to it, so
/// the top of the ladder always clears the hottest observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdGrid {
    thresholds: Vec<f64>,
    step: f64,
}

impl ThresholdGrid {
    /// Builds the grid covering `values`.
    ///
    /// Endpoints snap to the step grid by dividing before rounding, and each
    /// threshold is computed as `lo + k * step` rather than by repeated
    /// addition, so long grids do not accumulate floating-point drift. An
    /// empty `values` yields an empty grid. Values are expected to be
    /// finite, which cleaning guarantees for temperatures.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not finite and positive.
    ///
    /// # Example
    ///
    /// ```
    /// use tempdist::ThresholdGrid;
    ///
    /// let grid = ThresholdGrid::from_values(&[-1.0, 0.0, 2.3], 0.2);
    ///
    /// assert_eq!(grid.len(), 19);
    /// assert!((grid.thresholds()[0] + 1.0).abs() < 1e-9);
    /// assert!((grid.thresholds()[18] - 2.6).abs() < 1e-9);
    /// ```
    pub fn from_values(values: &[f64], step: f64) -> Self {
        assert!(
            step.is_finite() && step > 0.0,
            "threshold step must be finite and positive, got {step}"
        );

        let Some(&first) = values.first() else {
            return Self {
                thresholds: Vec::new(),
                step,
            };
        };
        let (min, max) = values
            .iter()
            .skip(1)
            .fold((first, first), |(mn, mx), &v| (mn.min(v), mx.max(v)));

        let lo = (min / step).floor() * step;
        let hi = (max / step).ceil() * step;
        // Inclusive span plus one guard step past the ceiling.
        let points = ((hi - lo) / step).round() as usize + 2;
        let thresholds = (0..points).map(|k| lo + k as f64 * step).collect();

        Self { thresholds, step }
    }

    /// The thresholds in ascending order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// The spacing this grid was built with.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of thresholds.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// The lowest threshold, if any.
    pub fn first(&self) -> Option<f64> {
        self.thresholds.first().copied()
    }

    /// The highest threshold, if any.
    pub fn last(&self) -> Option<f64> {
        self.thresholds.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn spans_observed_range_with_guard_step() {
        let grid = ThresholdGrid::from_values(&[-1.0, 0.0, 2.3], 0.2);

        assert_eq!(grid.len(), 19);
        assert!((grid.thresholds()[0] + 1.0).abs() < TOLERANCE);
        assert!((grid.thresholds()[1] + 0.8).abs() < TOLERANCE);
        assert!((grid.thresholds()[18] - 2.6).abs() < TOLERANCE);
    }

    #[test]
    fn thresholds_are_uniformly_spaced_and_increasing() {
        let grid = ThresholdGrid::from_values(&[-13.7, 4.2, 29.9], 0.2);

        for pair in grid.thresholds().windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - 0.2).abs() < TOLERANCE);
        }
    }

    #[test]
    fn covers_every_input_value() {
        let values = [-7.3, -0.1, 0.0, 3.55, 12.8, 31.4];
        let grid = ThresholdGrid::from_values(&values, 0.2);

        let first = grid.first().unwrap();
        let last = grid.last().unwrap();
        for v in values {
            assert!(first <= v && v <= last, "{v} outside [{first}, {last}]");
        }
    }

    #[test]
    fn single_value_yields_two_thresholds() {
        let grid = ThresholdGrid::from_values(&[1.0], 0.2);

        assert_eq!(grid.len(), 2);
        assert!((grid.thresholds()[0] - 1.0).abs() < TOLERANCE);
        assert!((grid.thresholds()[1] - 1.2).abs() < TOLERANCE);
    }

    #[test]
    fn empty_values_yield_empty_grid() {
        let grid = ThresholdGrid::from_values(&[], 0.2);

        assert!(grid.is_empty());
        assert_eq!(grid.first(), None);
        assert_eq!(grid.last(), None);
        assert_eq!(grid.step(), 0.2);
    }

    #[test]
    fn same_input_builds_identical_grids() {
        let values = [3.1, -2.4, 17.0];
        assert_eq!(
            ThresholdGrid::from_values(&values, 0.2),
            ThresholdGrid::from_values(&values, 0.2)
        );
    }

    #[test]
    fn custom_step_changes_spacing() {
        let grid = ThresholdGrid::from_values(&[0.0, 1.0], 0.5);

        assert_eq!(grid.len(), 4);
        assert!((grid.thresholds()[3] - 1.5).abs() < TOLERANCE);
    }

    #[test]
    #[should_panic(expected = "finite and positive")]
    fn zero_step_panics() {
        ThresholdGrid::from_values(&[1.0], 0.0);
    }

    #[test]
    #[should_panic(expected = "finite and positive")]
    fn negative_step_panics() {
        ThresholdGrid::from_values(&[1.0], -0.2);
    }
}
