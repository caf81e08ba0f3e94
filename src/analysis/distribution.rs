use crate::analysis::grid::ThresholdGrid;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Which side of a threshold an observation must fall on to be counted.
///
/// Comparisons are strict, so a value equal to the threshold never counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    /// Count observations strictly below the threshold, as in cold-day
    /// analysis over daily minimums.
    Below,
    /// Count observations strictly above the threshold, as in hot-day
    /// analysis over daily maximums.
    Above,
}

/// One row of a distribution table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub threshold: f64,
    pub count: usize,
}

/// A cumulative threshold distribution: for every grid threshold, the number
/// of observations on the counted side of it.
///
/// Entries follow grid order, so counts are non-decreasing for
/// [`Comparison::Below`] and non-increasing for [`Comparison::Above`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionTable {
    comparison: Comparison,
    entries: Vec<DistributionEntry>,
}

impl DistributionTable {
    /// Counts, for every threshold in `grid`, how many `values` satisfy
    /// `comparison` against it.
    ///
    /// A sorted copy of `values` is taken once and each threshold is then
    /// resolved with a binary search, which yields exactly the counts a
    /// per-threshold linear scan would. The input itself is never reordered.
    /// An empty grid yields an empty table; empty `values` yield a zero
    /// count at every threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use tempdist::{Comparison, DistributionTable, ThresholdGrid};
    ///
    /// let minimums = [-1.0, 0.0, 2.3];
    /// let grid = ThresholdGrid::from_values(&minimums, 0.2);
    /// let cold = DistributionTable::aggregate(&minimums, &grid, Comparison::Below);
    ///
    /// // -1.0 is not strictly below the first threshold (-1.0).
    /// assert_eq!(cold.entries()[0].count, 0);
    /// assert_eq!(cold.entries()[18].count, 3);
    /// ```
    pub fn aggregate(values: &[f64], grid: &ThresholdGrid, comparison: Comparison) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable_by_key(|&v| OrderedFloat(v));

        let entries = grid
            .thresholds()
            .iter()
            .map(|&threshold| {
                let count = match comparison {
                    Comparison::Below => sorted.partition_point(|&v| v < threshold),
                    Comparison::Above => sorted.len() - sorted.partition_point(|&v| v <= threshold),
                };
                DistributionEntry { threshold, count }
            })
            .collect();

        Self {
            comparison,
            entries,
        }
    }

    /// The comparison this table was aggregated with.
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// The rows, in grid order.
    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic value spread, loosely shaped like a year of minimums.
    fn scattered_values(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                10.0 - 12.0 * (t / 58.0).cos() + 3.0 * (t * 0.7).sin()
            })
            .collect()
    }

    fn brute_force(values: &[f64], grid: &ThresholdGrid, comparison: Comparison) -> Vec<usize> {
        grid.thresholds()
            .iter()
            .map(|&threshold| match comparison {
                Comparison::Below => values.iter().filter(|&&v| v < threshold).count(),
                Comparison::Above => values.iter().filter(|&&v| v > threshold).count(),
            })
            .collect()
    }

    #[test]
    fn counts_strictly_below_each_threshold() {
        let minimums = [-1.0, 0.0, 2.3];
        let grid = ThresholdGrid::from_values(&minimums, 0.2);

        let cold = DistributionTable::aggregate(&minimums, &grid, Comparison::Below);

        assert_eq!(cold.len(), 19);
        assert_eq!(cold.entries()[0].count, 0);
        assert_eq!(cold.entries()[1].count, 1);
        assert_eq!(cold.entries()[18].count, 3);
    }

    #[test]
    fn counts_strictly_above_each_threshold() {
        let maximums = [2.0, 2.0, 3.0];
        let grid = ThresholdGrid::from_values(&maximums, 0.2);

        let hot = DistributionTable::aggregate(&maximums, &grid, Comparison::Above);

        // Values equal to the threshold are excluded.
        assert!((hot.entries()[0].threshold - 2.0).abs() < 1e-9);
        assert_eq!(hot.entries()[0].count, 1);
        let last = hot.entries().last().unwrap();
        assert_eq!(last.count, 0);
    }

    #[test]
    fn below_counts_never_decrease() {
        let values = scattered_values(365);
        let grid = ThresholdGrid::from_values(&values, 0.2);

        let table = DistributionTable::aggregate(&values, &grid, Comparison::Below);

        for pair in table.entries().windows(2) {
            assert!(pair[0].count <= pair[1].count);
        }
    }

    #[test]
    fn above_counts_never_increase() {
        let values = scattered_values(365);
        let grid = ThresholdGrid::from_values(&values, 0.2);

        let table = DistributionTable::aggregate(&values, &grid, Comparison::Above);

        for pair in table.entries().windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn matches_linear_scan() {
        let values = scattered_values(200);
        let grid = ThresholdGrid::from_values(&values, 0.2);

        for comparison in [Comparison::Below, Comparison::Above] {
            let table = DistributionTable::aggregate(&values, &grid, comparison);
            let expected = brute_force(&values, &grid, comparison);
            let counts: Vec<usize> = table.entries().iter().map(|e| e.count).collect();
            assert_eq!(counts, expected);
        }
    }

    #[test]
    fn table_rows_follow_grid_order() {
        let values = [4.0, -2.5, 0.1];
        let grid = ThresholdGrid::from_values(&values, 0.2);

        let table = DistributionTable::aggregate(&values, &grid, Comparison::Below);

        let thresholds: Vec<f64> = table.entries().iter().map(|e| e.threshold).collect();
        assert_eq!(thresholds, grid.thresholds());
    }

    #[test]
    fn empty_grid_yields_empty_table() {
        let grid = ThresholdGrid::from_values(&[], 0.2);
        let table = DistributionTable::aggregate(&[], &grid, Comparison::Below);

        assert!(table.is_empty());
        assert_eq!(table.comparison(), Comparison::Below);
    }

    #[test]
    fn empty_values_against_nonempty_grid_count_zero() {
        let grid = ThresholdGrid::from_values(&[0.0, 1.0], 0.2);
        let table = DistributionTable::aggregate(&[], &grid, Comparison::Above);

        assert_eq!(table.len(), grid.len());
        assert!(table.entries().iter().all(|e| e.count == 0));
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = [1.0, 2.0, 3.0, 4.0];
        let shuffled = [3.0, 1.0, 4.0, 2.0];
        let grid = ThresholdGrid::from_values(&forward, 0.2);

        assert_eq!(
            DistributionTable::aggregate(&forward, &grid, Comparison::Below),
            DistributionTable::aggregate(&shuffled, &grid, Comparison::Below)
        );
    }
}
