use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of archive temperatures, as delivered by the data-acquisition
/// layer. Either temperature may be absent (sensor or archive gap); `None`
/// is distinct from a measured `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySample {
    pub date: NaiveDate,
    /// Minimum temperature for the day, °C.
    pub temp_min: Option<f64>,
    /// Maximum temperature for the day, °C.
    pub temp_max: Option<f64>,
}

impl DailySample {
    /// Creates a sample for `date` with the given temperatures.
    pub fn new(date: NaiveDate, temp_min: Option<f64>, temp_max: Option<f64>) -> Self {
        Self {
            date,
            temp_min,
            temp_max,
        }
    }

    /// Whether both temperatures are present and finite. A NaN gap marker
    /// counts as absent.
    pub fn is_complete(&self) -> bool {
        self.temp_min.is_some_and(f64::is_finite) && self.temp_max.is_some_and(f64::is_finite)
    }
}

/// A sample that survived cleaning: both temperatures are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedSample {
    pub date: NaiveDate,
    /// Minimum temperature for the day, °C.
    pub temp_min: f64,
    /// Maximum temperature for the day, °C.
    pub temp_max: f64,
}
