//! Converts daily weather frames into [`DailySample`] rows.
//!
//! Acquisition layers usually hand over a polars `DataFrame` with one row
//! per day. The extractor reads only the date and temperature columns, so
//! frames carrying additional measurements work as-is.

use crate::frame::error::ExtractError;
use crate::types::daily_sample::DailySample;
use chrono::NaiveDate;
use polars::prelude::*;

const COL_DATE: &str = "date";
const COL_TEMP_MIN: &str = "tmin";
const COL_TEMP_MAX: &str = "tmax";

// Offset between 0001-01-01 (chrono's day zero) and 1970-01-01 (the
// epoch polars dates count from).
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Maps the columns of a daily frame onto sample fields.
///
/// The default names follow the daily archive schema (`date`, `tmin`,
/// `tmax`); frames from other providers override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyColumns<'a> {
    pub date: &'a str,
    pub temp_min: &'a str,
    pub temp_max: &'a str,
}

impl Default for DailyColumns<'_> {
    fn default() -> Self {
        Self {
            date: COL_DATE,
            temp_min: COL_TEMP_MIN,
            temp_max: COL_TEMP_MAX,
        }
    }
}

/// Extracts one [`DailySample`] per frame row using the default column
/// names.
///
/// # Errors
///
/// Same failure modes as [`samples_from_frame`].
pub fn samples_from_daily_frame(frame: &DataFrame) -> Result<Vec<DailySample>, ExtractError> {
    samples_from_frame(frame, DailyColumns::default())
}

/// Extracts one [`DailySample`] per frame row.
///
/// Temperature columns are read as nullable floats and nulls map to `None`,
/// keeping archive gaps distinct from measured zeroes. Non-finite cells map
/// to `None` as well, since float archives often encode gaps as NaN. Integer
/// temperature columns are widened to floats. Row order is preserved.
///
/// # Errors
///
/// Fails when a named column is absent or not readable under the expected
/// type, and when the date column holds a null or an out-of-range value.
pub fn samples_from_frame(
    frame: &DataFrame,
    columns: DailyColumns<'_>,
) -> Result<Vec<DailySample>, ExtractError> {
    let dates = date_column(frame, columns.date)?;
    let temp_min = float_column(frame, columns.temp_min)?;
    let temp_max = float_column(frame, columns.temp_max)?;

    let mut samples = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let Some(days) = dates.get(row) else {
            return Err(ExtractError::MissingDate { row });
        };
        let date = days
            .checked_add(EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(ExtractError::InvalidDate { row })?;

        samples.push(DailySample {
            date,
            temp_min: temp_min.get(row).filter(|t| t.is_finite()),
            temp_max: temp_max.get(row).filter(|t| t.is_finite()),
        });
    }

    Ok(samples)
}

fn get_column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Column, ExtractError> {
    frame
        .column(name)
        .map_err(|e| ExtractError::ColumnNotFound(name.to_string(), e))
}

fn date_column(frame: &DataFrame, name: &str) -> Result<DateChunked, ExtractError> {
    let column = get_column(frame, name)?;
    let dates = column
        .date()
        .map_err(|e| ExtractError::ColumnType {
            column: name.to_string(),
            expected: "Date",
            source: e,
        })?
        .clone();
    Ok(dates)
}

fn float_column(frame: &DataFrame, name: &str) -> Result<Float64Chunked, ExtractError> {
    let widened = get_column(frame, name)?
        .cast(&DataType::Float64)
        .map_err(|e| ExtractError::ColumnType {
            column: name.to_string(),
            expected: "Float64",
            source: e,
        })?;
    let floats = widened
        .f64()
        .map_err(|e| ExtractError::ColumnType {
            column: name.to_string(),
            expected: "Float64",
            source: e,
        })?
        .clone();
    Ok(floats)
}
