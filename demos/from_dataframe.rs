//! Extracts samples from a polars daily frame, the shape a data-acquisition
//! layer typically hands over, and runs the analysis on them.
//!
//! ```bash
//! cargo run --example from_dataframe
//! ```

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use std::error::Error;
use tempdist::{samples_from_frame, Analyzer, DailyColumns};

fn main() -> Result<(), Box<dyn Error>> {
    let frame = archive_frame()?;
    println!("{frame}");

    let columns = DailyColumns {
        date: "time",
        temp_min: "temperature_2m_min",
        temp_max: "temperature_2m_max",
    };
    let samples = samples_from_frame(&frame, columns)?;
    let report = Analyzer::new().analyze().samples(&samples).call()?;

    println!(
        "{} usable days, minimums {:.1} to {:.1} °C, maximums {:.1} to {:.1} °C",
        report.summary.count,
        report.summary.min_of_min,
        report.summary.max_of_min,
        report.summary.min_of_max,
        report.summary.max_of_max,
    );
    for entry in report.cold.entries() {
        println!("minimum below {:5.1} °C on {} days", entry.threshold, entry.count);
    }

    Ok(())
}

/// Two weeks of daily extremes under provider-style column names, with one
/// gap day.
fn archive_frame() -> PolarsResult<DataFrame> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let epoch_days = start.num_days_from_ce() - 719_163;
    let time: Vec<i32> = (0..14).map(|i| epoch_days + i).collect();

    let minimums = [
        Some(-3.2),
        Some(-1.0),
        None,
        Some(0.4),
        Some(2.3),
        Some(1.1),
        Some(-0.6),
        Some(-2.8),
        Some(-4.1),
        Some(0.0),
        Some(1.7),
        Some(2.9),
        Some(-1.3),
        Some(0.8),
    ];
    let maximums = [
        Some(2.1),
        Some(4.0),
        Some(5.2),
        Some(6.8),
        Some(9.3),
        Some(7.7),
        Some(4.4),
        Some(1.9),
        Some(0.5),
        Some(5.0),
        Some(8.2),
        Some(10.1),
        Some(3.6),
        Some(6.4),
    ];

    DataFrame::new(vec![
        Series::new("time".into(), time)
            .cast(&DataType::Date)?
            .into(),
        Series::new("temperature_2m_min".into(), minimums.as_slice()).into(),
        Series::new("temperature_2m_max".into(), maximums.as_slice()).into(),
    ])
}
