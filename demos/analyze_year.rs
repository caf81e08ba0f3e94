//! Runs the full threshold analysis over a synthetic year of daily
//! temperatures and prints both distribution tables.
//!
//! ```bash
//! cargo run --example analyze_year
//! ```

use chrono::NaiveDate;
use tempdist::{Analyzer, DailySample, TempDistError};

fn main() -> Result<(), TempDistError> {
    let samples = synthetic_year(2024);
    let report = Analyzer::new().analyze().samples(&samples).call()?;

    println!("days analyzed:    {}", report.summary.count);
    println!("coldest minimum:  {:6.1} °C", report.summary.min_of_min);
    println!("hottest maximum:  {:6.1} °C", report.summary.max_of_max);
    println!("mean minimum:     {:6.1} °C", report.summary.mean_of_min);
    println!("mean maximum:     {:6.1} °C", report.summary.mean_of_max);
    println!("overall range:    {:6.1} °C", report.summary.range);

    println!(
        "\ncold direction, {} thresholds (every 20th shown):",
        report.cold.len()
    );
    for entry in report.cold.entries().iter().step_by(20) {
        println!("  minimum below {:6.1} °C on {:3} days", entry.threshold, entry.count);
    }

    println!(
        "\nhot direction, {} thresholds (every 20th shown):",
        report.hot.len()
    );
    for entry in report.hot.entries().iter().step_by(20) {
        println!("  maximum above {:6.1} °C on {:3} days", entry.threshold, entry.count);
    }

    Ok(())
}

/// A year of plausible mid-latitude temperatures with an archive gap every
/// few weeks to exercise cleaning.
fn synthetic_year(year: i32) -> Vec<DailySample> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let days: i64 = if start.leap_year() { 366 } else { 365 };

    (0..days)
        .map(|i| {
            let date = start + chrono::Duration::days(i);
            let phase = i as f64 / days as f64 * std::f64::consts::TAU;
            let seasonal = 10.0 - 12.0 * phase.cos();
            let wobble = 3.0 * (i as f64 * 0.7).sin();

            let temp_min = if i % 23 == 11 {
                None
            } else {
                Some(seasonal + wobble - 4.0)
            };
            let temp_max = Some(seasonal + wobble + 4.5);

            DailySample::new(date, temp_min, temp_max)
        })
        .collect()
}
