//! The analysis pipeline: cleaning, threshold grids, cumulative
//! distributions and summary statistics.

pub mod distribution;
pub mod error;
pub mod grid;
pub mod series;
pub mod stats;
