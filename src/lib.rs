mod analysis;
mod analyzer;
mod error;
mod frame;
mod types;

pub use analyzer::*;
pub use error::TempDistError;

pub use analysis::distribution::*;
pub use analysis::grid::*;
pub use analysis::series::*;
pub use analysis::stats::*;

pub use types::daily_sample::*;

pub use frame::extract::*;

pub use analysis::error::AnalysisError;
pub use frame::error::ExtractError;
