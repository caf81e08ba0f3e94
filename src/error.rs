use crate::analysis::error::AnalysisError;
use crate::frame::error::ExtractError;
use thiserror::Error;

/// Any error this crate can produce, for callers that funnel the
/// frame-extraction and analysis stages through one error type.
#[derive(Debug, Error)]
pub enum TempDistError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}
