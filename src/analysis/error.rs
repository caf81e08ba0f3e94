use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No samples with both a minimum and a maximum temperature remain after cleaning")]
    EmptySeries,
}
