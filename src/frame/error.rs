use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Required column '{0}' not found in daily frame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column '{column}' cannot be read as {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Date column holds a null at row {row}")]
    MissingDate { row: usize },

    #[error("Date at row {row} is outside the representable range")]
    InvalidDate { row: usize },
}
