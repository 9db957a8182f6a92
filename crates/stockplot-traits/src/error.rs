//! Error types for the stockplot pipeline.
//!
//! Library crates report failures through [`StockplotError`]; the binary wraps
//! it in `anyhow` at the outermost layer.

use thiserror::Error;

/// The main error type for stockplot operations.
#[derive(Debug, Error)]
pub enum StockplotError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a required column is missing from a frame.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error when data is insufficient for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error when a symbol is not part of a frame.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Error when a date is out of range or invalid.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error while drawing a chart.
    #[error("Render error: {0}")]
    Render(String),
}

/// A specialized Result type for stockplot operations.
pub type Result<T> = std::result::Result<T, StockplotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StockplotError::DataFetch("timeout".to_string());
        assert_eq!(err.to_string(), "Data fetch error: timeout");

        let err = StockplotError::MissingColumn("date".to_string());
        assert_eq!(err.to_string(), "Missing required column: date");

        let err = StockplotError::Render("backend closed".to_string());
        assert_eq!(err.to_string(), "Render error: backend closed");
    }
}
