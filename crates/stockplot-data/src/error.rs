//! Error types for the market-data clients.

use stockplot_traits::StockplotError;
use thiserror::Error;

/// Errors that can occur when talking to a price provider.
#[derive(Debug, Error)]
pub enum DataError {
    /// Missing API key.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider returned an error.
    #[error("{provider} API error: {message}")]
    Api {
        /// Provider that reported the error.
        provider: &'static str,
        /// Message from the provider.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("{0} rate limit exceeded")]
    RateLimitExceeded(&'static str),

    /// Symbol not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// No data available.
    #[error("No data available for {0}")]
    NoData(String),

    /// Request could not be built from the arguments.
    #[error("Invalid request: {0}")]
    InvalidData(String),

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),
}

impl From<DataError> for StockplotError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::InvalidData(msg) => Self::InvalidData(msg),
            DataError::SymbolNotFound(symbol) => Self::SymbolNotFound(symbol),
            other => Self::DataFetch(other.to_string()),
        }
    }
}
