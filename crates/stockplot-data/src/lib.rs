//! Market-data clients for stockplot.
//!
//! This crate fetches daily adjusted closing prices over HTTP and assembles
//! them into a [`stockplot_traits::PriceFrame`]. Two providers are supported:
//!
//! - [Yahoo Finance](https://finance.yahoo.com/) through its public chart
//!   endpoint (default, no key required)
//! - [Financial Modeling Prep](https://financialmodelingprep.com/) through its
//!   dividend-adjusted end-of-day endpoint
//!
//! # Usage
//!
//! ```rust,ignore
//! use stockplot_data::{Provider, ProviderKind, fetch_price_frame};
//! use stockplot_traits::DateRange;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Provider::connect(ProviderKind::Yahoo)?;
//!     let range = DateRange::trailing(chrono::Utc::now().date_naive(), 365)?;
//!
//!     let prices = fetch_price_frame(&provider, &["MSFT", "AMZN"], &range).await?;
//!     println!("{prices}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! The FMP provider reads `FMP_API_KEY` from the environment or a `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod dotenv;
mod error;
mod fetch;
mod fmp;
mod types;
mod yahoo;

pub use dotenv::load_dotenv;
pub use error::DataError;
pub use fetch::{Provider, ProviderKind, align_points, fetch_price_frame, normalize_symbols};
pub use fmp::FmpClient;
pub use types::*;
pub use yahoo::YahooClient;

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, DataError>;
