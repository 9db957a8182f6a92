//! Financial Modeling Prep client.

use std::env;

use chrono::Days;
use reqwest::Client;
use stockplot_traits::{DateRange, PricePoint, PriceSource};
use tracing::debug;

use crate::{Result, dotenv::load_dotenv, error::DataError, types::AdjustedPrice};

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: FMP_BASE_URL.to_string(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or a `.env`
    /// file exists but cannot be loaded.
    pub fn from_env() -> Result<Self> {
        load_dotenv()?;

        let api_key = env::var("FMP_API_KEY").map_err(|_| DataError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Point the client at another host, e.g. a local mock.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{}/{endpoint}&apikey={}", self.base_url, self.api_key)
        } else {
            format!("{}/{endpoint}?apikey={}", self.base_url, self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimitExceeded("FMP"));
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DataError::Api {
                provider: "FMP",
                message: format!("HTTP {status}: {text}"),
            });
        }

        let text = response.text().await?;
        parse_body(&text)
    }

    /// Endpoint for dividend-adjusted daily prices.
    ///
    /// FMP treats `to` as inclusive, so the last requested day is the one
    /// before the exclusive end of `range`.
    fn adjusted_endpoint(symbol: &str, range: &DateRange) -> String {
        let last = range
            .end()
            .checked_sub_days(Days::new(1))
            .unwrap_or(range.start());
        format!(
            "historical-price-eod/dividend-adjusted?symbol={}&from={}&to={}",
            symbol.to_uppercase(),
            range.start().format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        )
    }

    /// Get dividend-adjusted daily prices for a symbol, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn adjusted_prices(
        &self,
        symbol: &str,
        range: &DateRange,
    ) -> Result<Vec<AdjustedPrice>> {
        let endpoint = Self::adjusted_endpoint(symbol, range);
        debug!(symbol, %range, "requesting FMP adjusted prices");
        // The stable API returns a flat array, not a wrapped response
        self.get(&endpoint).await
    }
}

/// Parse an FMP body, surfacing embedded error messages.
fn parse_body<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
    // Check for error responses
    if text.contains("\"Error Message\"") || text.contains("\"error\"") {
        return Err(DataError::Api {
            provider: "FMP",
            message: text.to_string(),
        });
    }

    Ok(serde_json::from_str(text)?)
}

impl PriceSource for FmpClient {
    fn name(&self) -> &str {
        "fmp"
    }

    async fn adjusted_closes(
        &self,
        symbol: &str,
        range: &DateRange,
    ) -> stockplot_traits::Result<Vec<PricePoint>> {
        let prices = self.adjusted_prices(symbol, range).await?;
        if prices.is_empty() {
            return Err(DataError::NoData(symbol.to_uppercase()).into());
        }

        Ok(prices
            .iter()
            .filter_map(AdjustedPrice::to_point)
            .filter(|p| range.contains(p.date))
            .collect())
    }
}
