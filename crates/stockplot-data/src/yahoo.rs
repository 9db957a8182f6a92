//! Yahoo Finance chart client.
//!
//! Uses the public v8 chart endpoint, which needs no API key but rejects
//! requests without a browser-like User-Agent.

use reqwest::Client;
use stockplot_traits::{Date, DateRange, PricePoint, PriceSource};
use tracing::debug;

use crate::{
    Result,
    error::DataError,
    types::{ChartResponse, ChartResult},
};

/// Base URL for the Yahoo Finance chart API.
const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// User-Agent sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Yahoo Finance API client.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
}

impl YahooClient {
    /// Create a new Yahoo client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: YAHOO_BASE_URL.to_string(),
        })
    }

    /// Point the client at another host, e.g. a local mock.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the chart URL for a daily series.
    fn url(&self, symbol: &str, range: &DateRange) -> String {
        format!(
            "{}/{}?period1={}&period2={}&interval=1d&events=div,splits&includeAdjustedClose=true",
            self.base_url,
            symbol.to_uppercase(),
            unix_seconds(range.start()),
            unix_seconds(range.end()),
        )
    }

    /// Fetch the raw chart for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, Yahoo reports an error, or the
    /// response holds no series.
    pub async fn chart(&self, symbol: &str, range: &DateRange) -> Result<ChartResult> {
        let url = self.url(symbol, range);
        debug!(symbol, %range, "requesting Yahoo chart");
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimitExceeded("Yahoo"));
        }

        // Yahoo answers unknown symbols with 404 and a JSON error body, so the
        // body is parsed before the status is checked.
        let status = response.status();
        let text = response.text().await?;
        parse_chart(symbol, &text).map_err(|err| match err {
            DataError::Json(_) if !status.is_success() => DataError::Api {
                provider: "Yahoo",
                message: format!("HTTP {status}: {text}"),
            },
            other => other,
        })
    }
}

/// Seconds since the Unix epoch at midnight UTC of `date`.
fn unix_seconds(date: Date) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

/// Parse a chart body into its single result.
fn parse_chart(symbol: &str, text: &str) -> Result<ChartResult> {
    let response: ChartResponse = serde_json::from_str(text)?;

    if let Some(error) = response.chart.error {
        if error.code == "Not Found" {
            return Err(DataError::SymbolNotFound(symbol.to_uppercase()));
        }
        return Err(DataError::Api {
            provider: "Yahoo",
            message: format!("{}: {}", error.code, error.description),
        });
    }

    response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| DataError::NoData(symbol.to_uppercase()))
}

/// Adjusted closes of `chart` that fall inside `range`.
fn chart_points(symbol: &str, chart: &ChartResult, range: &DateRange) -> Result<Vec<PricePoint>> {
    if chart.timestamp.is_empty() {
        return Err(DataError::NoData(symbol.to_uppercase()));
    }

    Ok(chart
        .points()
        .into_iter()
        .filter(|p| range.contains(p.date))
        .collect())
}

impl PriceSource for YahooClient {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn adjusted_closes(
        &self,
        symbol: &str,
        range: &DateRange,
    ) -> stockplot_traits::Result<Vec<PricePoint>> {
        let chart = self.chart(symbol, range).await?;
        chart_points(symbol, &chart, range).map_err(Into::into)
    }
}
