//! Wire types for provider responses.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use stockplot_traits::PricePoint;

/// Dividend-adjusted end-of-day price from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedPrice {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Date (YYYY-MM-DD).
    pub date: String,
    /// Adjusted open.
    #[serde(default)]
    pub adj_open: Option<f64>,
    /// Adjusted high.
    #[serde(default)]
    pub adj_high: Option<f64>,
    /// Adjusted low.
    #[serde(default)]
    pub adj_low: Option<f64>,
    /// Adjusted close.
    #[serde(default)]
    pub adj_close: Option<f64>,
    /// Volume.
    #[serde(default)]
    pub volume: Option<f64>,
}

impl AdjustedPrice {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Convert into a [`PricePoint`], `None` if the date is malformed.
    #[must_use]
    pub fn to_point(&self) -> Option<PricePoint> {
        self.parsed_date()
            .map(|date| PricePoint::new(date, self.adj_close))
    }
}

/// Top level of a Yahoo Finance v8 chart response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    /// Chart payload.
    pub chart: Chart,
}

/// Result or error of a chart request.
#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    /// One entry per requested symbol.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// Error reported by Yahoo.
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// Error object embedded in a chart response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartError {
    /// Error code, e.g. "Not Found".
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

/// Series data for one symbol.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    /// Instrument metadata.
    pub meta: ChartMeta,
    /// Bar timestamps (seconds since epoch, UTC).
    #[serde(default)]
    pub timestamp: Vec<i64>,
    /// Price arrays aligned with `timestamp`.
    pub indicators: Indicators,
}

/// Instrument metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    /// Ticker symbol.
    pub symbol: String,
    /// Trading currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    pub gmtoffset: i64,
}

/// Indicator arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct Indicators {
    /// Adjusted close series, usually a single element.
    #[serde(default)]
    pub adjclose: Vec<AdjCloseSeries>,
}

/// Adjusted close values aligned with the timestamps.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjCloseSeries {
    /// Values, `null` where Yahoo has no price.
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

impl ChartResult {
    /// Pair timestamps with adjusted closes.
    ///
    /// Timestamps are shifted by the exchange offset before taking the
    /// calendar date, so a US session opening at 13:30 UTC maps to its own
    /// trading day.
    #[must_use]
    pub fn points(&self) -> Vec<PricePoint> {
        let closes = self
            .indicators
            .adjclose
            .first()
            .map(|s| s.adjclose.as_slice())
            .unwrap_or_default();

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, ts)| {
                let date = DateTime::from_timestamp(ts + self.meta.gmtoffset, 0)?.date_naive();
                let value = closes.get(i).copied().flatten();
                Some(PricePoint::new(date, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHART_JSON: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"currency": "USD", "symbol": "CRWD", "gmtoffset": -14400},
                "timestamp": [1717421400, 1717507800, 1717594200],
                "indicators": {
                    "quote": [{"close": [300.0, null, 310.0]}],
                    "adjclose": [{"adjclose": [299.5, null, 309.5]}]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_chart_points() {
        let response: ChartResponse = serde_json::from_str(CHART_JSON).unwrap();
        let result = &response.chart.result.unwrap()[0];
        assert_eq!(result.meta.symbol, "CRWD");

        let points = result.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(points[0].value, Some(299.5));
        assert_eq!(points[1].date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
        assert_eq!(points[1].value, None);
        assert_eq!(points[2].value, Some(309.5));
    }

    #[test]
    fn test_chart_without_adjclose() {
        let json = r#"{"chart": {"result": [{
            "meta": {"symbol": "CW"},
            "timestamp": [1717421400],
            "indicators": {"quote": [{}]}
        }], "error": null}}"#;
        let response: ChartResponse = serde_json::from_str(json).unwrap();
        let points = response.chart.result.unwrap()[0].points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, None);
    }

    #[test]
    fn test_chart_error() {
        let json = r#"{"chart": {"result": null, "error": {
            "code": "Not Found",
            "description": "No data found, symbol may be delisted"
        }}}"#;
        let response: ChartResponse = serde_json::from_str(json).unwrap();
        assert!(response.chart.result.is_none());
        assert_eq!(response.chart.error.unwrap().code, "Not Found");
    }

    #[test]
    fn test_adjusted_price() {
        let json = r#"[{"symbol": "PANW", "date": "2024-06-03", "adjOpen": 1.0,
            "adjHigh": 2.0, "adjLow": 0.5, "adjClose": 1.5, "volume": 100}]"#;
        let prices: Vec<AdjustedPrice> = serde_json::from_str(json).unwrap();
        let point = prices[0].to_point().unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(point.value, Some(1.5));
    }
}
