//! Multi-symbol fetch and table assembly.

use std::{collections::BTreeMap, fmt, str::FromStr};

use futures::future::join_all;
use stockplot_traits::{
    Date, DateRange, PriceFrame, PricePoint, PriceSource, Result, StockplotError, Symbol,
};
use tracing::{debug, info, warn};

use crate::{error::DataError, fmp::FmpClient, yahoo::YahooClient};

/// Which provider to fetch from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Yahoo Finance, keyless.
    #[default]
    Yahoo,
    /// Financial Modeling Prep, needs `FMP_API_KEY`.
    Fmp,
}

impl ProviderKind {
    /// Name accepted on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yahoo => "yahoo",
            Self::Fmp => "fmp",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DataError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yahoo" => Ok(Self::Yahoo),
            "fmp" => Ok(Self::Fmp),
            other => Err(DataError::InvalidData(format!(
                "unknown provider '{other}' (expected yahoo or fmp)"
            ))),
        }
    }
}

/// A configured price provider.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Yahoo Finance client.
    Yahoo(YahooClient),
    /// FMP client.
    Fmp(FmpClient),
}

impl Provider {
    /// Build the client for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built, e.g. FMP without an
    /// API key.
    pub fn connect(kind: ProviderKind) -> crate::Result<Self> {
        match kind {
            ProviderKind::Yahoo => Ok(Self::Yahoo(YahooClient::new()?)),
            ProviderKind::Fmp => Ok(Self::Fmp(FmpClient::from_env()?)),
        }
    }
}

impl PriceSource for Provider {
    fn name(&self) -> &str {
        match self {
            Self::Yahoo(client) => client.name(),
            Self::Fmp(client) => client.name(),
        }
    }

    async fn adjusted_closes(&self, symbol: &str, range: &DateRange) -> Result<Vec<PricePoint>> {
        match self {
            Self::Yahoo(client) => client.adjusted_closes(symbol, range).await,
            Self::Fmp(client) => client.adjusted_closes(symbol, range).await,
        }
    }
}

/// Upper-case and validate a ticker list.
///
/// # Errors
///
/// Returns [`StockplotError::InvalidData`] for an empty list, a blank ticker
/// or a repeated ticker.
pub fn normalize_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<Symbol>> {
    if symbols.is_empty() {
        return Err(StockplotError::InvalidData("no tickers given".to_string()));
    }

    let mut out: Vec<Symbol> = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let symbol = symbol.as_ref().trim().to_uppercase();
        if symbol.is_empty() {
            return Err(StockplotError::InvalidData("blank ticker".to_string()));
        }
        if out.contains(&symbol) {
            return Err(StockplotError::InvalidData(format!("duplicate ticker {symbol}")));
        }
        out.push(symbol);
    }
    Ok(out)
}

/// Fetch adjusted closes for every symbol and assemble a clean table.
///
/// All symbols are requested concurrently. Any failed symbol fails the whole
/// fetch. Series are aligned on date and rows with a missing value in any
/// column are dropped.
///
/// # Errors
///
/// Returns the first provider error, or
/// [`StockplotError::InsufficientData`] if no complete row remains.
pub async fn fetch_price_frame<P, S>(source: &P, symbols: &[S], range: &DateRange) -> Result<PriceFrame>
where
    P: PriceSource,
    S: AsRef<str>,
{
    let symbols = normalize_symbols(symbols)?;
    info!(
        provider = source.name(),
        tickers = %symbols.join(","),
        %range,
        "fetching adjusted closes"
    );

    let results = join_all(symbols.iter().map(|s| source.adjusted_closes(s, range))).await;

    let mut series = Vec::with_capacity(symbols.len());
    for (symbol, result) in symbols.iter().zip(results) {
        let points = result.inspect_err(|e| warn!(%symbol, error = %e, "fetch failed"))?;
        debug!(%symbol, points = points.len(), "fetched");
        series.push(points);
    }

    let frame = align_points(&symbols, &series)?;
    let clean = frame.drop_incomplete_rows()?;
    let dropped = frame.len() - clean.len();
    if dropped > 0 {
        info!(dropped, kept = clean.len(), "dropped rows with missing prices");
    }

    if clean.is_empty() {
        return Err(StockplotError::InsufficientData(format!(
            "no trading day in {range} has prices for every ticker"
        )));
    }
    Ok(clean)
}

/// Outer-join per-symbol points on date, leaving gaps as nulls.
///
/// # Errors
///
/// Returns [`StockplotError::InvalidData`] if `symbols` and `series` differ
/// in length.
pub fn align_points(symbols: &[Symbol], series: &[Vec<PricePoint>]) -> Result<PriceFrame> {
    if symbols.len() != series.len() {
        return Err(StockplotError::InvalidData(format!(
            "{} symbols for {} series",
            symbols.len(),
            series.len()
        )));
    }

    let n = symbols.len();
    let mut rows: BTreeMap<Date, Vec<Option<f64>>> = BTreeMap::new();
    for (i, points) in series.iter().enumerate() {
        for point in points {
            let row = rows.entry(point.date).or_insert_with(|| vec![None; n]);
            row[i] = point.value.filter(|v| v.is_finite());
        }
    }

    let dates: Vec<Date> = rows.keys().copied().collect();
    let columns: Vec<(Symbol, Vec<Option<f64>>)> = symbols
        .iter()
        .enumerate()
        .map(|(i, symbol)| (symbol.clone(), rows.values().map(|row| row[i]).collect()))
        .collect();

    PriceFrame::from_columns(&dates, &columns)
}
