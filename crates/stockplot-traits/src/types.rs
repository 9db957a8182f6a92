//! Common types used throughout the stockplot pipeline.
//!
//! This module defines the date window a fetch covers, the single observation
//! a provider returns, and the wide table the rest of the pipeline works on.

use std::fmt;

use chrono::Days;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Result, StockplotError};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, such as "MSFT".
pub type Symbol = String;

/// Name of the date column in every [`PriceFrame`].
pub const DATE_COLUMN: &str = "date";

/// Days between 0001-01-01 and the Unix epoch, used to decode polars dates.
const UNIX_EPOCH_FROM_CE: i32 = 719_163;

/// A half-open calendar window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a new range.
    ///
    /// # Errors
    ///
    /// Returns [`StockplotError::InvalidDate`] unless `start < end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start >= end {
            return Err(StockplotError::InvalidDate(format!(
                "range start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The window of `days` calendar days ending at `end`.
    ///
    /// # Errors
    ///
    /// Returns [`StockplotError::InvalidDate`] if `days` is zero or the start
    /// date underflows the calendar.
    pub fn trailing(end: Date, days: u32) -> Result<Self> {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| {
                StockplotError::InvalidDate(format!("{days} days before {end} is out of range"))
            })?;
        Self::new(start, end)
    }

    /// First day of the window (inclusive).
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Day after the window (exclusive).
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }

    /// Number of calendar days covered.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One adjusted close of one symbol on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date.
    pub date: Date,
    /// Adjusted close, `None` when the provider had no price for the day.
    pub value: Option<f64>,
}

impl PricePoint {
    /// Create a new point.
    pub const fn new(date: Date, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

/// Wide date-by-symbol table of values.
///
/// `PriceFrame` wraps a Polars DataFrame with a `date` column followed by one
/// `Float64` column per symbol, in the order the symbols were supplied. Rows
/// are sorted by date. The same shape carries prices, daily returns and
/// cumulative returns.
///
/// # Example
///
/// ```no_run
/// use stockplot_traits::{Date, PriceFrame};
///
/// let dates = vec![
///     Date::from_ymd_opt(2024, 1, 2).unwrap(),
///     Date::from_ymd_opt(2024, 1, 3).unwrap(),
/// ];
/// let frame = PriceFrame::from_values(
///     &dates,
///     &[("MSFT".to_string(), vec![370.0, 372.5])],
/// ).unwrap();
/// assert_eq!(frame.symbols(), vec!["MSFT".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct PriceFrame {
    data: DataFrame,
}

impl PriceFrame {
    /// Build a frame from dates and nullable per-symbol values.
    ///
    /// # Errors
    ///
    /// Returns [`StockplotError::InvalidData`] if a column length differs from
    /// the number of dates, a symbol repeats, or a symbol collides with the
    /// date column.
    pub fn from_columns(dates: &[Date], columns: &[(Symbol, Vec<Option<f64>>)]) -> Result<Self> {
        check_shape(dates.len(), columns.iter().map(|(s, v)| (s, v.len())))?;

        let mut cols = Vec::with_capacity(columns.len() + 1);
        cols.push(Column::new(DATE_COLUMN.into(), dates));
        for (symbol, values) in columns {
            cols.push(Column::new(symbol.as_str().into(), values.as_slice()));
        }

        Self::from_dataframe(DataFrame::new(cols)?)
    }

    /// Build a frame from dates and dense per-symbol values.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PriceFrame::from_columns`].
    pub fn from_values(dates: &[Date], columns: &[(Symbol, Vec<f64>)]) -> Result<Self> {
        check_shape(dates.len(), columns.iter().map(|(s, v)| (s, v.len())))?;

        let mut cols = Vec::with_capacity(columns.len() + 1);
        cols.push(Column::new(DATE_COLUMN.into(), dates));
        for (symbol, values) in columns {
            cols.push(Column::new(symbol.as_str().into(), values.as_slice()));
        }

        Self::from_dataframe(DataFrame::new(cols)?)
    }

    /// Wrap an existing DataFrame, sorting it by date.
    ///
    /// # Errors
    ///
    /// Returns [`StockplotError::MissingColumn`] if there is no `date` column.
    pub fn from_dataframe(data: DataFrame) -> Result<Self> {
        if !data
            .get_column_names()
            .iter()
            .any(|s| s.as_str() == DATE_COLUMN)
        {
            return Err(StockplotError::MissingColumn(DATE_COLUMN.to_string()));
        }
        let data = data.sort([DATE_COLUMN], Default::default())?;
        Ok(Self { data })
    }

    /// Drop every row in which any symbol has a missing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying filter fails.
    pub fn drop_incomplete_rows(&self) -> Result<Self> {
        let mut mask = BooleanChunked::full("complete".into(), true, self.data.height());
        for column in self.data.get_columns() {
            mask = &mask & &column.as_materialized_series().is_not_null();
        }
        let data = self.data.filter(&mask)?;
        Ok(Self { data })
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consumes self and returns the underlying DataFrame.
    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    /// Number of rows (trading days).
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Whether the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// Symbols in column order.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.data
            .get_column_names()
            .iter()
            .filter(|s| s.as_str() != DATE_COLUMN)
            .map(|s| s.to_string())
            .collect()
    }

    /// Whether `symbol` has a column.
    pub fn has_symbol(&self, symbol: &str) -> bool {
        symbol != DATE_COLUMN
            && self
                .data
                .get_column_names()
                .iter()
                .any(|s| s.as_str() == symbol)
    }

    /// Row dates in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the date column is missing or not a date type.
    pub fn dates(&self) -> Result<Vec<Date>> {
        let column = self
            .data
            .column(DATE_COLUMN)
            .map_err(|_| StockplotError::MissingColumn(DATE_COLUMN.to_string()))?;

        column
            .as_materialized_series()
            .date()?
            .into_iter()
            .map(|d: Option<i32>| {
                d.and_then(|days| Date::from_num_days_from_ce_opt(days + UNIX_EPOCH_FROM_CE))
                    .ok_or_else(|| StockplotError::InvalidDate("null or out-of-range date".into()))
            })
            .collect()
    }

    /// Values of one symbol, nulls read back as NaN.
    ///
    /// # Errors
    ///
    /// Returns [`StockplotError::SymbolNotFound`] if the symbol has no column.
    pub fn series(&self, symbol: &str) -> Result<Vec<f64>> {
        if !self.has_symbol(symbol) {
            return Err(StockplotError::SymbolNotFound(symbol.to_string()));
        }
        let column = self.data.column(symbol)?;
        Ok(column
            .as_materialized_series()
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    /// Build a frame with the same dates and new values per symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the dates cannot be read or the shapes disagree.
    pub fn map_series<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(&[f64]) -> Vec<f64>,
    {
        let dates = self.dates()?;
        let columns = self
            .symbols()
            .into_iter()
            .map(|symbol| {
                let values = f(&self.series(&symbol)?);
                Ok((symbol, values))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_values(&dates, &columns)
    }
}

impl fmt::Display for PriceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

impl AsRef<DataFrame> for PriceFrame {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}

fn check_shape<'a>(
    n_dates: usize,
    columns: impl Iterator<Item = (&'a Symbol, usize)>,
) -> Result<()> {
    let mut seen: Vec<&str> = Vec::new();
    for (symbol, len) in columns {
        if symbol == DATE_COLUMN {
            return Err(StockplotError::InvalidData(format!(
                "symbol may not be named '{DATE_COLUMN}'"
            )));
        }
        if seen.contains(&symbol.as_str()) {
            return Err(StockplotError::InvalidData(format!(
                "duplicate symbol {symbol}"
            )));
        }
        if len != n_dates {
            return Err(StockplotError::InvalidData(format!(
                "{symbol} has {len} values for {n_dates} dates"
            )));
        }
        seen.push(symbol.as_str());
    }
    Ok(())
}
