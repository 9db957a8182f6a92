//! The market-data seam.

use std::future::Future;

use crate::{DateRange, PricePoint, Result};

/// A provider of daily adjusted closing prices.
///
/// Implementations return one [`PricePoint`] per trading day inside the
/// requested [`DateRange`], in any order. Days on which the provider has a
/// timestamp but no price are reported with `value: None` so that the caller
/// can drop the whole row, not just the one cell.
///
/// # Example
///
/// ```ignore
/// use stockplot_traits::{DateRange, PriceSource};
///
/// let range = DateRange::trailing(today, 365)?;
/// let points = source.adjusted_closes("MSFT", &range).await?;
/// ```
pub trait PriceSource: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &str;

    /// Fetch adjusted closes for `symbol` over `range`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StockplotError::DataFetch`] if the provider cannot
    /// deliver the series.
    fn adjusted_closes(
        &self,
        symbol: &str,
        range: &DateRange,
    ) -> impl Future<Output = Result<Vec<PricePoint>>> + Send;
}
