//! Compounded returns.

use stockplot_traits::{PriceFrame, Result};

/// Running product of `1 + r`.
///
/// NaN returns are skipped: the product carries over them unchanged and the
/// output at that position is NaN, except before the first finite return
/// where the output is the base value 1.0.
pub fn cum_prod(returns: &[f64]) -> Vec<f64> {
    let mut growth = 1.0;
    let mut started = false;

    returns
        .iter()
        .map(|&r| {
            if r.is_nan() {
                if started { f64::NAN } else { 1.0 }
            } else {
                started = true;
                growth *= 1.0 + r;
                growth
            }
        })
        .collect()
}

/// Cumulative returns, indexed to 1, from a table of daily returns.
///
/// # Errors
///
/// Returns an error if the frame cannot be read or rebuilt.
pub fn cumulative_returns(daily: &PriceFrame) -> Result<PriceFrame> {
    daily.map_series(cum_prod)
}
