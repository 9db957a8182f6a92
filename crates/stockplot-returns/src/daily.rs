//! Daily percentage change.

use stockplot_traits::{PriceFrame, Result};

/// Fractional change between consecutive values.
///
/// The first element has no predecessor and is NaN. A NaN on either side of
/// a step makes that step NaN.
///
/// ```
/// use stockplot_returns::pct_change;
///
/// let r = pct_change(&[100.0, 110.0, 99.0]);
/// assert!(r[0].is_nan());
/// assert!((r[1] - 0.10).abs() < 1e-12);
/// assert!((r[2] + 0.10).abs() < 1e-12);
/// ```
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }
    out.push(f64::NAN);
    out.extend(values.windows(2).map(|w| w[1] / w[0] - 1.0));
    out
}

/// Daily returns for every symbol of a price table.
///
/// The result has the same dates and symbols as `prices`; its first row is
/// NaN for every symbol.
///
/// # Errors
///
/// Returns an error if the frame cannot be read or rebuilt.
pub fn daily_returns(prices: &PriceFrame) -> Result<PriceFrame> {
    prices.map_series(pct_change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stockplot_traits::Date;

    #[test]
    fn test_pct_change() {
        let r = pct_change(&[50.0, 55.0, 44.0, 44.0]);
        assert_eq!(r.len(), 4);
        assert!(r[0].is_nan());
        assert_relative_eq!(r[1], 0.1, epsilon = 1e-12);
        assert_relative_eq!(r[2], -0.2, epsilon = 1e-12);
        assert_relative_eq!(r[3], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pct_change_edges() {
        assert!(pct_change(&[]).is_empty());

        let single = pct_change(&[10.0]);
        assert_eq!(single.len(), 1);
        assert!(single[0].is_nan());

        let gap = pct_change(&[10.0, f64::NAN, 12.0]);
        assert!(gap[1].is_nan());
        assert!(gap[2].is_nan());
    }

    #[test]
    fn test_daily_returns_frame() {
        let dates: Vec<Date> = (2..=4)
            .map(|day| Date::from_ymd_opt(2024, 1, day).unwrap())
            .collect();
        let prices = PriceFrame::from_values(
            &dates,
            &[
                ("MSFT".to_string(), vec![100.0, 102.0, 99.96]),
                ("AMZN".to_string(), vec![150.0, 147.0, 147.0]),
            ],
        )
        .unwrap();

        let daily = daily_returns(&prices).unwrap();
        assert_eq!(daily.symbols(), prices.symbols());
        assert_eq!(daily.dates().unwrap(), dates);

        let msft = daily.series("MSFT").unwrap();
        assert!(msft[0].is_nan());
        assert_relative_eq!(msft[1], 0.02, epsilon = 1e-12);
        assert_relative_eq!(msft[2], -0.02, epsilon = 1e-12);

        let amzn = daily.series("AMZN").unwrap();
        assert_relative_eq!(amzn[1], -0.02, epsilon = 1e-12);
        assert_relative_eq!(amzn[2], 0.0, epsilon = 1e-12);
    }
}
