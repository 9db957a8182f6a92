//! Per-symbol return statistics.
//!
//! Summaries are computed from daily returns. Non-finite values (the NaN
//! first row, gaps) are ignored.

use serde::{Deserialize, Serialize};
use stockplot_traits::{PriceFrame, Result, Symbol};

/// Configuration for summary calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Minimum number of returns required for volatility figures
    pub min_observations: usize,
    /// Number of trading days per year for annualization
    pub trading_days_per_year: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_observations: 2,
            trading_days_per_year: 252,
        }
    }
}

/// Return statistics for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnSummary {
    /// Ticker symbol
    pub symbol: Symbol,
    /// Number of finite daily returns
    pub n_obs: usize,
    /// Compounded return over the whole window
    pub total_return: f64,
    /// Arithmetic mean daily return
    pub mean_daily: f64,
    /// Sample standard deviation of daily returns
    pub daily_volatility: f64,
    /// Daily volatility scaled by the square root of trading days per year
    pub annualized_volatility: f64,
    /// Largest daily gain
    pub best_day: f64,
    /// Largest daily loss
    pub worst_day: f64,
}

impl ReturnSummary {
    /// Calculate statistics from a daily return series.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stockplot_returns::{ReturnSummary, SummaryConfig};
    ///
    /// let daily = vec![f64::NAN, 0.01, -0.02, 0.015];
    /// let s = ReturnSummary::calculate("MSFT", &daily, &SummaryConfig::default());
    /// assert_eq!(s.n_obs, 3);
    /// ```
    pub fn calculate(symbol: &str, daily: &[f64], config: &SummaryConfig) -> Self {
        let valid: Vec<f64> = daily.iter().copied().filter(|x| x.is_finite()).collect();
        let n_obs = valid.len();

        if n_obs == 0 {
            return Self {
                symbol: symbol.to_string(),
                n_obs,
                total_return: f64::NAN,
                mean_daily: f64::NAN,
                daily_volatility: f64::NAN,
                annualized_volatility: f64::NAN,
                best_day: f64::NAN,
                worst_day: f64::NAN,
            };
        }

        let total_return = valid.iter().fold(1.0, |acc, r| acc * (1.0 + r)) - 1.0;
        let mean_daily = valid.iter().sum::<f64>() / n_obs as f64;

        let daily_volatility = if n_obs >= config.min_observations.max(2) {
            let variance = valid
                .iter()
                .map(|r| (r - mean_daily).powi(2))
                .sum::<f64>()
                / (n_obs - 1) as f64;
            variance.sqrt()
        } else {
            f64::NAN
        };
        let annualized_volatility = daily_volatility * (config.trading_days_per_year as f64).sqrt();

        let best_day = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst_day = valid.iter().copied().fold(f64::INFINITY, f64::min);

        Self {
            symbol: symbol.to_string(),
            n_obs,
            total_return,
            mean_daily,
            daily_volatility,
            annualized_volatility,
            best_day,
            worst_day,
        }
    }
}

/// Summaries for every symbol of a daily return table, in column order.
///
/// # Errors
///
/// Returns an error if a column cannot be read.
pub fn summarize(daily: &PriceFrame, config: &SummaryConfig) -> Result<Vec<ReturnSummary>> {
    daily
        .symbols()
        .iter()
        .map(|symbol| {
            let values = daily.series(symbol)?;
            Ok(ReturnSummary::calculate(symbol, &values, config))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stockplot_traits::Date;

    #[test]
    fn test_summary_values() {
        let daily = vec![f64::NAN, 0.10, -0.10, 0.05];
        let s = ReturnSummary::calculate("CRWD", &daily, &SummaryConfig::default());

        assert_eq!(s.symbol, "CRWD");
        assert_eq!(s.n_obs, 3);
        assert_relative_eq!(s.total_return, 1.1 * 0.9 * 1.05 - 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.mean_daily, 0.05 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(s.best_day, 0.10);
        assert_relative_eq!(s.worst_day, -0.10);

        let mean = 0.05 / 3.0;
        let var = ((0.10_f64 - mean).powi(2) + (-0.10_f64 - mean).powi(2) + (0.05_f64 - mean).powi(2))
            / 2.0;
        assert_relative_eq!(s.daily_volatility, var.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(
            s.annualized_volatility,
            var.sqrt() * 252.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_summary_empty() {
        let s = ReturnSummary::calculate("CW", &[f64::NAN], &SummaryConfig::default());
        assert_eq!(s.n_obs, 0);
        assert!(s.total_return.is_nan());
        assert!(s.daily_volatility.is_nan());
    }

    #[test]
    fn test_summary_single_observation() {
        let s = ReturnSummary::calculate("CW", &[f64::NAN, 0.03], &SummaryConfig::default());
        assert_eq!(s.n_obs, 1);
        assert_relative_eq!(s.total_return, 0.03, epsilon = 1e-12);
        assert!(s.daily_volatility.is_nan());
    }

    #[test]
    fn test_summary_config_default() {
        let config = SummaryConfig::default();
        assert_eq!(config.trading_days_per_year, 252);
        assert_eq!(config.min_observations, 2);
    }

    #[test]
    fn test_summarize_frame() {
        let dates: Vec<Date> = (2..=4)
            .map(|day| Date::from_ymd_opt(2024, 1, day).unwrap())
            .collect();
        let daily = PriceFrame::from_values(
            &dates,
            &[
                ("FTNT".to_string(), vec![f64::NAN, 0.01, 0.02]),
                ("PANW".to_string(), vec![f64::NAN, -0.01, 0.0]),
            ],
        )
        .unwrap();

        let summaries = summarize(&daily, &SummaryConfig::default()).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].symbol, "FTNT");
        assert_eq!(summaries[1].symbol, "PANW");
        assert_relative_eq!(summaries[0].total_return, 1.01 * 1.02 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_serializes() {
        let s = ReturnSummary::calculate("LDOS", &[0.01, 0.02], &SummaryConfig::default());
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"symbol\":\"LDOS\""));
    }
}
