//! Summary command implementation.

use anyhow::Result;
use stockplot_returns::{ReturnSummary, SummaryConfig, daily_returns, summarize};

use super::load_prices;
use crate::config::{FetchConfig, OutputFormat};

/// Print per-ticker return statistics over the window.
pub(crate) async fn show_summary(config: &FetchConfig, format: OutputFormat) -> Result<()> {
    let prices = load_prices(config).await?;
    let daily = daily_returns(&prices)?;
    let summaries = summarize(&daily, &SummaryConfig::default())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => {
            println!("Return summary, {} ({})", config.range, config.provider);
            println!();
            print!("{}", format_table(&summaries));
        }
    }
    Ok(())
}

fn pct(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}%", value * 100.0)
    } else {
        "-".to_string()
    }
}

/// Render summaries as an aligned text table.
pub(crate) fn format_table(summaries: &[ReturnSummary]) -> String {
    let mut out = format!(
        "{:<8} {:>5} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
        "Ticker", "Days", "Total", "Mean", "Daily Vol", "Ann. Vol", "Best", "Worst"
    );
    out.push_str(&"─".repeat(80));
    out.push('\n');

    for s in summaries {
        out.push_str(&format!(
            "{:<8} {:>5} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
            s.symbol,
            s.n_obs,
            pct(s.total_return),
            pct(s.mean_daily),
            pct(s.daily_volatility),
            pct(s.annualized_volatility),
            pct(s.best_day),
            pct(s.worst_day),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table() {
        let config = SummaryConfig::default();
        let summaries = vec![
            ReturnSummary::calculate("CRWD", &[f64::NAN, 0.10, -0.05], &config),
            ReturnSummary::calculate("CW", &[f64::NAN], &config),
        ];

        let table = format_table(&summaries);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Ticker"));
        assert!(lines[2].starts_with("CRWD"));
        assert!(lines[2].contains("4.50%"));
        assert!(lines[2].contains("10.00%"));
        assert!(lines[2].contains("-5.00%"));
        assert!(lines[3].starts_with("CW"));
        assert!(lines[3].contains(" - "));
    }

    #[test]
    fn test_pct() {
        assert_eq!(pct(0.0123), "1.23%");
        assert_eq!(pct(f64::NAN), "-");
    }
}
