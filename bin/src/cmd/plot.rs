//! Plot command implementation.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};
use stockplot_plot::{Theme, cumulative_chart, daily_returns_chart, price_chart, render_to_file};
use stockplot_returns::{cumulative_returns, daily_returns};
use stockplot_traits::PriceFrame;
use tracing::info;

use super::load_prices;
use crate::config::FetchConfig;

/// Fetch prices and write the price, daily return and cumulative return charts.
///
/// A failed fetch is reported and nothing is rendered.
pub(crate) async fn plot(config: &FetchConfig, out_dir: &Path, seed: Option<u64>) -> Result<()> {
    let prices = match load_prices(config).await {
        Ok(prices) => prices,
        Err(e) => {
            println!("Failed to fetch the data: {e:#}");
            return Ok(());
        }
    };
    println!(
        "Fetched {} trading days for {}",
        prices.len(),
        prices.symbols().join(", ")
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    for path in render_charts(&prices, out_dir, &mut rng)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Derive returns from `prices` and render all three charts into `out_dir`.
pub(crate) fn render_charts<R: Rng + ?Sized>(
    prices: &PriceFrame,
    out_dir: &Path,
    rng: &mut R,
) -> Result<Vec<PathBuf>> {
    let daily = daily_returns(prices)?;
    let cumulative = cumulative_returns(&daily)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let theme = Theme::default();
    let charts = [
        (price_chart(), prices),
        (daily_returns_chart(), &daily),
        (cumulative_chart(), &cumulative),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (named, frame) in charts {
        let path = out_dir.join(named.file_name);
        render_to_file(&path, frame, &named.chart, &theme, rng)
            .with_context(|| format!("Failed to render {}", path.display()))?;
        written.push(path);
    }
    info!(charts = written.len(), dir = %out_dir.display(), "rendering complete");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockplot_data::ProviderKind;
    use stockplot_traits::{Date, DateRange};

    fn prices() -> PriceFrame {
        let dates: Vec<Date> = (3..=7)
            .map(|day| Date::from_ymd_opt(2024, 6, day).unwrap())
            .collect();
        PriceFrame::from_values(
            &dates,
            &[
                ("PANW".to_string(), vec![300.0, 303.0, 299.5, 305.2, 310.0]),
                ("LDOS".to_string(), vec![140.0, 141.5, 142.0, 139.8, 143.3]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_render_charts_writes_three_files() {
        let dir = std::env::temp_dir().join(format!("stockplot-charts-{}", std::process::id()));
        let written = render_charts(&prices(), &dir, &mut StdRng::seed_from_u64(3)).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["price_evolution.svg", "daily_returns.svg", "cumulative_returns.svg"]
        );

        let price_svg = fs::read_to_string(&written[0]).unwrap();
        assert!(price_svg.contains("Stock Price Evolution - PANW"));
        assert!(price_svg.contains("Stock Price Evolution - LDOS"));

        let cumulative_svg = fs::read_to_string(&written[2]).unwrap();
        assert!(cumulative_svg.contains("Cumulative Returns"));
        assert!(cumulative_svg.contains("Date"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_charts_single_trading_day() {
        let dir = std::env::temp_dir().join(format!("stockplot-one-day-{}", std::process::id()));
        let day = Date::from_ymd_opt(2024, 6, 3).unwrap();
        let prices = PriceFrame::from_values(
            &[day],
            &[
                ("CW".to_string(), vec![380.0]),
                ("FTNT".to_string(), vec![59.5]),
            ],
        )
        .unwrap();

        let written = render_charts(&prices, &dir, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.is_file(), "{} missing", path.display());
        }

        let daily_svg = fs::read_to_string(&written[1]).unwrap();
        assert!(daily_svg.contains("Stock Daily Returns - CW"));
        assert!(daily_svg.contains("Stock Daily Returns - FTNT"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_failed_fetch_renders_nothing() {
        if std::env::var_os("FMP_API_KEY").is_some() {
            return;
        }
        let dir = std::env::temp_dir().join(format!("stockplot-no-fetch-{}", std::process::id()));
        let config = FetchConfig {
            tickers: vec!["CRWD".to_string(), "PANW".to_string()],
            range: DateRange::trailing(Date::from_ymd_opt(2024, 6, 1).unwrap(), 30).unwrap(),
            provider: ProviderKind::Fmp,
        };

        assert!(plot(&config, &dir, Some(1)).await.is_ok());
        assert!(!dir.exists());
    }
}
