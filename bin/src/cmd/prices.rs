//! Prices command implementation.

use anyhow::Result;
use stockplot_traits::PriceFrame;

use super::load_prices;
use crate::config::FetchConfig;

/// Print the cleaned adjusted-close table.
pub(crate) async fn show_prices(config: &FetchConfig) -> Result<()> {
    let prices = load_prices(config).await?;

    println!("Adjusted closes, {} ({})", config.range, config.provider);
    println!();
    print!("{}", format_table(&prices)?);
    println!();
    println!(
        "{} trading days x {} tickers",
        prices.len(),
        prices.symbols().len()
    );
    Ok(())
}

/// Render every row of `prices` as an aligned text table.
pub(crate) fn format_table(prices: &PriceFrame) -> Result<String> {
    let symbols = prices.symbols();
    let columns = symbols
        .iter()
        .map(|s| prices.series(s))
        .collect::<stockplot_traits::Result<Vec<_>>>()?;

    let mut out = format!("{:<10}", "Date");
    for symbol in &symbols {
        out.push_str(&format!(" {:>10}", symbol));
    }
    out.push('\n');
    out.push_str(&"─".repeat(10 + 11 * symbols.len()));
    out.push('\n');

    for (row, date) in prices.dates()?.iter().enumerate() {
        out.push_str(&format!("{:<10}", date.to_string()));
        for values in &columns {
            match values.get(row).copied().filter(|v| v.is_finite()) {
                Some(v) => out.push_str(&format!(" {:>10.2}", v)),
                None => out.push_str(&format!(" {:>10}", "-")),
            }
        }
        out.push('\n');
    }
    Ok(out)
}
