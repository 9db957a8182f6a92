//! CLI subcommand modules.
//!
//! This module contains the implementations for all stockplot CLI subcommands.

pub(crate) mod plot;
pub(crate) mod prices;
pub(crate) mod summary;

use anyhow::{Context, Result};
use stockplot_data::{Provider, fetch_price_frame};
use stockplot_traits::PriceFrame;

use crate::config::FetchConfig;

/// Fetch the cleaned price table described by `config`.
pub(crate) async fn load_prices(config: &FetchConfig) -> Result<PriceFrame> {
    let provider = Provider::connect(config.provider)
        .with_context(|| format!("Failed to set up the {} provider", config.provider))?;
    let prices = fetch_price_frame(&provider, &config.tickers, &config.range).await?;
    Ok(prices)
}
