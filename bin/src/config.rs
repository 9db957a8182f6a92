//! Command-line configuration shared by the subcommands.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use stockplot_data::ProviderKind;
use stockplot_traits::{DateRange, Result, StockplotError, Symbol};

/// Tickers plotted when none are given.
pub(crate) const DEFAULT_TICKERS: [&str; 6] = ["CRWD", "LDOS", "CW", "PLTR", "PANW", "FTNT"];

/// Length of the trailing window in calendar days.
pub(crate) const DEFAULT_DAYS: u32 = 365;

/// Which prices to fetch.
#[derive(Debug, Clone, Args)]
pub(crate) struct FetchArgs {
    /// Ticker symbols, comma separated
    #[arg(short, long, value_delimiter = ',', default_values = DEFAULT_TICKERS)]
    pub(crate) tickers: Vec<String>,

    /// Length of the window in calendar days
    #[arg(short, long, default_value_t = DEFAULT_DAYS)]
    pub(crate) days: u32,

    /// Last day of the window, exclusive (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) end: Option<NaiveDate>,

    /// Market-data provider
    #[arg(short, long, default_value_t = ProviderKind::Yahoo)]
    pub(crate) provider: ProviderKind,
}

/// Output format for tabular commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned text table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Resolved fetch parameters.
#[derive(Debug, Clone)]
pub(crate) struct FetchConfig {
    pub(crate) tickers: Vec<Symbol>,
    pub(crate) range: DateRange,
    pub(crate) provider: ProviderKind,
}

impl FetchConfig {
    /// Resolve `args`, with `today` as the end of the window when none is given.
    pub(crate) fn from_args(args: &FetchArgs, today: NaiveDate) -> Result<Self> {
        let range = DateRange::trailing(args.end.unwrap_or(today), args.days)?;
        Ok(Self {
            tickers: args.tickers.clone(),
            range,
            provider: args.provider,
        })
    }
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| StockplotError::InvalidDate(format!("Invalid date format: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        fetch: FetchArgs,
    }

    fn parse(args: &[&str]) -> FetchArgs {
        TestCli::try_parse_from(std::iter::once("stockplot").chain(args.iter().copied()))
            .unwrap()
            .fetch
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_invalid() {
        let result = parse_date("invalid");
        assert!(matches!(result, Err(StockplotError::InvalidDate(_))));
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.tickers, DEFAULT_TICKERS);
        assert_eq!(args.days, 365);
        assert_eq!(args.end, None);
        assert_eq!(args.provider, ProviderKind::Yahoo);
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "--tickers",
            "msft,amzn",
            "--days",
            "30",
            "--end",
            "2024-07-01",
            "--provider",
            "fmp",
        ]);
        assert_eq!(args.tickers, ["msft", "amzn"]);
        assert_eq!(args.days, 30);
        assert_eq!(args.end, NaiveDate::from_ymd_opt(2024, 7, 1));
        assert_eq!(args.provider, ProviderKind::Fmp);
    }

    #[test]
    fn test_bad_end_date_rejected() {
        let result = TestCli::try_parse_from(["stockplot", "--end", "07/01/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_args() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let config = FetchConfig::from_args(&parse(&[]), today).unwrap();
        assert_eq!(config.range.end(), today);
        assert_eq!(config.range.start(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(config.tickers.len(), 6);

        let config = FetchConfig::from_args(&parse(&["--end", "2024-03-01"]), today).unwrap();
        assert_eq!(config.range.end(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_zero_days_rejected() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(FetchConfig::from_args(&parse(&["--days", "0"]), today).is_err());
    }
}
