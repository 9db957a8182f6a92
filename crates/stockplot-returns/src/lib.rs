//! Return calculations for stockplot.
//!
//! This crate turns a table of adjusted closes into:
//! - daily returns (fractional change from one trading day to the next)
//! - cumulative returns (compounded growth of 1 unit)
//! - per-symbol summary statistics
//!
//! # Example
//!
//! ```rust,ignore
//! use stockplot_returns::{cumulative_returns, daily_returns, summarize, SummaryConfig};
//!
//! let daily = daily_returns(&prices)?;
//! let cumulative = cumulative_returns(&daily)?;
//! let stats = summarize(&daily, &SummaryConfig::default())?;
//! ```

pub mod cumulative;
pub mod daily;
pub mod summary;

// Re-export main types
pub use cumulative::{cum_prod, cumulative_returns};
pub use daily::{daily_returns, pct_change};
pub use summary::{ReturnSummary, SummaryConfig, summarize};
