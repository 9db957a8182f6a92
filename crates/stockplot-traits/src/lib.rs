#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stockplot/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the stockplot pipeline.
//!
//! Every stage of the pipeline (fetch, transform, plot) speaks in terms of the
//! [`PriceFrame`] defined here, and every market-data client implements
//! [`PriceSource`].

/// The version of the stockplot-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod source;
pub mod types;

// Re-exports
pub use error::{Result, StockplotError};
pub use source::PriceSource;
pub use types::{DATE_COLUMN, Date, DateRange, PriceFrame, PricePoint, Symbol};
