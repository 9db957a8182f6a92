//! Chart rendering for stockplot.
//!
//! Charts are drawn with [`plotters`] onto any drawing backend and written
//! to disk as SVG. A frame with several symbols is either split into one
//! panel per symbol ([`Layout::Subplots`]) or drawn on a single panel
//! ([`Layout::Single`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use stockplot_plot::{Theme, price_chart, render_to_file};
//!
//! let spec = price_chart();
//! render_to_file(&out_dir.join(spec.file_name), &prices, &spec.chart, &Theme::default(), &mut rand::thread_rng())?;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chart;
mod color;
mod theme;

pub use chart::{ChartSpec, Layout, plot_frame, render_to_file};
pub use color::{parse_hex_color, random_color, random_hex_color};
pub use theme::Theme;

/// A chart together with the file it is written to.
#[derive(Debug, Clone)]
pub struct NamedChart {
    /// File name inside the output directory.
    pub file_name: &'static str,
    /// What to draw.
    pub chart: ChartSpec,
}

/// Adjusted closes, one panel per symbol.
#[must_use]
pub fn price_chart() -> NamedChart {
    NamedChart {
        file_name: "price_evolution.svg",
        chart: ChartSpec::new("Stock Price Evolution", "Price", Layout::Subplots),
    }
}

/// Daily returns, one panel per symbol.
#[must_use]
pub fn daily_returns_chart() -> NamedChart {
    NamedChart {
        file_name: "daily_returns.svg",
        chart: ChartSpec::new("Stock Daily Returns", "Daily Return", Layout::Subplots),
    }
}

/// Cumulative returns, all symbols on one chart.
#[must_use]
pub fn cumulative_chart() -> NamedChart {
    NamedChart {
        file_name: "cumulative_returns.svg",
        chart: ChartSpec::new("Cumulative Returns", "Cumulative Return", Layout::Single),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_charts() {
        let charts = [price_chart(), daily_returns_chart(), cumulative_chart()];
        let files: Vec<_> = charts.iter().map(|c| c.file_name).collect();
        assert_eq!(
            files,
            ["price_evolution.svg", "daily_returns.svg", "cumulative_returns.svg"]
        );
        assert_eq!(charts[0].chart.layout, Layout::Subplots);
        assert_eq!(charts[1].chart.y_label, "Daily Return");
        assert_eq!(charts[2].chart.layout, Layout::Single);
    }
}
