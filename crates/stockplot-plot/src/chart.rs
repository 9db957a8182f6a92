//! Line charts of a [`PriceFrame`].

use std::path::Path;

use plotters::{coord::Shift, prelude::*};
use rand::Rng;
use stockplot_traits::{Date, PriceFrame, Result, StockplotError};
use tracing::{debug, info};

use crate::{color::random_color, theme::Theme};

/// Figure width of a subplot stack, one panel per symbol.
const SUBPLOT_WIDTH: u32 = 1600;
/// Height of one panel in a subplot stack.
const SUBPLOT_PANEL_HEIGHT: u32 = 400;
/// Figure size of a single chart.
const SINGLE_SIZE: (u32, u32) = (1200, 800);
/// Y-axis span of a panel with nothing finite to draw.
const EMPTY_EXTENT: (f64, f64) = (-1.0, 1.0);

/// How the symbols of a frame are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One panel per symbol, stacked vertically.
    Subplots,
    /// Every symbol on one panel.
    Single,
}

/// What to draw.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Chart title; subplot panels append ` - {symbol}`.
    pub title: String,
    /// Y-axis description.
    pub y_label: String,
    /// Requested layout.
    pub layout: Layout,
}

impl ChartSpec {
    /// Create a new spec.
    pub fn new(title: impl Into<String>, y_label: impl Into<String>, layout: Layout) -> Self {
        Self {
            title: title.into(),
            y_label: y_label.into(),
            layout,
        }
    }

    /// Layout actually used for `n_symbols` series. A single series is never
    /// split into subplots.
    #[must_use]
    pub fn effective_layout(&self, n_symbols: usize) -> Layout {
        if n_symbols == 1 {
            Layout::Single
        } else {
            self.layout
        }
    }

    /// Figure size in pixels for `n_symbols` series.
    #[must_use]
    pub fn figure_size(&self, n_symbols: usize) -> (u32, u32) {
        match self.effective_layout(n_symbols) {
            Layout::Subplots => {
                let panels = u32::try_from(n_symbols.max(1)).unwrap_or(u32::MAX);
                (SUBPLOT_WIDTH, SUBPLOT_PANEL_HEIGHT.saturating_mul(panels))
            }
            Layout::Single => SINGLE_SIZE,
        }
    }
}

/// One line on a panel.
struct Line<'a> {
    label: &'a str,
    values: Vec<f64>,
    color: RGBColor,
}

fn render_err<E: std::fmt::Display>(err: E) -> StockplotError {
    StockplotError::Render(err.to_string())
}

/// Draw `frame` onto `root` according to `spec`.
///
/// Subplot panels each get a random color from `rng`; a single chart cycles
/// through the theme palette.
///
/// # Errors
///
/// Returns [`StockplotError::InsufficientData`] for a frame without rows or
/// symbols, and [`StockplotError::Render`] if the backend fails. Series with
/// no finite values still get a panel, drawn on a unit axis.
pub fn plot_frame<DB, R>(
    root: &DrawingArea<DB, Shift>,
    frame: &PriceFrame,
    spec: &ChartSpec,
    theme: &Theme,
    rng: &mut R,
) -> Result<()>
where
    DB: DrawingBackend,
    R: Rng + ?Sized,
{
    let symbols = frame.symbols();
    if symbols.is_empty() || frame.is_empty() {
        return Err(StockplotError::InsufficientData(format!(
            "nothing to plot for '{}'",
            spec.title
        )));
    }
    let dates = frame.dates()?;

    root.fill(&theme.figure_background).map_err(render_err)?;

    match spec.effective_layout(symbols.len()) {
        Layout::Subplots => {
            let panels = root.split_evenly((symbols.len(), 1));
            for (area, symbol) in panels.iter().zip(&symbols) {
                let line = Line {
                    label: symbol,
                    values: frame.series(symbol)?,
                    color: random_color(rng),
                };
                let title = format!("{} - {}", spec.title, symbol);
                draw_panel(area, &title, None, &spec.y_label, &[line], &dates, theme)?;
            }
        }
        Layout::Single => {
            let lines = symbols
                .iter()
                .enumerate()
                .map(|(i, symbol)| {
                    Ok(Line {
                        label: symbol,
                        values: frame.series(symbol)?,
                        color: theme.series_color(i),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            draw_panel(root, &spec.title, Some("Date"), &spec.y_label, &lines, &dates, theme)?;
        }
    }

    root.present().map_err(render_err)?;
    Ok(())
}

/// Render `frame` to an SVG file sized by [`ChartSpec::figure_size`].
///
/// # Errors
///
/// Same conditions as [`plot_frame`], plus failures writing `path`.
pub fn render_to_file<R: Rng + ?Sized>(
    path: &Path,
    frame: &PriceFrame,
    spec: &ChartSpec,
    theme: &Theme,
    rng: &mut R,
) -> Result<()> {
    let size = spec.figure_size(frame.symbols().len());
    let root = SVGBackend::new(path, size).into_drawing_area();
    plot_frame(&root, frame, spec, theme, rng)?;
    info!(path = %path.display(), title = %spec.title, "chart written");
    Ok(())
}

/// Padded min/max of the finite values, or `None` if there are none.
fn value_extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return None;
    }

    if min == max {
        // widen flat series so the axis has a span
        let adjust = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        return Some((min - adjust, max + adjust));
    }

    let pad = (max - min) * 0.05;
    Some((min - pad, max + pad))
}

/// X-axis span. A lone date is widened by a day on each side.
fn date_extent(dates: &[Date]) -> Option<(Date, Date)> {
    let first = *dates.first()?;
    let last = *dates.last()?;
    if first < last {
        Some((first, last))
    } else {
        Some((first.pred_opt()?, last.succ_opt()?))
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_label: Option<&str>,
    y_label: &str,
    lines: &[Line<'_>],
    dates: &[Date],
    theme: &Theme,
) -> Result<()> {
    let (x_start, x_end) = date_extent(dates)
        .ok_or_else(|| StockplotError::InsufficientData(format!("no dates for '{title}'")))?;
    let (y_min, y_max) = value_extent(lines.iter().flat_map(|l| l.values.iter().copied()))
        .unwrap_or(EMPTY_EXTENT);
    debug!(title, points = dates.len(), y_min, y_max, "drawing panel");

    let font = theme.font_family.as_str();
    let mut chart = ChartBuilder::on(area)
        .caption(title, (font, theme.title_size).into_font().color(&theme.text))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_start..x_end, y_min..y_max)
        .map_err(render_err)?;

    chart
        .plotting_area()
        .fill(&theme.axes_background)
        .map_err(render_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(8)
        .y_labels(8)
        .bold_line_style(theme.grid.stroke_width(1))
        .light_line_style(theme.axes_background.stroke_width(1))
        .axis_style(theme.text.stroke_width(1))
        .label_style((font, theme.tick_size).into_font().color(&theme.text))
        .axis_desc_style((font, theme.label_size).into_font().color(&theme.text))
        .y_desc(y_label);
    if let Some(x_label) = x_label {
        mesh.x_desc(x_label);
    }
    mesh.draw().map_err(render_err)?;

    for line in lines {
        let color = line.color;
        let points = dates
            .iter()
            .zip(&line.values)
            .filter(|(_, v)| v.is_finite())
            .map(|(d, v)| (*d, *v));

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(render_err)?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(theme.figure_background.mix(0.8).filled())
        .border_style(theme.text.stroke_width(1))
        .label_font((font, theme.tick_size).into_font().color(&theme.text))
        .draw()
        .map_err(render_err)?;

    Ok(())
}
