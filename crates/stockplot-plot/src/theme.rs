//! Chart styling.

use plotters::style::RGBColor;

/// Colors and fonts shared by every chart.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Figure background.
    pub figure_background: RGBColor,
    /// Plotting area background.
    pub axes_background: RGBColor,
    /// Titles, labels and tick text.
    pub text: RGBColor,
    /// Grid lines.
    pub grid: RGBColor,
    /// Line colors for multi-series charts, cycled.
    pub palette: Vec<RGBColor>,
    /// Font family for all text.
    pub font_family: String,
    /// Panel title size in pixels.
    pub title_size: f64,
    /// Axis description size in pixels.
    pub label_size: f64,
    /// Tick label and legend size in pixels.
    pub tick_size: f64,
}

impl Theme {
    /// Solarized light: cream figure, beige axes, white grid.
    #[must_use]
    pub fn solarized_light() -> Self {
        Self {
            figure_background: RGBColor(0xFD, 0xF6, 0xE3),
            axes_background: RGBColor(0xEE, 0xE8, 0xD5),
            text: RGBColor(0x65, 0x7B, 0x83),
            grid: RGBColor(0xFD, 0xF6, 0xE3),
            palette: vec![
                RGBColor(0x26, 0x8B, 0xD2),
                RGBColor(0x2A, 0xA1, 0x98),
                RGBColor(0x85, 0x99, 0x00),
                RGBColor(0xB5, 0x89, 0x00),
                RGBColor(0xCB, 0x4B, 0x16),
                RGBColor(0xDC, 0x32, 0x2F),
                RGBColor(0xD3, 0x36, 0x82),
                RGBColor(0x6C, 0x71, 0xC4),
            ],
            font_family: "sans-serif".to_string(),
            title_size: 20.0,
            label_size: 15.0,
            tick_size: 12.0,
        }
    }

    /// Line color for the `i`-th series.
    #[must_use]
    pub fn series_color(&self, i: usize) -> RGBColor {
        if self.palette.is_empty() {
            self.text
        } else {
            self.palette[i % self.palette.len()]
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::solarized_light()
    }
}
