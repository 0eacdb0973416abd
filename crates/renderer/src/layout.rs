//! Chart layout constants.

use heatmap_common::{HeatmapError, HeatmapResult};
use serde::{Deserialize, Serialize};

/// Pixel geometry of the chart. All values are fixed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Plot width (the year axis spans `padding..width - padding`)
    pub width: f64,
    /// Plot height (the month axis spans `0..height`)
    pub height: f64,
    pub padding: f64,
    /// Horizontal shift applied to cells and the year axis
    pub plot_offset_x: f64,
    /// Horizontal position of the month axis
    pub y_axis_offset_x: f64,
    /// Legend origin, relative to the canvas
    pub legend_x: f64,
    pub legend_y: f64,
    pub legend_width: f64,
    /// Total legend height; each swatch is `legend_height / palette size` tall
    pub legend_height: f64,
    pub tick_size: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::with_size(1600.0, 550.0)
    }
}

impl ChartLayout {
    /// Default layout for a given plot size.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: 30.0,
            plot_offset_x: 45.0,
            y_axis_offset_x: 75.0,
            legend_x: 100.0,
            legend_y: height + 50.0,
            legend_width: 400.0,
            legend_height: 300.0,
            tick_size: 10.0,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.width + self.padding * 2.0
    }

    pub fn canvas_height(&self) -> f64 {
        self.height + self.padding * 4.0
    }

    /// Horizontal pixel range covered by the year bands.
    pub fn year_range(&self) -> (f64, f64) {
        (self.padding, self.width - self.padding)
    }

    /// Vertical pixel range covered by the month bands.
    pub fn month_range(&self) -> (f64, f64) {
        (0.0, self.height)
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("legend_width", self.legend_width),
            ("legend_height", self.legend_height),
        ];
        for (param, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(param, format!("must be positive, got {}", value)));
            }
        }

        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(invalid("padding", format!("must be non-negative, got {}", self.padding)));
        }

        if self.padding * 2.0 >= self.width {
            return Err(invalid(
                "padding",
                format!("{} leaves no room in a plot {} wide", self.padding, self.width),
            ));
        }

        Ok(())
    }
}

fn invalid(param: &str, message: String) -> HeatmapError {
    HeatmapError::InvalidLayout {
        param: param.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = ChartLayout::default();
        layout.validate().unwrap();
        assert_eq!(layout.canvas_width(), 1660.0);
        assert_eq!(layout.canvas_height(), 670.0);
        assert_eq!(layout.year_range(), (30.0, 1570.0));
        assert_eq!(layout.month_range(), (0.0, 550.0));
        assert_eq!(layout.legend_y, 600.0);
    }

    #[test]
    fn test_invalid_layout() {
        let mut layout = ChartLayout::default();
        layout.width = 0.0;
        assert!(matches!(
            layout.validate(),
            Err(HeatmapError::InvalidLayout { ref param, .. }) if param == "width"
        ));

        let mut layout = ChartLayout::with_size(50.0, 100.0);
        layout.padding = 30.0;
        assert!(layout.validate().is_err());

        let mut layout = ChartLayout::default();
        layout.legend_height = f64::NAN;
        assert!(layout.validate().is_err());
    }
}
