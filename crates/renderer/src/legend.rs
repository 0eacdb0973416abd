//! Color legend: one swatch per palette entry above a breakpoint axis.

use heatmap_common::{Color, TemperatureRange};
use serde::Serialize;

use crate::axis::{legend_axis, Axis, AxisTitle};
use crate::layout::ChartLayout;
use crate::scale::{LinearScale, ThresholdScale};

/// One colored block of the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    /// Temperatures covered by this swatch
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub translate: (f64, f64),
    pub scale: LinearScale,
    pub swatches: Vec<LegendSwatch>,
    pub axis: Axis,
    pub title: AxisTitle,
}

/// Lay out the legend for a threshold scale over `range`.
///
/// Without breakpoints (degenerate or unsplittable range) the swatches are
/// spread evenly instead of following the value scale.
pub fn build_legend(
    threshold: &ThresholdScale<Color>,
    range: TemperatureRange,
    layout: &ChartLayout,
) -> Legend {
    let colors = threshold.outputs();
    let breakpoints = threshold.breakpoints();
    let count = colors.len().max(1) as f64;

    let scale = LinearScale::new((range.min, range.max), (0.0, layout.legend_width));
    let swatch_width = layout.legend_width / count;
    let swatch_height = layout.legend_height / count;

    let swatches = colors
        .iter()
        .enumerate()
        .map(|(k, color)| {
            let lower = if k == 0 {
                range.min
            } else {
                breakpoints.get(k - 1).copied().unwrap_or(range.max)
            };
            let upper = breakpoints.get(k).copied().unwrap_or(range.max);
            let x = if breakpoints.is_empty() {
                k as f64 * swatch_width
            } else {
                scale.scale(lower)
            };

            LegendSwatch {
                x,
                y: 0.0,
                width: swatch_width,
                height: swatch_height,
                fill: color.to_css(),
                lower,
                upper,
            }
        })
        .collect();

    Legend {
        translate: (layout.legend_x, layout.legend_y),
        scale,
        swatches,
        axis: legend_axis(&scale, breakpoints, swatch_height, layout.tick_size),
        title: AxisTitle {
            text: "Base Temperature + variance".to_string(),
            x: layout.legend_width / 4.0,
            y: swatch_height + 35.0,
            rotate: 0.0,
        },
    }
}
