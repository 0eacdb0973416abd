//! Tooltip text and hover state.

use heatmap_common::month::month_name;
use heatmap_common::DataPoint;
use serde::Serialize;

use crate::numbers::{format_signed, format_value};
use crate::svg::escape_xml;

/// Tooltip placement relative to the pointer.
pub const TOOLTIP_OFFSET_X: f64 = 45.0;
pub const TOOLTIP_OFFSET_Y: f64 = 100.0;

/// Outline drawn around the hovered cell.
pub const HIGHLIGHT_STROKE: &str = "black";
pub const HIGHLIGHT_STROKE_WIDTH: f64 = 3.0;

/// Three-line description of one data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// `"1753 - January"`
    pub heading: String,
    /// `"Temperature 1.8°C"`
    pub temperature: String,
    /// `"variance -6.9°C"`
    pub variance: String,
}

impl Tooltip {
    pub fn for_point(point: &DataPoint, base_temperature: f64) -> Self {
        let month = point
            .month_index()
            .and_then(month_name)
            .unwrap_or_default();
        Self {
            heading: format!("{} - {}", point.year, month),
            temperature: format!(
                "Temperature {}°C",
                format_value(point.temperature(base_temperature))
            ),
            variance: format!("variance {}°C", format_signed(point.variance)),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [&self.heading, &self.temperature, &self.variance]
    }

    /// Plain text, one line per entry.
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }

    /// Markup for an HTML tooltip element, one paragraph per line.
    pub fn to_html(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("<p>{}</p>", escape_xml(line)))
            .collect()
    }
}

/// Pointer position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Outline applied to the hovered cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub cell: usize,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

/// What the tooltip element should look like after a hover event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipState {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub data_year: Option<i32>,
    pub html: String,
    pub highlight: Option<Highlight>,
}

impl TooltipState {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            left: 0.0,
            top: 0.0,
            data_year: None,
            html: String::new(),
            highlight: None,
        }
    }

    pub fn shown(cell: usize, point: &DataPoint, tooltip: &Tooltip, pointer: Pointer) -> Self {
        Self {
            visible: true,
            left: pointer.x - TOOLTIP_OFFSET_X,
            top: pointer.y - TOOLTIP_OFFSET_Y,
            data_year: Some(point.year),
            html: tooltip.to_html(),
            highlight: Some(Highlight {
                cell,
                stroke: HIGHLIGHT_STROKE,
                stroke_width: HIGHLIGHT_STROKE_WIDTH,
            }),
        }
    }
}
