//! Chart assembly: turns a dataset into positioned, colored cells plus axes
//! and a legend, and answers hover queries against the result.

use heatmap_common::month::MONTHS_PER_YEAR;
use heatmap_common::{
    Color, DataPoint, Dataset, HeatmapError, HeatmapResult, Palette, TemperatureRange,
};
use serde::Serialize;
use tracing::debug;

use crate::axis::{month_axis, year_axis, Axis};
use crate::layout::ChartLayout;
use crate::legend::{build_legend, Legend};
use crate::scale::{BandScale, ThresholdScale};
use crate::tooltip::{Pointer, Tooltip, TooltipState};

pub const CHART_TITLE: &str = "Monthly Global Land-Surface Temperature";

/// One rectangle of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    /// Zero-based month (`data-month`)
    pub month: usize,
    /// `data-year`
    pub year: i32,
    /// Unrounded absolute temperature (`data-temp`)
    pub temperature: f64,
    pub tooltip: Tooltip,
}

/// Declarative description of the whole chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub description: String,
    /// Canvas size
    pub width: f64,
    pub height: f64,
    /// Horizontal shift applied to every cell
    pub cell_offset_x: f64,
    pub base_temperature: f64,
    pub temperature_range: TemperatureRange,
    pub breakpoints: Vec<f64>,
    pub cells: Vec<Cell>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
}

impl Chart {
    /// Pretty-printed JSON for consumers that draw the chart themselves.
    pub fn to_json(&self) -> HeatmapResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HeatmapError::RenderError(format!("chart serialization failed: {}", e)))
    }
}

/// Everything derived from one dataset: scales, color thresholds and layout.
///
/// Built once after the dataset is loaded and never mutated; hover and
/// unhover handlers borrow it and return fresh tooltip state.
#[derive(Debug, Clone)]
pub struct ChartContext {
    dataset: Dataset,
    layout: ChartLayout,
    range: TemperatureRange,
    x_scale: BandScale<i32>,
    y_scale: BandScale<usize>,
    threshold: ThresholdScale<Color>,
}

impl ChartContext {
    pub fn new(dataset: Dataset, palette: Palette, layout: ChartLayout) -> HeatmapResult<Self> {
        layout.validate()?;
        palette.validate()?;

        let range = dataset.temperature_range();
        let x_scale = BandScale::new(dataset.years(), layout.year_range());
        let y_scale = BandScale::new(0..MONTHS_PER_YEAR, layout.month_range());
        let threshold = ThresholdScale::equal_width(range, palette.colors);

        debug!(
            records = dataset.len(),
            years = x_scale.domain().len(),
            min_temp = range.min,
            max_temp = range.max,
            buckets = threshold.outputs().len(),
            "Built chart context"
        );

        Ok(Self {
            dataset,
            layout,
            range,
            x_scale,
            y_scale,
            threshold,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn temperature_range(&self) -> TemperatureRange {
        self.range
    }

    pub fn x_scale(&self) -> &BandScale<i32> {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &BandScale<usize> {
        &self.y_scale
    }

    pub fn threshold(&self) -> &ThresholdScale<Color> {
        &self.threshold
    }

    /// Palette entry for an absolute temperature.
    pub fn temperature_to_color(&self, temperature: f64) -> &Color {
        self.threshold.apply(temperature)
    }

    fn point(&self, index: usize) -> HeatmapResult<&DataPoint> {
        self.dataset
            .records
            .get(index)
            .ok_or(HeatmapError::UnknownCell {
                index,
                len: self.dataset.len(),
            })
    }

    fn cell_for(&self, point: &DataPoint) -> Option<Cell> {
        let month = point.month_index()?;
        let temperature = self.dataset.temperature_of(point);
        Some(Cell {
            x: self.x_scale.position(point.year)?,
            y: self.y_scale.position(month)?,
            width: self.x_scale.bandwidth(),
            height: self.y_scale.bandwidth(),
            fill: self.temperature_to_color(temperature).to_css(),
            month,
            year: point.year,
            temperature,
            tooltip: Tooltip::for_point(point, self.dataset.base_temperature),
        })
    }

    /// Geometry and color of the cell for record `index`.
    pub fn cell(&self, index: usize) -> HeatmapResult<Cell> {
        let point = self.point(index)?;
        self.cell_for(point).ok_or_else(|| {
            HeatmapError::RenderError(format!("record {} falls outside the chart scales", index))
        })
    }

    /// All cells in dataset order. Fails on the first record that cannot be
    /// placed, like [`ChartContext::cell`].
    pub fn cells(&self) -> HeatmapResult<Vec<Cell>> {
        (0..self.dataset.len()).map(|i| self.cell(i)).collect()
    }

    pub fn tooltip(&self, index: usize) -> HeatmapResult<Tooltip> {
        let point = self.point(index)?;
        Ok(Tooltip::for_point(point, self.dataset.base_temperature))
    }

    /// Pointer entered cell `index`.
    pub fn hover(&self, index: usize, pointer: Pointer) -> HeatmapResult<TooltipState> {
        let point = self.point(index)?;
        let tooltip = Tooltip::for_point(point, self.dataset.base_temperature);
        Ok(TooltipState::shown(index, point, &tooltip, pointer))
    }

    /// Pointer left a cell.
    pub fn unhover(&self) -> TooltipState {
        TooltipState::hidden()
    }

    pub fn description(&self) -> String {
        match self.dataset.year_span() {
            Some((first, last)) => format!(
                "{} - {}: base temperature {}°C",
                first, last, self.dataset.base_temperature
            ),
            None => format!("base temperature {}°C", self.dataset.base_temperature),
        }
    }

    /// Assemble the full declarative chart.
    pub fn build(&self) -> HeatmapResult<Chart> {
        let cells = self.cells()?;
        debug!(cells = cells.len(), "Assembled chart");

        Ok(Chart {
            title: CHART_TITLE.to_string(),
            description: self.description(),
            width: self.layout.canvas_width(),
            height: self.layout.canvas_height(),
            cell_offset_x: self.layout.plot_offset_x,
            base_temperature: self.dataset.base_temperature,
            temperature_range: self.range,
            breakpoints: self.threshold.breakpoints().to_vec(),
            cells,
            x_axis: year_axis(&self.x_scale, &self.layout),
            y_axis: month_axis(&self.y_scale, &self.layout),
            legend: build_legend(&self.threshold, self.range, &self.layout),
        })
    }
}
