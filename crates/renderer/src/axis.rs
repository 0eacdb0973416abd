//! Axis tick specifications for the year, month and legend axes.

use heatmap_common::month::{month_name, year_label, MONTHS_PER_YEAR};
use serde::Serialize;

use crate::layout::ChartLayout;
use crate::numbers::format_tick;
use crate::scale::{tick_precision, BandScale, LinearScale};

/// Approximate tick count used to pick legend label precision.
const LEGEND_TICK_COUNT: usize = 10;

/// Which side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// A single tick mark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Domain value the tick represents
    pub value: f64,
    /// Offset along the axis, in the axis' own coordinates
    pub position: f64,
    pub label: String,
}

/// Axis title text, positioned relative to the axis group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees
    pub rotate: f64,
}

/// Declarative description of one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: String,
    pub orient: AxisOrient,
    /// Pixel extent of the axis line
    pub range: (f64, f64),
    /// Translation of the axis group
    pub translate: (f64, f64),
    pub tick_size: f64,
    pub ticks: Vec<Tick>,
    pub title: Option<AxisTitle>,
}

/// Years that get a tick mark: decades only.
pub fn decade_ticks(years: &[i32]) -> Vec<i32> {
    years
        .iter()
        .copied()
        .filter(|year| year.rem_euclid(10) == 0)
        .collect()
}

/// Bottom axis labelling every decade present in the year domain.
pub fn year_axis(scale: &BandScale<i32>, layout: &ChartLayout) -> Axis {
    let ticks = decade_ticks(scale.domain())
        .into_iter()
        .filter_map(|year| {
            scale.center(year).map(|position| Tick {
                value: f64::from(year),
                position,
                label: year_label(year),
            })
        })
        .collect();

    Axis {
        id: "x-axis".to_string(),
        orient: AxisOrient::Bottom,
        range: scale.range(),
        translate: (layout.plot_offset_x, layout.height),
        tick_size: layout.tick_size,
        ticks,
        title: Some(AxisTitle {
            text: "Years".to_string(),
            x: layout.width / 2.0,
            y: 50.0,
            rotate: 0.0,
        }),
    }
}

/// Left axis labelling all twelve months by name.
pub fn month_axis(scale: &BandScale<usize>, layout: &ChartLayout) -> Axis {
    let ticks = (0..MONTHS_PER_YEAR)
        .filter_map(|index| {
            let position = scale.center(index)?;
            let label = month_name(index)?;
            Some(Tick {
                value: index as f64,
                position,
                label: label.to_string(),
            })
        })
        .collect();

    Axis {
        id: "y-axis".to_string(),
        orient: AxisOrient::Left,
        range: scale.range(),
        translate: (layout.y_axis_offset_x, 0.0),
        tick_size: layout.tick_size,
        ticks,
        title: Some(AxisTitle {
            text: "Months".to_string(),
            x: -55.0,
            y: layout.height / 2.0 - 50.0,
            rotate: -90.0,
        }),
    }
}

/// Bottom axis under the legend with one tick per breakpoint.
pub fn legend_axis(
    scale: &LinearScale,
    breakpoints: &[f64],
    swatch_height: f64,
    tick_size: f64,
) -> Axis {
    let precision = tick_precision(scale.domain.0, scale.domain.1, LEGEND_TICK_COUNT);

    let ticks = breakpoints
        .iter()
        .map(|&value| Tick {
            value,
            position: scale.scale(value),
            label: format_tick(value, precision),
        })
        .collect();

    Axis {
        id: "legend-axis".to_string(),
        orient: AxisOrient::Bottom,
        range: scale.range,
        translate: (0.0, swatch_height),
        tick_size,
        ticks,
        title: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decade_ticks() {
        let years: Vec<i32> = (1750..=2015).collect();
        let ticks = decade_ticks(&years);
        let expected: Vec<i32> = (1750..=2010).step_by(10).collect();
        assert_eq!(ticks, expected);
    }

    #[test]
    fn test_year_axis_ticks_centered() {
        let layout = ChartLayout::with_size(260.0, 120.0);
        // 20 years over 30..230 -> 10px bands
        let scale = BandScale::new(1990..2010, layout.year_range());
        let axis = year_axis(&scale, &layout);

        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["1990", "2000"]);
        assert_eq!(axis.ticks[0].position, 35.0);
        assert_eq!(axis.ticks[1].position, 135.0);
        assert_eq!(axis.translate, (45.0, 120.0));
    }

    #[test]
    fn test_month_axis_labels() {
        let layout = ChartLayout::with_size(600.0, 120.0);
        let scale = BandScale::new(0..MONTHS_PER_YEAR, layout.month_range());
        let axis = month_axis(&scale, &layout);

        assert_eq!(axis.ticks.len(), 12);
        assert_eq!(axis.ticks[0].label, "January");
        assert_eq!(axis.ticks[11].label, "December");
        assert_eq!(axis.ticks[0].position, 5.0);
        assert_eq!(axis.orient, AxisOrient::Left);
    }

    #[test]
    fn test_legend_axis_ticks_at_breakpoints() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 400.0));
        let axis = legend_axis(&scale, &[2.5, 5.0, 7.5], 30.0, 10.0);

        let positions: Vec<f64> = axis.ticks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![100.0, 200.0, 300.0]);
        // 10 ticks over a span of 10 -> integer labels
        assert_eq!(axis.ticks[0].label, "3");
        assert_eq!(axis.translate, (0.0, 30.0));
    }
}
