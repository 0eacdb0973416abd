//! Heatmap rendering for monthly temperature variance data.
//!
//! Builds a declarative chart from a [`heatmap_common::Dataset`]:
//! - Band scales for years (x) and months (y)
//! - Equal-width temperature thresholds mapped onto a palette
//! - Axis tick specifications and a color legend
//! - Tooltip text and hover state
//!
//! The chart can be serialized as JSON or emitted as SVG or PNG.

pub mod axis;
pub mod chart;
pub mod layout;
pub mod legend;
pub mod numbers;
pub mod png;
pub mod scale;
pub mod svg;
pub mod tooltip;

pub use chart::{Cell, Chart, ChartContext};
pub use layout::ChartLayout;
pub use tooltip::{Pointer, Tooltip, TooltipState};
