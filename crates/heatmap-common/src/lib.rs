//! Common types shared by the heatmap renderer and service.

pub mod dataset;
pub mod error;
pub mod month;
pub mod style;

pub use dataset::{DataPoint, Dataset, RawDataPoint, RawDataset, TemperatureRange};
pub use error::{HeatmapError, HeatmapResult};
pub use style::{Color, Palette, StyleError};
