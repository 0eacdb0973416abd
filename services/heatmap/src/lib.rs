//! Heatmap renderer service library.
//!
//! The binary is a thin wrapper around these modules; they are exposed here
//! so the fetch and output paths can be tested against a local server.

pub mod config;
pub mod fetch;
pub mod output;

use heatmap_common::{Dataset, HeatmapResult};
use renderer::{Chart, ChartContext};
use tracing::info;

pub use config::{Args, OutputFormat, DEFAULT_DATA_URL};
pub use fetch::{load_file, DatasetClient, FetchConfig};
pub use output::{encode, write_output};

/// Load the dataset named by `--input`, or fetch it from `--url`.
pub async fn load_dataset(args: &Args) -> HeatmapResult<Dataset> {
    match &args.input {
        Some(path) => load_file(path).await,
        None => {
            let client = DatasetClient::new(args.fetch_config())?;
            client.fetch(&args.url).await
        }
    }
}

/// Build the chart for `dataset` using the layout and palette from `args`.
pub fn build_chart(args: &Args, dataset: Dataset) -> HeatmapResult<Chart> {
    let ctx = ChartContext::new(dataset, args.palette()?, args.layout())?;
    let chart = ctx.build()?;
    info!(
        cells = chart.cells.len(),
        min_temp = chart.temperature_range.min,
        max_temp = chart.temperature_range.max,
        "Chart built"
    );
    Ok(chart)
}
