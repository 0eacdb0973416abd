//! Encoding and writing the rendered chart.

use std::path::Path;

use heatmap_common::HeatmapResult;
use renderer::png::render_png;
use renderer::svg::render_svg;
use renderer::Chart;
use tracing::info;

use crate::config::OutputFormat;

pub fn encode(chart: &Chart, format: OutputFormat) -> HeatmapResult<Vec<u8>> {
    match format {
        OutputFormat::Svg => Ok(render_svg(chart).into_bytes()),
        OutputFormat::Png => render_png(chart),
        OutputFormat::Json => Ok(chart.to_json()?.into_bytes()),
    }
}

/// Write `bytes` to `path`, creating parent directories as needed.
pub async fn write_output(path: &Path, bytes: &[u8]) -> HeatmapResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;

    info!(path = %path.display(), bytes = bytes.len(), "Wrote chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatmap_common::{Dataset, Palette};
    use renderer::{ChartContext, ChartLayout};

    fn chart() -> Chart {
        let json = r#"{"baseTemperature": 8.66, "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -1.366},
            {"year": 1753, "month": 2, "variance": 0.5}
        ]}"#;
        let dataset = Dataset::from_json(json).unwrap();
        ChartContext::new(dataset, Palette::default(), ChartLayout::with_size(300.0, 120.0))
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_encode_svg() {
        let bytes = encode(&chart(), OutputFormat::Svg).unwrap();
        assert!(bytes.starts_with(b"<svg"));
    }

    #[test]
    fn test_encode_json() {
        let bytes = encode(&chart(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["cells"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_encode_png() {
        let bytes = encode(&chart(), OutputFormat::Png).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
