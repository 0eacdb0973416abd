//! Command-line configuration for the heatmap renderer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use heatmap_common::{HeatmapResult, Palette};
use renderer::ChartLayout;
use tracing::Level;

use crate::fetch::FetchConfig;

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Parser, Debug, Clone)]
#[command(name = "heatmap")]
#[command(about = "Render the monthly global land-surface temperature heatmap")]
pub struct Args {
    /// Dataset URL
    #[arg(long, env = "HEATMAP_DATA_URL", default_value = DEFAULT_DATA_URL)]
    pub url: String,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "heatmap.svg")]
    pub output: PathBuf,

    /// Output format (defaults to the output file extension, then svg)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Plot width in pixels
    #[arg(long, default_value = "1600")]
    pub width: f64,

    /// Plot height in pixels
    #[arg(long, default_value = "550")]
    pub height: f64,

    /// Legend width in pixels
    #[arg(long, default_value = "400")]
    pub legend_width: f64,

    /// Palette JSON file (built-in 11-color scheme when omitted)
    #[arg(long, env = "HEATMAP_PALETTE")]
    pub palette: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Rendered artifact type.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

impl OutputFormat {
    /// Format implied by a file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| OutputFormat::from_path(&self.output))
            .unwrap_or(OutputFormat::Svg)
    }

    pub fn layout(&self) -> ChartLayout {
        ChartLayout {
            legend_width: self.legend_width,
            ..ChartLayout::with_size(self.width, self.height)
        }
    }

    /// Palette from `--palette`, or the built-in scheme.
    pub fn palette(&self) -> HeatmapResult<Palette> {
        match &self.palette {
            Some(path) => Ok(Palette::from_file(path)?),
            None => Ok(Palette::default()),
        }
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..FetchConfig::default()
        }
    }

    pub fn log_level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}
