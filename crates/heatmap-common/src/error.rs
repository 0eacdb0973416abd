//! Error types for the heatmap workspace.

use thiserror::Error;

use crate::style::StyleError;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for heatmap operations.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Input Errors ===
    #[error("Failed to fetch dataset from {url}: {message}")]
    FetchError { url: String, message: String },

    #[error("Failed to decode dataset: {0}")]
    DecodeError(String),

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Invalid base temperature: {0}")]
    InvalidBaseTemperature(f64),

    // === Rendering Errors ===
    #[error("Invalid layout parameter '{param}': {message}")]
    InvalidLayout { param: String, message: String },

    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    #[error("Cell index {index} out of range (chart has {len} cells)")]
    UnknownCell { index: usize, len: usize },

    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Infrastructure Errors ===
    #[error("IO error: {0}")]
    IoError(String),
}

impl HeatmapError {
    /// Whether the error originated from the input dataset rather than from
    /// rendering or the local environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HeatmapError::FetchError { .. }
                | HeatmapError::DecodeError(_)
                | HeatmapError::InvalidRecord { .. }
                | HeatmapError::InvalidBaseTemperature(_)
        )
    }
}

impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::IoError(err.to_string())
    }
}

impl From<StyleError> for HeatmapError {
    fn from(err: StyleError) -> Self {
        HeatmapError::InvalidPalette(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::DecodeError(format!("JSON error: {}", err))
    }
}
