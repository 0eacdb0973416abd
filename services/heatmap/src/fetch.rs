//! Dataset loading over HTTP or from disk.
//!
//! A single GET, no retries: any transport failure, non-success status or
//! malformed body is returned to the caller.

use std::path::Path;
use std::time::Duration;

use heatmap_common::{Dataset, HeatmapError, HeatmapResult};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Fetches the temperature dataset.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    pub fn new(config: FetchConfig) -> HeatmapResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| HeatmapError::FetchError {
                url: String::new(),
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> HeatmapResult<Dataset> {
        let fetch_error = |message: String| HeatmapError::FetchError {
            url: url.to_string(),
            message,
        };

        info!("Fetching dataset");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("unexpected status {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| fetch_error(format!("failed to read body: {}", e)))?;
        debug!(bytes = body.len(), "Received dataset body");

        let dataset = Dataset::from_json_bytes(&body)?;
        info!(
            records = dataset.len(),
            base_temperature = dataset.base_temperature,
            "Dataset loaded"
        );
        Ok(dataset)
    }
}

/// Read a dataset from a local JSON file.
#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_file(path: &Path) -> HeatmapResult<Dataset> {
    let bytes = tokio::fs::read(path).await?;
    let dataset = Dataset::from_json_bytes(&bytes)?;
    info!(records = dataset.len(), "Dataset loaded from file");
    Ok(dataset)
}
