//! Temperature heatmap renderer.
//!
//! Fetches the monthly global temperature variance dataset and renders it as
//! a year by month heatmap with a threshold color legend (SVG, PNG or JSON).

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use heatmap::{build_chart, encode, load_dataset, write_output, Args};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let format = args.output_format();
    info!(
        output = %args.output.display(),
        format = ?format,
        "Starting heatmap renderer"
    );

    let source = match &args.input {
        Some(path) => path.display().to_string(),
        None => args.url.clone(),
    };
    let dataset = load_dataset(&args)
        .await
        .with_context(|| format!("Failed to load dataset from {}", source))?;

    let chart = build_chart(&args, dataset).context("Failed to build chart")?;

    let bytes = encode(&chart, format).context("Failed to encode chart")?;

    write_output(&args.output, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!("Done");
    Ok(())
}
