//! Local runs of the ETL against a filesystem object store.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hotel_core::{EventHandler, HandlerOutcome, S3Event, Settings};
use hotel_storage::FsStore;
use tracing::info_span;

/// Settings fields given on the command line; each replaces the value from the
/// settings file or the default.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub raw_prefix: Option<String>,
    pub processed_prefix: Option<String>,
    pub rejected_prefix: Option<String>,
    pub city: Option<String>,
}

/// Build settings from an optional JSON file and command-line overrides.
pub fn resolve_settings(config: Option<&Path>, overrides: &SettingsOverrides) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => Settings::from_json_file(path)
            .with_context(|| format!("load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(prefix) = &overrides.raw_prefix {
        settings = settings.with_raw_prefix(prefix.as_str());
    }
    if let Some(prefix) = &overrides.processed_prefix {
        settings = settings.with_processed_prefix(prefix.as_str());
    }
    if let Some(prefix) = &overrides.rejected_prefix {
        settings = settings.with_rejected_prefix(prefix.as_str());
    }
    if let Some(city) = &overrides.city {
        settings = settings.with_city(city.as_str());
    }
    Ok(settings)
}

/// Where and how a run reads and writes objects.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Root directory of the filesystem object store; buckets are subdirectories.
    pub store_root: PathBuf,
    pub settings: Settings,
    pub dry_run: bool,
}

/// Handle a notification stored as a JSON file.
pub fn run_event_file(event_path: &Path, options: &RunOptions) -> Result<HandlerOutcome> {
    let text = std::fs::read_to_string(event_path)
        .with_context(|| format!("read event {}", event_path.display()))?;
    let event = S3Event::from_json(&text)
        .with_context(|| format!("parse event {}", event_path.display()))?;

    let _span = info_span!("event", path = %event_path.display()).entered();
    let store = FsStore::new(&options.store_root);
    let outcome = EventHandler::new(&store, &options.settings)
        .with_dry_run(options.dry_run)
        .handle_event(&event)
        .context("handle event")?;
    Ok(outcome)
}

/// Process one ingestion directory prefix.
pub fn run_prefix(bucket: &str, prefix: &str, options: &RunOptions) -> Result<HandlerOutcome> {
    let _span = info_span!("batch", bucket, prefix).entered();
    let store = FsStore::new(&options.store_root);
    let outcome = EventHandler::new(&store, &options.settings)
        .with_dry_run(options.dry_run)
        .process_prefix(bucket, prefix)
        .with_context(|| format!("process s3://{bucket}/{prefix}"))?;
    Ok(outcome)
}
