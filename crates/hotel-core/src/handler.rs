//! Storage notification handling.
//!
//! A notification names one staged object. Its enclosing ingestion directory
//! is processed as a whole: every CSV under it becomes one raw batch, and the
//! valid and invalid payloads are uploaded under date-partitioned keys.

use chrono::NaiveDateTime;
use hotel_ingest::{IngestError, IngestionDirectory, csv_keys, directory_prefix, read_csv_bytes};
use hotel_output::{build_partitioned_key, swap_stage_prefix};
use hotel_storage::ObjectStore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::error::{CoreError, Result};
use crate::processor::{BatchProcessor, SplitSummary};
use crate::settings::Settings;

/// Object-created notification, in the S3 event JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records")]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Object {
    pub key: String,
}

impl S3Event {
    /// Parse a notification payload.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| CoreError::InvalidEvent {
            message: e.to_string(),
        })
    }

    /// Build a single-record event.
    pub fn for_object(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            records: vec![S3EventRecord {
                s3: S3Entity {
                    bucket: S3Bucket { name: bucket.into() },
                    object: S3Object { key: key.into() },
                },
            }],
        }
    }
}

/// Why a notification was acknowledged without processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The key is not under the raw prefix.
    OutsideRawPrefix,
    /// The enclosing directory is not `ingestion_YYYYMMDD_HHMMSS`.
    NotIngestionDirectory,
}

impl SkipReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::OutsideRawPrefix => "Ignorado: prefijo no coincide",
            Self::NotIngestionDirectory => "Ignorado: no es directorio de ingesta",
        }
    }
}

/// A processed ingestion directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub bucket: String,
    pub batch_name: String,
    pub ingested_at: NaiveDateTime,
    /// Non-empty CSV objects read, in listing order.
    pub source_keys: Vec<String>,
    pub processed_key: String,
    pub rejected_key: String,
    pub processed_bytes: usize,
    pub rejected_bytes: usize,
    /// False for a dry run.
    pub uploaded: bool,
    pub summary: SplitSummary,
}

/// Result of handling one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    Skipped { key: String, reason: SkipReason },
    NoCsvFiles { prefix: String },
    Processed(BatchReport),
}

/// Invocation response returned to the trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerOutcome {
    /// Always status 200; the body describes the outcome.
    ///
    /// Body texts and the processed-body keys (`lote`, `clave_procesados`,
    /// `clave_rechazados`) are the contract consumers of the invocation read.
    pub fn to_response(&self) -> InvocationResponse {
        let body = match self {
            Self::Skipped { reason, .. } => reason.message().to_string(),
            Self::NoCsvFiles { .. } => "No se encontraron archivos CSV".to_string(),
            Self::Processed(report) => json!({
                "lote": report.batch_name,
                "clave_procesados": report.processed_key,
                "clave_rechazados": report.rejected_key,
            })
            .to_string(),
        };
        InvocationResponse {
            status_code: 200,
            body,
        }
    }
}

/// Processes ingestion directories against an object store.
pub struct EventHandler<'a> {
    store: &'a dyn ObjectStore,
    settings: &'a Settings,
    processor: BatchProcessor,
    dry_run: bool,
}

impl<'a> EventHandler<'a> {
    pub fn new(store: &'a dyn ObjectStore, settings: &'a Settings) -> Self {
        Self {
            store,
            settings,
            processor: BatchProcessor::new(settings),
            dry_run: false,
        }
    }

    /// Compute payloads and keys without uploading.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Handle a notification. Only the first record is considered.
    pub fn handle_event(&self, event: &S3Event) -> Result<HandlerOutcome> {
        let record = event.records.first().ok_or_else(|| CoreError::InvalidEvent {
            message: "event has no records".to_string(),
        })?;
        let bucket = record.s3.bucket.name.as_str();
        let key = record.s3.object.key.as_str();

        if !key.starts_with(self.settings.raw_prefix()) {
            info!(key, "Object outside the raw prefix, ignored");
            return Ok(HandlerOutcome::Skipped {
                key: key.to_string(),
                reason: SkipReason::OutsideRawPrefix,
            });
        }

        let Some(directory) = IngestionDirectory::from_prefix(directory_prefix(key)) else {
            info!(key, "Object outside an ingestion directory, ignored");
            return Ok(HandlerOutcome::Skipped {
                key: key.to_string(),
                reason: SkipReason::NotIngestionDirectory,
            });
        };

        self.process_directory(bucket, &directory)
    }

    /// Process an ingestion directory given by prefix.
    ///
    /// A missing trailing `/` is added.
    pub fn process_prefix(&self, bucket: &str, prefix: &str) -> Result<HandlerOutcome> {
        let prefix = if prefix.ends_with('/') {
            prefix.to_string()
        } else {
            format!("{prefix}/")
        };
        match IngestionDirectory::from_prefix(&prefix) {
            Some(directory) => self.process_directory(bucket, &directory),
            None => Ok(HandlerOutcome::Skipped {
                key: prefix,
                reason: SkipReason::NotIngestionDirectory,
            }),
        }
    }

    fn process_directory(
        &self,
        bucket: &str,
        directory: &IngestionDirectory,
    ) -> Result<HandlerOutcome> {
        info!(
            batch = %directory.batch_name,
            bucket,
            "Processing ingestion directory"
        );

        let listed = self.store.list_objects(bucket, &directory.prefix)?;
        let mut source_keys = Vec::new();
        let mut batches = Vec::new();
        for key in csv_keys(&listed) {
            let bytes = self.store.get_object(bucket, &key)?;
            match read_csv_bytes(&key, &bytes) {
                Ok(batch) => {
                    batches.push(batch);
                    source_keys.push(key);
                }
                Err(IngestError::EmptyCsv { .. }) => {
                    warn!(key = %key, "Empty CSV object skipped");
                }
                Err(error) => return Err(error.into()),
            }
        }
        if batches.is_empty() {
            warn!(prefix = %directory.prefix, "No CSV files found");
            return Ok(HandlerOutcome::NoCsvFiles {
                prefix: directory.prefix.clone(),
            });
        }

        let payloads = self.processor.process_batch(&batches)?;

        let processed_key = build_partitioned_key(
            self.settings.processed_prefix(),
            directory.ingested_at,
            &directory.batch_name,
        );
        let rejected_key = swap_stage_prefix(
            &processed_key,
            self.settings.processed_prefix(),
            self.settings.rejected_prefix(),
        );

        let processed_bytes = payloads.valid.len();
        let rejected_bytes = payloads.invalid.len();
        let summary = payloads.summary.clone();
        let (valid, invalid) = payloads.into_bytes();

        if !self.dry_run {
            self.store.put_object(bucket, &processed_key, &valid)?;
            self.store.put_object(bucket, &rejected_key, &invalid)?;
        }

        info!(
            batch = %directory.batch_name,
            processed = %processed_key,
            rejected = %rejected_key,
            dry_run = self.dry_run,
            "Ingestion directory processed"
        );

        Ok(HandlerOutcome::Processed(BatchReport {
            bucket: bucket.to_string(),
            batch_name: directory.batch_name.clone(),
            ingested_at: directory.ingested_at,
            source_keys,
            processed_key,
            rejected_key,
            processed_bytes,
            rejected_bytes,
            uploaded: !self.dry_run,
            summary,
        }))
    }
}

/// Handle a notification and upload the payloads.
pub fn handle_event(
    event: &S3Event,
    store: &dyn ObjectStore,
    settings: &Settings,
) -> Result<HandlerOutcome> {
    EventHandler::new(store, settings).handle_event(event)
}

/// Process an ingestion directory prefix and upload the payloads.
pub fn process_prefix(
    bucket: &str,
    prefix: &str,
    store: &dyn ObjectStore,
    settings: &Settings,
) -> Result<HandlerOutcome> {
    EventHandler::new(store, settings).process_prefix(bucket, prefix)
}
