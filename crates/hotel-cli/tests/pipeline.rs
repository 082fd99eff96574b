//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use hotel_cli::pipeline::{
    RunOptions, SettingsOverrides, resolve_settings, run_event_file, run_prefix,
};
use hotel_core::{HandlerOutcome, Settings, SkipReason};

const BUCKET: &str = "offers";
const DIR: &str = "raw/ingestion_20260216_093000/";

const CSV: &str = "nombre_hotel,ubicacion,checkin_date,checkout_date,precio_inicial,precio_impuesto,precio_final,calificacion,puntaje,cantidad_reviews,link_detalle
Hotel A,\"Palermo, Buenos Aires (Palermo Soho)\",2026-02-16,2026-02-18,200000.0,67325.0,267325.0,Muy bueno,8.5,120,https://www.booking.com/hotel/ar/a.html
Hotel B,\"Centro, Buenos Aires\",2026-02-16,2026-02-16,1000.0,0.0,1000.0,N/A,N/A,N/A,https://www.booking.com/hotel/ar/b.html
";

fn stage(root: &Path, key: &str, body: &str) {
    let path = root.join(BUCKET).join(key);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn options(root: &Path, dry_run: bool) -> RunOptions {
    RunOptions {
        store_root: root.to_path_buf(),
        settings: Settings::default(),
        dry_run,
    }
}

#[test]
fn test_run_event_file_writes_both_payloads() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let root = temp_dir.path();
    stage(root, &format!("{DIR}offers.csv"), CSV);
    let event_path = root.join("event.json");
    fs::write(
        &event_path,
        format!(
            r#"{{"Records":[{{"s3":{{"bucket":{{"name":"{BUCKET}"}},"object":{{"key":"{DIR}offers.csv"}}}}}}]}}"#
        ),
    )
    .unwrap();

    let outcome = run_event_file(&event_path, &options(root, false)).unwrap();

    let HandlerOutcome::Processed(report) = outcome else {
        panic!("expected a processed batch, got {outcome:?}");
    };
    assert_eq!(report.summary.valid_rows, 1);
    assert_eq!(report.summary.invalid_rows, 1);
    assert!(
        root.join(BUCKET)
            .join("processed/ingestion_date=2026-02-16/ingestion_20260216_093000.parquet")
            .is_file()
    );
    assert!(
        root.join(BUCKET)
            .join("rejected/ingestion_date=2026-02-16/ingestion_20260216_093000.parquet")
            .is_file()
    );
}

#[test]
fn test_run_prefix_dry_run_leaves_store_untouched() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let root = temp_dir.path();
    stage(root, &format!("{DIR}offers.csv"), CSV);

    let outcome = run_prefix(BUCKET, "raw/ingestion_20260216_093000", &options(root, true)).unwrap();

    assert!(matches!(outcome, HandlerOutcome::Processed(ref report) if !report.uploaded));
    assert!(!root.join(BUCKET).join("processed").exists());
    assert!(!root.join(BUCKET).join("rejected").exists());
}

#[test]
fn test_run_prefix_outside_ingestion_directory() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let outcome = run_prefix(BUCKET, "raw/backfill/", &options(temp_dir.path(), false)).unwrap();
    assert!(matches!(
        outcome,
        HandlerOutcome::Skipped {
            reason: SkipReason::NotIngestionDirectory,
            ..
        }
    ));
}

#[test]
fn test_run_event_file_missing() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");
    let err = run_event_file(&missing, &options(temp_dir.path(), false)).unwrap_err();
    assert!(err.to_string().starts_with("read event"));
}

#[test]
fn test_resolve_settings_overrides_file_values() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = temp_dir.path().join("settings.json");
    fs::write(&config, r#"{"city": "Rosario", "processed_prefix": "curated/"}"#).unwrap();
    let overrides = SettingsOverrides {
        city: Some("Córdoba".to_string()),
        ..SettingsOverrides::default()
    };

    let settings = resolve_settings(Some(&config), &overrides).unwrap();

    assert_eq!(settings.city(), "Córdoba");
    assert_eq!(settings.processed_prefix(), "curated/");
    assert_eq!(settings.raw_prefix(), Settings::default().raw_prefix());
}

#[test]
fn test_resolve_settings_without_file() {
    let settings = resolve_settings(None, &SettingsOverrides::default()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_resolve_settings_bad_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = temp_dir.path().join("settings.json");
    fs::write(&config, r#"{"bucket": "offers"}"#).unwrap();

    let err = resolve_settings(Some(&config), &SettingsOverrides::default()).unwrap_err();
    assert!(err.to_string().starts_with("load settings from"));
}
