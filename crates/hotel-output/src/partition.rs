//! Partitioned object keys.

use chrono::NaiveDateTime;

/// File extension of output payloads.
pub const PARQUET_EXTENSION: &str = "parquet";

/// Build `<stage_prefix>ingestion_date=YYYY-MM-DD/<batch_name>.parquet`.
///
/// The stage prefix is used verbatim and is expected to end with `/`.
pub fn build_partitioned_key(
    stage_prefix: &str,
    ingested_at: NaiveDateTime,
    batch_name: &str,
) -> String {
    format!(
        "{stage_prefix}ingestion_date={}/{batch_name}.{PARQUET_EXTENSION}",
        ingested_at.format("%Y-%m-%d")
    )
}

/// Move a key from one stage prefix to another, keeping the partition path.
///
/// Keys outside `from` are returned unchanged.
pub fn swap_stage_prefix(key: &str, from: &str, to: &str) -> String {
    match key.strip_prefix(from) {
        Some(rest) => format!("{to}{rest}"),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_build_partitioned_key() {
        let key = build_partitioned_key(
            "processed/",
            at(2026, 2, 16, 9, 30, 0),
            "ingestion_20260216_093000",
        );
        assert_eq!(
            key,
            "processed/ingestion_date=2026-02-16/ingestion_20260216_093000.parquet"
        );
    }

    #[test]
    fn test_time_of_day_does_not_change_partition() {
        let morning = build_partitioned_key("rejected/", at(2026, 1, 5, 0, 0, 0), "b");
        let night = build_partitioned_key("rejected/", at(2026, 1, 5, 23, 59, 59), "b");
        assert_eq!(morning, night);
        assert_eq!(morning, "rejected/ingestion_date=2026-01-05/b.parquet");
    }

    #[test]
    fn test_swap_stage_prefix() {
        assert_eq!(
            swap_stage_prefix(
                "processed/ingestion_date=2026-02-16/b.parquet",
                "processed/",
                "rejected/"
            ),
            "rejected/ingestion_date=2026-02-16/b.parquet"
        );
        assert_eq!(
            swap_stage_prefix("other/processed/b.parquet", "processed/", "rejected/"),
            "other/processed/b.parquet"
        );
    }
}
