//! Object key discovery for ingestion directories.

/// Returns the directory prefix enclosing an object key, including the
/// trailing `/`.
///
/// Keys without any `/` live at the bucket root and yield an empty prefix.
pub fn directory_prefix(key: &str) -> &str {
    match key.rfind('/') {
        Some(idx) => &key[..=idx],
        None => "",
    }
}

/// Returns the batch name of a directory prefix: its last path segment.
///
/// `raw/ingestion_20260216_093000/` yields `ingestion_20260216_093000`.
pub fn batch_name(prefix: &str) -> Option<&str> {
    prefix
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
}

/// Returns true if the object key names a CSV file.
///
/// The suffix match is case-sensitive, mirroring the upstream producer which
/// always writes lowercase `.csv` objects.
pub fn is_csv_key(key: &str) -> bool {
    key.ends_with(".csv")
}

/// Selects the CSV keys of a listing, preserving listing order.
pub fn csv_keys<S: AsRef<str>>(keys: &[S]) -> Vec<String> {
    keys.iter()
        .map(AsRef::as_ref)
        .filter(|key| is_csv_key(key))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_prefix() {
        assert_eq!(
            directory_prefix("raw/ingestion_20260216_093000/offers.csv"),
            "raw/ingestion_20260216_093000/"
        );
        assert_eq!(directory_prefix("raw/offers.csv"), "raw/");
        assert_eq!(directory_prefix("offers.csv"), "");
    }

    #[test]
    fn test_batch_name() {
        assert_eq!(
            batch_name("raw/ingestion_20260216_093000/"),
            Some("ingestion_20260216_093000")
        );
        assert_eq!(batch_name("ingestion_20260216_093000"), Some("ingestion_20260216_093000"));
        assert_eq!(batch_name(""), None);
        assert_eq!(batch_name("/"), None);
    }

    #[test]
    fn test_csv_keys_filters_and_keeps_order() {
        let keys = vec![
            "raw/ingestion_20260216_093000/b.csv",
            "raw/ingestion_20260216_093000/_SUCCESS",
            "raw/ingestion_20260216_093000/a.csv",
            "raw/ingestion_20260216_093000/notes.CSV",
            "raw/ingestion_20260216_093000/c.csv.tmp",
        ];
        assert_eq!(
            csv_keys(&keys),
            vec![
                "raw/ingestion_20260216_093000/b.csv".to_string(),
                "raw/ingestion_20260216_093000/a.csv".to_string(),
            ]
        );
    }
}
