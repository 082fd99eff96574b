//! Tests for Parquet payloads of classified batches.

use hotel_output::{decode_parquet, encode_parquet};
use polars::prelude::*;

fn rejected_rows() -> DataFrame {
    let checkin = Series::new("checkin_date".into(), [Some(1_771_200_000_000i64), None])
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .unwrap();
    DataFrame::new(vec![
        Series::new("nombre_hotel".into(), ["Hotel A", "Hotel B"]).into(),
        checkin.into(),
        Series::new("noches".into(), [Some(0i64), None]).into(),
        Series::new("precio_por_noche".into(), [Some(f64::INFINITY), Some(f64::NAN)]).into(),
        Series::new("calificacion".into(), [None, Some("")]).into(),
        Series::new("puntaje".into(), [None, Some(11.0)]).into(),
    ])
    .unwrap()
}

#[test]
fn non_finite_and_absent_values_survive_encoding() {
    let decoded = decode_parquet(&encode_parquet(&rejected_rows()).unwrap()).unwrap();

    let per_night = decoded.column("precio_por_noche").unwrap().f64().unwrap();
    assert_eq!(per_night.get(0), Some(f64::INFINITY));
    assert!(per_night.get(1).is_some_and(f64::is_nan));

    let rating = decoded.column("calificacion").unwrap().str().unwrap();
    assert_eq!(rating.get(0), None);
    assert_eq!(rating.get(1), Some(""));

    let score = decoded.column("puntaje").unwrap().f64().unwrap();
    assert_eq!(score.get(0), None);
}

#[test]
fn schema_is_preserved() {
    let df = rejected_rows();
    let decoded = decode_parquet(&encode_parquet(&df).unwrap()).unwrap();

    assert_eq!(decoded.get_column_names(), df.get_column_names());
    assert_eq!(
        decoded.column("checkin_date").unwrap().dtype(),
        &DataType::Datetime(TimeUnit::Milliseconds, None)
    );
    assert_eq!(decoded.column("noches").unwrap().dtype(), &DataType::Int64);
}

#[test]
fn empty_batch_encodes_to_a_readable_file() {
    let empty = rejected_rows().head(Some(0));
    let bytes = encode_parquet(&empty).unwrap();

    assert!(!bytes.is_empty());
    let decoded = decode_parquet(&bytes).unwrap();
    assert_eq!(decoded.height(), 0);
    assert_eq!(decoded.width(), 6);
}
