//! Tests for reading staged listing objects.

use hotel_ingest::{IngestionDirectory, csv_keys, read_csv_bytes};

const LISTING: &str = "\
nombre_hotel,ubicacion,checkin_date,checkout_date,precio_inicial,precio_impuesto,precio_final,calificacion,puntaje,cantidad_reviews,link_detalle
Hotel A,\"Palermo, Buenos Aires (Palermo Soho)\",2026-02-16,2026-02-18,100000.0,30000.0,130000.0,Muy bueno,8.5,120,https://www.booking.com/hotel/ar/hotel-a.html
Hotel B,\"Recoleta, Buenos Aires\",2026-03-01,2026-03-05,250000.0,80000.0,330000.0,,,,https://www.booking.com/hotel/ar/hotel-b.html
";

#[test]
fn reads_listing_rows_as_text() {
    let df = read_csv_bytes("raw/ingestion_20260216_093000/offers.csv", LISTING.as_bytes())
        .expect("read listing");

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 11);

    let score = df.column("puntaje").unwrap().str().unwrap();
    assert_eq!(score.get(0), Some("8.5"));
    assert_eq!(score.get(1), None);

    let reviews = df.column("cantidad_reviews").unwrap().str().unwrap();
    assert_eq!(reviews.get(0), Some("120"));
    assert_eq!(reviews.get(1), None);
}

#[test]
fn selects_csv_objects_of_an_ingestion_directory() {
    let listed = vec![
        "raw/ingestion_20260216_093000/part-0.csv".to_string(),
        "raw/ingestion_20260216_093000/manifest.json".to_string(),
        "raw/ingestion_20260216_093000/part-1.csv".to_string(),
    ];
    let dir = IngestionDirectory::from_object_key(&listed[0]).expect("ingestion directory");

    assert_eq!(dir.batch_name, "ingestion_20260216_093000");
    assert_eq!(
        csv_keys(&listed),
        vec![
            "raw/ingestion_20260216_093000/part-0.csv".to_string(),
            "raw/ingestion_20260216_093000/part-1.csv".to_string(),
        ]
    );
}
