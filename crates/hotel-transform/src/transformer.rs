//! Listing batch transformation.
//!
//! Applies the normalization functions column by column to a copy of the
//! batch, then appends the derived columns.

use chrono::NaiveDateTime;
use hotel_common::text_column;
use polars::prelude::*;
use tracing::debug;

use crate::columns::{
    CHECKIN_DATE, CHECKOUT_DATE, CITY, FINAL_PRICE, INITIAL_PRICE, LOCATION, NEIGHBORHOOD,
    NIGHTS, PRICE_PER_NIGHT, RATING_LABEL, REQUIRED_COLUMNS, REVIEW_COUNT, SCORE,
    SUB_NEIGHBORHOOD, TAX_PRICE,
};
use crate::error::{Result, TransformError};
use crate::normalization::datetime::epoch_millis;
use crate::normalization::{
    is_missing, neighborhood, nights_between, normalize_rating_label, parse_price,
    parse_review_count, parse_score, parse_stay_date, sub_neighborhood,
};

/// City every listing of the scraped source belongs to.
pub const DEFAULT_CITY: &str = "Buenos Aires";

/// Transforms raw listing batches into enriched batches.
///
/// The transformer is stateless apart from the city constant written to the
/// `ciudad` column, so one instance can be shared across batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTransformer {
    city: String,
}

impl Default for ListingTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}

impl ListingTransformer {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Normalize and enrich a batch.
    ///
    /// The input is not modified. Source columns keep their position with
    /// normalized types; `noches`, `precio_por_noche`, `barrio`, `sub_barrio`
    /// and `ciudad` are appended in that order.
    ///
    /// # Errors
    ///
    /// - [`TransformError::MissingColumn`] if a column the transformation reads is absent
    /// - [`TransformError::DateParse`] if a non-blank date is not a date
    /// - [`TransformError::PriceCast`] if a non-blank price is not numeric
    pub fn transform(&self, raw: &DataFrame) -> Result<DataFrame> {
        ensure_columns(raw)?;
        let height = raw.height();
        debug!(rows = height, city = %self.city, "Transforming listing batch");

        let checkins = stay_dates(raw, CHECKIN_DATE)?;
        let checkouts = stay_dates(raw, CHECKOUT_DATE)?;
        let initial_prices = prices(raw, INITIAL_PRICE)?;
        let tax_prices = prices(raw, TAX_PRICE)?;
        let final_prices = prices(raw, FINAL_PRICE)?;

        let nights: Vec<Option<i64>> = checkins
            .iter()
            .zip(&checkouts)
            .map(|(checkin, checkout)| match (checkin, checkout) {
                (Some(checkin), Some(checkout)) => Some(nights_between(*checkin, *checkout)),
                _ => None,
            })
            .collect();

        // IEEE division: zero nights gives inf or NaN, left for classification.
        let price_per_night: Vec<Option<f64>> = final_prices
            .iter()
            .zip(&nights)
            .map(|(price, nights)| match (price, nights) {
                (Some(price), Some(nights)) => Some(price / *nights as f64),
                _ => None,
            })
            .collect();

        let ratings: Vec<Option<String>> = text_column(raw, RATING_LABEL)?
            .into_iter()
            .map(normalize_rating_label)
            .collect();

        let scores: Vec<Option<f64>> = text_column(raw, SCORE)?
            .into_iter()
            .map(parse_score)
            .collect();

        let review_counts: Vec<i64> = text_column(raw, REVIEW_COUNT)?
            .into_iter()
            .map(parse_review_count)
            .collect();

        let locations = text_column(raw, LOCATION)?;
        let neighborhoods: Vec<Option<String>> = locations
            .into_iter()
            .map(|location| location.map(neighborhood))
            .collect();
        let sub_neighborhoods: Vec<String> = locations
            .into_iter()
            .map(|location| location.map(sub_neighborhood).unwrap_or_default())
            .collect();

        let mut enriched = raw.clone();
        enriched.with_column(datetime_series(CHECKIN_DATE, &checkins)?)?;
        enriched.with_column(datetime_series(CHECKOUT_DATE, &checkouts)?)?;
        enriched.with_column(Series::new(INITIAL_PRICE.into(), initial_prices))?;
        enriched.with_column(Series::new(TAX_PRICE.into(), tax_prices))?;
        enriched.with_column(Series::new(FINAL_PRICE.into(), final_prices))?;
        enriched.with_column(Series::new(RATING_LABEL.into(), ratings))?;
        enriched.with_column(Series::new(SCORE.into(), scores))?;
        enriched.with_column(Series::new(REVIEW_COUNT.into(), review_counts))?;

        enriched.with_column(Series::new(NIGHTS.into(), nights))?;
        enriched.with_column(Series::new(PRICE_PER_NIGHT.into(), price_per_night))?;
        enriched.with_column(Series::new(NEIGHBORHOOD.into(), neighborhoods))?;
        enriched.with_column(Series::new(SUB_NEIGHBORHOOD.into(), sub_neighborhoods))?;
        enriched.with_column(Series::new(
            CITY.into(),
            vec![self.city.as_str(); height],
        ))?;

        debug!(
            rows = enriched.height(),
            columns = enriched.width(),
            "Listing batch transformed"
        );
        Ok(enriched)
    }
}

/// Transform a batch with the default city.
pub fn transform_listings(raw: &DataFrame) -> Result<DataFrame> {
    ListingTransformer::default().transform(raw)
}

fn ensure_columns(df: &DataFrame) -> Result<()> {
    for &column in REQUIRED_COLUMNS {
        if df.column(column).is_err() {
            return Err(TransformError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn stay_dates(df: &DataFrame, column: &str) -> Result<Vec<Option<NaiveDateTime>>> {
    let values = text_column(df, column)?;
    let mut parsed = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let date = match value {
            None => None,
            Some(text) if is_missing(text) => None,
            Some(text) => Some(parse_stay_date(text).ok_or_else(|| {
                TransformError::DateParse {
                    column: column.to_string(),
                    row,
                    value: text.to_string(),
                }
            })?),
        };
        parsed.push(date);
    }
    Ok(parsed)
}

fn prices(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    let values = text_column(df, column)?;
    let mut parsed = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let price = match value {
            None => None,
            Some(text) => parse_price(text).map_err(|bad| TransformError::PriceCast {
                column: column.to_string(),
                row,
                value: bad.to_string(),
            })?,
        };
        parsed.push(price);
    }
    Ok(parsed)
}

fn datetime_series(name: &str, values: &[Option<NaiveDateTime>]) -> Result<Series> {
    let millis: Vec<Option<i64>> = values
        .iter()
        .map(|value| value.map(epoch_millis))
        .collect();
    let series = Series::new(name.into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::DERIVED_COLUMNS;

    fn raw_batch() -> DataFrame {
        df! {
            "nombre_hotel" => ["Hotel Uno"],
            "ubicacion" => ["Palermo, Buenos Aires (Palermo Soho)"],
            "checkin_date" => ["2026-02-16"],
            "checkout_date" => ["2026-02-18"],
            "precio_inicial" => ["240000.0"],
            "precio_impuesto" => ["27325.0"],
            "precio_final" => ["267325.0"],
            "calificacion" => ["Muy bueno"],
            "puntaje" => ["8.5"],
            "cantidad_reviews" => ["120"],
            "link_detalle" => ["https://example.com/hotel-uno"],
        }
        .unwrap()
    }

    #[test]
    fn test_default_city() {
        assert_eq!(ListingTransformer::default().city(), DEFAULT_CITY);
        assert_eq!(ListingTransformer::new("Rosario").city(), "Rosario");
    }

    #[test]
    fn test_transform_appends_derived_columns() {
        let enriched = transform_listings(&raw_batch()).unwrap();
        let names: Vec<String> = enriched
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names.len(), 16);
        assert_eq!(&names[11..], DERIVED_COLUMNS);
        assert_eq!(names[0], "nombre_hotel");
        assert_eq!(names[10], "link_detalle");
    }

    #[test]
    fn test_transform_uses_configured_city() {
        let enriched = ListingTransformer::new("Rosario")
            .transform(&raw_batch())
            .unwrap();
        let city = enriched.column("ciudad").unwrap().str().unwrap().get(0);
        assert_eq!(city, Some("Rosario"));
    }

    #[test]
    fn test_missing_column() {
        let raw = raw_batch().drop("puntaje").unwrap();
        let err = transform_listings(&raw).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn { column } if column == "puntaje"));
    }

    #[test]
    fn test_blank_dates_give_null_nights() {
        let mut raw = raw_batch();
        raw.with_column(Series::new("checkout_date".into(), [None::<&str>]))
            .unwrap();
        let enriched = transform_listings(&raw).unwrap();
        assert_eq!(enriched.column("noches").unwrap().null_count(), 1);
        assert_eq!(enriched.column("precio_por_noche").unwrap().null_count(), 1);
    }
}
