//! Column names of raw and enriched listing batches.
//!
//! Source names are the header row written by the upstream scraper and are
//! part of the storage contract; they are kept verbatim. Passthrough columns
//! (hotel name, detail link) are never read and have no constant.

/// Free-text location, e.g. `Palermo, Buenos Aires (Palermo Soho)`.
pub const LOCATION: &str = "ubicacion";
/// Check-in date; parsed to a datetime.
pub const CHECKIN_DATE: &str = "checkin_date";
/// Check-out date; parsed to a datetime.
pub const CHECKOUT_DATE: &str = "checkout_date";
/// Price before taxes.
pub const INITIAL_PRICE: &str = "precio_inicial";
/// Tax amount.
pub const TAX_PRICE: &str = "precio_impuesto";
/// Total price of the stay.
pub const FINAL_PRICE: &str = "precio_final";
/// Rating label, e.g. `Muy bueno`.
pub const RATING_LABEL: &str = "calificacion";
/// Numeric review score.
pub const SCORE: &str = "puntaje";
/// Number of reviews.
pub const REVIEW_COUNT: &str = "cantidad_reviews";

/// Length of stay in whole days.
pub const NIGHTS: &str = "noches";
/// Final price divided by nights.
pub const PRICE_PER_NIGHT: &str = "precio_por_noche";
/// First comma-separated segment of the location.
pub const NEIGHBORHOOD: &str = "barrio";
/// Parenthesized part of the location.
pub const SUB_NEIGHBORHOOD: &str = "sub_barrio";
/// Constant city of the listing source.
pub const CITY: &str = "ciudad";

/// Columns the transformation reads.
pub const REQUIRED_COLUMNS: &[&str] = &[
    LOCATION,
    CHECKIN_DATE,
    CHECKOUT_DATE,
    INITIAL_PRICE,
    TAX_PRICE,
    FINAL_PRICE,
    RATING_LABEL,
    SCORE,
    REVIEW_COUNT,
];

/// Columns appended by the transformation, in output order.
pub const DERIVED_COLUMNS: &[&str] = &[
    NIGHTS,
    PRICE_PER_NIGHT,
    NEIGHBORHOOD,
    SUB_NEIGHBORHOOD,
    CITY,
];
