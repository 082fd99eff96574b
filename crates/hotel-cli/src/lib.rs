//! Library components of the `hotel-etl` runner.

pub mod logging;
pub mod pipeline;
