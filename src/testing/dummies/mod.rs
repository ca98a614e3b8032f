mod readings;

pub use readings::{normalized_series, reading_at, series_origin};
