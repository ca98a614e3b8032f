mod fragment_keys;
mod normalized_reading;
mod reading;
mod timestamp;

pub use fragment_keys::{
    DEFAULT_IGNORED_PREFIXES, DEFAULT_TEXT_PREFIX, FragmentKeys, level_candidate,
};
pub use normalized_reading::NormalizedReading;
pub use reading::{Reading, UPLOAD_DATE_KEY};
pub use timestamp::parse_timestamp;
