use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::core::{Reading, parse_timestamp};

/// Closed interval `[start, end]` of capture instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The `span` leading up to and including `end`. A span reaching past the
    /// earliest representable instant starts there instead.
    pub fn ending_at(end: DateTime<Utc>, span: TimeDelta) -> Self {
        Self {
            start: end
                .checked_sub_signed(span)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            end,
        }
    }

    #[inline]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Whether the reading's capture instant lies in the window. Readings
    /// without a parsable instant are never inside.
    pub fn admits(&self, reading: &Reading) -> bool {
        reading
            .upload_timestamp
            .as_deref()
            .and_then(parse_timestamp)
            .is_some_and(|ts| self.contains(ts))
    }
}
