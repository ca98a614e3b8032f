use crate::core::{NormalizedReading, Reading};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// A reading at `ts` whose detection slots hold `texts` as `Text_0..`.
pub fn reading_at(ts: &str, texts: &[&str]) -> Reading {
    texts
        .iter()
        .enumerate()
        .fold(Reading::new(Some(ts)), |r, (i, t)| {
            r.with_fragment(format!("Text_{i}"), *t)
        })
}

pub fn series_origin() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 10, 20, 12, 0, 0).unwrap()
}

/// Normalized readings one hour apart, newest first, with the given candidates.
pub fn normalized_series(numbers: &[&[u8]]) -> Vec<NormalizedReading> {
    numbers
        .iter()
        .enumerate()
        .map(|(i, ns)| {
            NormalizedReading::new(
                series_origin() - TimeDelta::hours(i as i64),
                ns.iter().copied().collect(),
            )
        })
        .collect()
}
