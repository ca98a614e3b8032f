use crate::core::fragment_keys::{FragmentKeys, level_candidate};
use crate::core::reading::Reading;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A reading reduced to its capture instant and the gauge levels it could show.
///
/// `numbers` is deduplicated and iterates in ascending order. `attributes`
/// keeps the non-detection fields (e.g. `Image`) verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedReading {
    pub timestamp: DateTime<Utc>,
    pub numbers: BTreeSet<u8>,
    pub attributes: BTreeMap<String, String>,
}

impl NormalizedReading {
    pub fn new(timestamp: DateTime<Utc>, numbers: BTreeSet<u8>) -> Self {
        Self {
            timestamp,
            numbers,
            attributes: BTreeMap::new(),
        }
    }

    pub fn from_reading(timestamp: DateTime<Utc>, reading: &Reading, keys: &FragmentKeys) -> Self {
        let mut numbers = BTreeSet::new();
        let mut attributes = BTreeMap::new();

        for (key, value) in &reading.fragments {
            if !keys.is_detection_slot(key) {
                attributes.insert(key.clone(), value.clone());
            }
            if keys.is_ignored(key) {
                continue;
            }
            if let Some(n) = level_candidate(value) {
                numbers.insert(n);
            }
        }

        Self {
            timestamp,
            numbers,
            attributes,
        }
    }

    /// The only candidate, when there is exactly one.
    #[inline]
    pub fn single_number(&self) -> Option<u8> {
        if self.numbers.len() == 1 {
            self.numbers.first().copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 10, 20, 5, 41, 13).unwrap()
    }

    #[test]
    fn collects_distinct_candidates_from_both_shapes() {
        let r = Reading::new(Some("x"))
            .with_fragment("Text_3", "86")
            .with_fragment("Text_7", "86")
            .with_fragment("Text_8", "86%")
            .with_fragment("Text_9", "85%")
            .with_fragment("Text_0", "R26");
        let n = NormalizedReading::from_reading(ts(), &r, &FragmentKeys::default());
        assert_eq!(n.numbers.iter().copied().collect::<Vec<_>>(), vec![85, 86]);
        assert_eq!(n.single_number(), None);
    }

    #[test]
    fn ignored_keys_are_not_scanned_but_are_passed_through() {
        let r = Reading::new(Some("x"))
            .with_fragment("Image", "42")
            .with_fragment("Text_1", "87");
        let n = NormalizedReading::from_reading(ts(), &r, &FragmentKeys::default());
        assert_eq!(n.single_number(), Some(87));
        assert_eq!(n.attributes.get("Image").map(String::as_str), Some("42"));
        assert!(!n.attributes.contains_key("Text_1"));
    }

    #[test]
    fn non_detection_keys_are_still_scanned_unless_ignored() {
        let r = Reading::new(Some("x")).with_fragment("Camera", "12");
        let n = NormalizedReading::from_reading(ts(), &r, &FragmentKeys::default());
        assert_eq!(n.single_number(), Some(12));
        assert_eq!(n.attributes.get("Camera").map(String::as_str), Some("12"));
    }

    #[test]
    fn reading_without_candidates_is_kept_empty() {
        let r = Reading::new(Some("x"))
            .with_fragment("Text_0", "OUTDOOR")
            .with_fragment("Text_1", "8%");
        let n = NormalizedReading::from_reading(ts(), &r, &FragmentKeys::default());
        assert!(n.numbers.is_empty());
        assert_eq!(n.single_number(), None);
        assert_eq!(n.timestamp, ts());
    }

    #[test]
    fn custom_conventions_apply() {
        let keys = FragmentKeys::new("Det", vec!["Det_aux".into()]);
        let r = Reading::new(Some("x"))
            .with_fragment("Det_0", "55")
            .with_fragment("Det_aux_1", "66")
            .with_fragment("Text_0", "77");
        let n = NormalizedReading::from_reading(ts(), &r, &keys);
        assert_eq!(n.numbers.iter().copied().collect::<Vec<_>>(), vec![55, 77]);
        assert!(n.attributes.contains_key("Text_0"));
        assert!(!n.attributes.contains_key("Det_aux_1"));
    }
}
