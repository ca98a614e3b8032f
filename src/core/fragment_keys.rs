use serde::{Deserialize, Serialize};

pub const DEFAULT_TEXT_PREFIX: &str = "Text";
pub const DEFAULT_IGNORED_PREFIXES: [&str; 1] = ["Image"];

/// Naming conventions for the keys of a [`Reading`](crate::core::Reading).
///
/// - keys starting with `text_prefix` are OCR detection slots; every other key
///   is metadata carried through to the normalized reading;
/// - keys starting with any of `ignored_prefixes` are never scanned for level
///   candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentKeys {
    pub text_prefix: String,
    pub ignored_prefixes: Vec<String>,
}

impl FragmentKeys {
    pub fn new<P: Into<String>>(text_prefix: P, ignored_prefixes: Vec<String>) -> Self {
        Self {
            text_prefix: text_prefix.into(),
            ignored_prefixes,
        }
    }

    #[inline]
    pub fn is_detection_slot(&self, key: &str) -> bool {
        key.starts_with(self.text_prefix.as_str())
    }

    #[inline]
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignored_prefixes
            .iter()
            .any(|p| key.starts_with(p.as_str()))
    }
}

impl Default for FragmentKeys {
    fn default() -> Self {
        Self::new(
            DEFAULT_TEXT_PREFIX,
            DEFAULT_IGNORED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        )
    }
}

/// Reads a gauge level out of a single text fragment.
///
/// Only two shapes qualify: exactly two ASCII digits (`"86"`), or exactly two
/// ASCII digits followed by a percent sign (`"86%"`). Anything else, including
/// `"8%"`, `"866"` and `"8a"`, yields `None`.
pub fn level_candidate(text: &str) -> Option<u8> {
    let chars: Vec<char> = text.chars().collect();
    let digits = match chars.as_slice() {
        [a, b, '%'] => [*a, *b],
        [a, b] => [*a, *b],
        _ => return None,
    };

    let tens = digits[0].to_digit(10)?;
    let units = digits[1].to_digit(10)?;
    Some((tens * 10 + units) as u8)
}
