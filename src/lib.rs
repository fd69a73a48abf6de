//! Steno number dictionary.
//!
//! Wraps the number formatter in the shape a steno engine expects from a
//! dictionary: a maximum outline length, lookup by stroke list or by
//! `/`-separated outline, and an (always empty) reverse lookup.

pub mod trace_init;

use tracing::debug;

pub use numbers_core::settings::{self, Settings, SettingsError};
pub use numbers_core::{digits, roman, stroke, words};
pub use numbers_core::{lookup_with, LookupError, NotFoundReason};

/// Separator between strokes in an outline string.
pub const STROKE_SEPARATOR: &str = "/";

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// A number dictionary bound to one set of settings.
#[derive(Debug, Clone)]
pub struct NumbersDictionary {
    settings: Settings,
}

impl Default for NumbersDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl NumbersDictionary {
    /// Dictionary using the global settings.
    pub fn new() -> Self {
        Self::with_settings(settings::settings().clone())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Longest outline, in strokes, this dictionary can translate.
    pub fn longest_key(&self) -> usize {
        self.settings.dictionary.longest_key
    }

    pub fn lookup<S: AsRef<str>>(&self, strokes: &[S]) -> Result<String, LookupError> {
        if strokes.is_empty() || strokes.len() > self.longest_key() {
            debug!(strokes = strokes.len(), "outline length out of range");
            let outline = strokes
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<&str>>()
                .join(STROKE_SEPARATOR);
            return Err(LookupError::not_found(
                outline,
                NotFoundReason::OutlineLength(strokes.len()),
            ));
        }
        lookup_with(strokes, &self.settings)
    }

    /// Look up an outline written as `"12/3KR"`.
    pub fn lookup_outline(&self, outline: &str) -> Result<String, LookupError> {
        let strokes = split_outline(outline);
        self.lookup(&strokes)
    }

    /// Number translations are generated, never stored, so no outline maps
    /// back from a translation.
    pub fn reverse_lookup(&self, _translation: &str) -> Vec<Vec<String>> {
        Vec::new()
    }
}

/// Split an outline string into strokes. An empty outline has no strokes.
pub fn split_outline(outline: &str) -> Vec<&str> {
    if outline.is_empty() {
        return Vec::new();
    }
    outline.split(STROKE_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dict_with_longest_key(longest_key: usize) -> NumbersDictionary {
        let mut s = settings::parse_settings_toml(settings::DEFAULT_SETTINGS_TOML).unwrap();
        s.dictionary.longest_key = longest_key;
        NumbersDictionary::with_settings(s)
    }

    #[test]
    fn test_default_longest_key() {
        assert_eq!(NumbersDictionary::new().longest_key(), 20);
    }

    #[test]
    fn test_lookup_outline() {
        let dict = NumbersDictionary::new();
        assert_eq!(dict.lookup_outline("12/3KR").unwrap(), "123%");
        assert_eq!(dict.lookup_outline("1/2/#R").unwrap(), "XII");
        assert_eq!(dict.lookup_outline("5RB/3").unwrap(), "$5 3");
    }

    #[test]
    fn test_empty_outline_not_found() {
        let dict = NumbersDictionary::new();
        let err = dict.lookup_outline("").unwrap_err();
        assert_eq!(err.reason(), &NotFoundReason::OutlineLength(0));
    }

    #[test]
    fn test_empty_stroke_segment_not_found() {
        let dict = NumbersDictionary::new();
        let err = dict.lookup_outline("1//2").unwrap_err();
        assert_eq!(err.reason(), &NotFoundReason::InvalidStroke);
    }

    #[test]
    fn test_outline_too_long() {
        let dict = dict_with_longest_key(3);
        assert_eq!(dict.lookup(&["1", "2", "3"]).unwrap(), "123");
        let err = dict.lookup(&["1", "2", "3", "4"]).unwrap_err();
        assert_eq!(err.reason(), &NotFoundReason::OutlineLength(4));
        assert!(err.to_string().contains("1/2/3/4"));
    }

    #[test]
    fn test_reverse_lookup_empty() {
        assert!(NumbersDictionary::new().reverse_lookup("123%").is_empty());
    }

    #[test]
    fn test_split_outline() {
        assert_eq!(split_outline("1/2KR"), vec!["1", "2KR"]);
        assert_eq!(split_outline("#R"), vec!["#R"]);
        assert!(split_outline("").is_empty());
    }

    proptest! {
        #[test]
        fn split_then_join_is_identity(strokes in prop::collection::vec("[0-9A-Z#*-]{1,5}", 1..6)) {
            let outline = strokes.join(STROKE_SEPARATOR);
            prop_assert_eq!(split_outline(&outline), strokes);
        }
    }
}
