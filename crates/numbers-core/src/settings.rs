//! Dictionary settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub clock: ClockSettings,
    pub dictionary: DictionarySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClockSettings {
    pub am_suffix: String,
    pub pm_suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    /// Maximum number of strokes accepted in one outline.
    pub longest_key: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(clock.am_suffix);
    check_non_empty!(clock.pm_suffix);

    if s.dictionary.longest_key == 0 {
        return Err(SettingsError::InvalidValue {
            field: "dictionary.longest_key".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.clock.am_suffix, " a.m.");
        assert_eq!(s.clock.pm_suffix, " p.m.");
        assert_eq!(s.dictionary.longest_key, 20);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[clock]
am_suffix = "am"
pm_suffix = "pm"

[dictionary]
longest_key = 8
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.clock.am_suffix, "am");
        assert_eq!(s.dictionary.longest_key, 8);
    }

    #[test]
    fn error_empty_suffix() {
        let toml = r#"
[clock]
am_suffix = ""
pm_suffix = " p.m."

[dictionary]
longest_key = 20
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("clock.am_suffix"));
    }

    #[test]
    fn error_zero_longest_key() {
        let toml = r#"
[clock]
am_suffix = " a.m."
pm_suffix = " p.m."

[dictionary]
longest_key = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("dictionary.longest_key"));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[clock]
am_suffix = " a.m."
pm_suffix = " p.m."
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn global_settings_default() {
        assert_eq!(settings().dictionary.longest_key, 20);
    }
}
