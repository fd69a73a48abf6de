use std::fs;

use steno_numbers::settings::{self, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Install custom settings from `file` before any lookup runs.
pub fn load_settings(file: &str) -> Result<(), ConfigError> {
    let content = fs::read_to_string(file).map_err(|source| ConfigError::Read {
        path: file.to_string(),
        source,
    })?;
    settings::init_custom(content)?;
    Ok(())
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: clock.am_suffix={:?}, clock.pm_suffix={:?}, dictionary.longest_key={}",
        s.clock.am_suffix, s.clock.pm_suffix, s.dictionary.longest_key
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_read_error() {
        let err = load_settings("/nonexistent/numbers-settings.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("numbers-settings.toml"));
    }
}
