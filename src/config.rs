//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$MAILSTAMP_CONFIG` (environment variable)
//! 2. `~/.config/mailstamp/config.toml` (Linux/macOS)
//!    `%APPDATA%\mailstamp\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
    /// Email header block formatting.
    pub header: HeaderConfig,
    /// Input validation rules.
    pub validation: ValidationConfig,
    /// TUI behavior.
    pub ui: UiConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default path to the project directory JSON file.
    pub directory_path: Option<PathBuf>,
    /// Override cache directory for the category registry and logs.
    pub cache_dir: Option<PathBuf>,
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

/// Date style used in the generated header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `January 5, 2025`
    Long,
    /// `01/05/2025`
    Short,
    /// `2025-01-05`
    Iso,
}

/// Email header block formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Character repeated to form divider lines.
    pub divider_char: char,
    /// Number of divider characters per line.
    pub divider_length: usize,
    /// Date style for the `Date:` line.
    pub date_style: DateStyle,
}

/// Input validation rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length of the free-text subject suffix.
    pub max_custom_subject_length: usize,
}

/// TUI behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds before a success status message auto-dismisses.
    pub status_timeout_secs: u64,
}

// ── Default implementations ─────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            directory_path: None,
            cache_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            divider_char: '━',
            divider_length: 40,
            date_style: DateStyle::Long,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_custom_subject_length: 100,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_timeout_secs: 5,
        }
    }
}

// ── Loading ─────────────────────────────────────────────────────

/// Load configuration from `path_override`, or search the standard
/// locations when none is given.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config(path_override: Option<&Path>) -> Config {
    let path = match path_override {
        Some(p) => Some(p.to_path_buf()),
        None => config_file_path(),
    };
    if let Some(path) = path {
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<Config>(&contents) {
                    Ok(cfg) => {
                        tracing::info!(path = %path.display(), "Loaded config");
                        return cfg;
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Failed to parse config, using defaults"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to read config file, using defaults"
                    );
                }
            }
        }
    }
    Config::default()
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    // 1. Environment variable override
    if let Ok(env_path) = std::env::var("MAILSTAMP_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    // 2. Standard config directory
    dirs::config_dir().map(|d| d.join("mailstamp").join("config.toml"))
}

/// Return the cache directory for the category registry, logs, etc.
pub fn cache_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.general.cache_dir {
        return dir.clone();
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailstamp")
}

/// Return the category registry file path.
pub fn registry_file_path(config: &Config) -> PathBuf {
    crate::host::registry::registry_path(&cache_dir(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.general.log_level, "warn");
        assert_eq!(cfg.header.divider_char, '━');
        assert_eq!(cfg.header.divider_length, 40);
        assert_eq!(cfg.header.date_style, DateStyle::Long);
        assert_eq!(cfg.validation.max_custom_subject_length, 100);
        assert_eq!(cfg.ui.status_timeout_secs, 5);
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.header.divider_length, cfg.header.divider_length);
        assert_eq!(parsed.general.log_level, cfg.general.log_level);
        assert_eq!(
            parsed.validation.max_custom_subject_length,
            cfg.validation.max_custom_subject_length
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let partial = r#"
[header]
divider_char = "-"
divider_length = 20

[validation]
max_custom_subject_length = 60
"#;
        let cfg: Config = toml::from_str(partial).expect("parse partial");
        assert_eq!(cfg.header.divider_char, '-');
        assert_eq!(cfg.header.divider_length, 20);
        assert_eq!(cfg.validation.max_custom_subject_length, 60);
        // Other fields use defaults
        assert_eq!(cfg.general.log_level, "warn");
        assert_eq!(cfg.ui.status_timeout_secs, 5);
    }

    #[test]
    fn test_load_config_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nstatus_timeout_secs = 9\n").unwrap();
        let cfg = load_config(Some(&path));
        assert_eq!(cfg.ui.status_timeout_secs, 9);
        // Missing override falls back to defaults
        let cfg = load_config(Some(&dir.path().join("missing.toml")));
        assert_eq!(cfg.ui.status_timeout_secs, 5);
    }

    #[test]
    fn test_date_style_parses_lowercase() {
        let cfg: Config =
            toml::from_str("[header]\ndate_style = \"iso\"\n").expect("parse date style");
        assert_eq!(cfg.header.date_style, DateStyle::Iso);
    }
}
