//! Configuration management for vtdocs.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::theme::Theme;
use crate::widgets::DEFAULT_COPY_REVERT;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the user config directory.
const APP_DIR_NAME: &str = "vtdocs";

/// Environment variable prefix.
const ENV_PREFIX: &str = "VTDOCS_";

/// Default output directory for `vtdocs build`.
const DEFAULT_OUTPUT_DIR: &str = "site";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `VTDOCS_`, sections split on `__`,
///    e.g. `VTDOCS_SITE__BASE_PATH`)
/// 2. TOML config file at `~/.config/vtdocs/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Widget configuration.
    pub widgets: WidgetsConfig,
}

/// Site-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Product name in the header and page titles.
    pub title: String,
    /// Path the site is mounted at. Must start with `/`.
    pub base_path: String,
    /// Where `build` writes pages.
    /// Defaults to `./site`
    pub output_dir: Option<PathBuf>,
}

/// Theme settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme pages open in.
    pub default: Theme,
}

/// Code widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    /// How long "Copied!" stays up, in milliseconds.
    pub copy_revert_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Velora Connected Vehicles API".to_string(),
            base_path: "/api-docs".to_string(),
            output_dir: None, // Resolved at runtime
        }
    }
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            copy_revert_ms: u64::try_from(DEFAULT_COPY_REVERT.as_millis()).unwrap_or(2000),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and the environment apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(Error::config_validation("site.title must not be empty"));
        }

        if !self.site.base_path.starts_with('/') {
            return Err(Error::ConfigValidation {
                message: format!(
                    "site.base_path must start with '/' (got '{}')",
                    self.site.base_path
                ),
            });
        }

        if self.site.base_path.contains(char::is_whitespace) {
            return Err(Error::config_validation(
                "site.base_path must not contain whitespace",
            ));
        }

        if self.widgets.copy_revert_ms == 0 {
            return Err(Error::config_validation(
                "widgets.copy_revert_ms must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Get the output directory, resolving the default if not set.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.site
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Get the copy acknowledgment duration.
    #[must_use]
    pub fn copy_revert(&self) -> Duration {
        Duration::from_millis(self.widgets.copy_revert_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.site.title, "Velora Connected Vehicles API");
        assert_eq!(config.site.base_path, "/api-docs");
        assert!(config.site.output_dir.is_none());
        assert_eq!(config.theme.default, Theme::Light);
        assert_eq!(config.widgets.copy_revert_ms, 2000);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_relative_base_path() {
        let mut config = Config::default();
        config.site.base_path = "api-docs".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("base_path"));
    }

    #[test]
    fn test_validate_root_base_path() {
        let mut config = Config::default();
        config.site.base_path = "/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_copy_revert() {
        let mut config = Config::default();
        config.widgets.copy_revert_ms = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("copy_revert_ms"));
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default();
        config.site.title = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_dir() {
        let mut config = Config::default();
        assert_eq!(config.output_dir(), PathBuf::from("site"));

        config.site.output_dir = Some(PathBuf::from("/tmp/docs"));
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/docs"));
    }

    #[test]
    fn test_copy_revert() {
        let config = Config::default();
        assert_eq!(config.copy_revert(), Duration::from_millis(2000));
        assert_eq!(config.copy_revert(), DEFAULT_COPY_REVERT);
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("vtdocs"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.site.base_path, Config::default().site.base_path);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[site]\nbase_path = \"/docs\"\n\n[theme]\ndefault = \"dark\"\n\n[widgets]\ncopy_revert_ms = 1500\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.site.base_path, "/docs");
        assert_eq!(config.theme.default, Theme::Dark);
        assert_eq!(config.copy_revert(), Duration::from_millis(1500));
    }

    #[test]
    fn test_load_single_section_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[widgets]\ncopy_revert_ms = 900\n").unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.widgets.copy_revert_ms, 900);
        assert_eq!(config.site, Config::default().site);
        assert_eq!(config.theme.default, Theme::Light);
    }

    #[test]
    fn test_load_invalid_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[widgets]\ncopy_revert_ms = 0\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\ndefault = \"sepia\"\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("base_path"));
        assert!(json.contains("\"default\":\"light\""));
    }

    #[test]
    fn test_widgets_config_deserialize() {
        let widgets: WidgetsConfig = serde_json::from_str(r#"{"copy_revert_ms": 750}"#).unwrap();
        assert_eq!(widgets.copy_revert_ms, 750);
    }
}
