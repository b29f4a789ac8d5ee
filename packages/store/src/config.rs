//! # Console configuration: `buildline.toml`
//!
//! Settings the web binary reads at start-up. The file is embedded at build
//! time; `BUILDLINE_API_URL` (also read at build time) overrides the API URL
//! so one source tree can target staging and production.
//!
//! ```toml
//! [api]
//! base_url = "https://api.buildline.ru/api/v1"
//!
//! [ui]
//! default_theme = "blue"
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every section has production defaults, so an empty file is valid.

use serde::{Deserialize, Serialize};

use crate::theme::ThemeName;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the REST API, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://api.buildline.ru/api/v1".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme used when nothing (or garbage) is stored.
    #[serde(default)]
    pub default_theme: ThemeName,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl ConsoleConfig {
    pub fn filename() -> &'static str {
        "buildline.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to override the API URL.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Applies `BUILDLINE_API_URL` if it was set when compiling.
    pub fn with_build_env(self) -> Self {
        match option_env!("BUILDLINE_API_URL") {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.log.level, "info");
        assert_eq!(config.ui.default_theme, ThemeName::Blue);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = ConsoleConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8000/api/v1/"

            [ui]
            default_theme = "teal"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.ui.default_theme, ThemeName::Teal);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(ConsoleConfig::from_toml("[ui]\ndefault_theme = \"pink\"").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ConsoleConfig::default().with_base_url("https://staging.buildline.ru/api/v1/");
        let parsed = ConsoleConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
