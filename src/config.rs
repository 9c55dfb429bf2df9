//! # Navigator Configuration
//!
//! Everything the navigator needs to know that is not a record: which path segment is the
//! listing, what the document titles say, which key dismisses an overlay, and whether the
//! application runs in development or production.
//!
//! Configuration comes from three layers, later layers winning:
//!
//! 1. [`NavigatorConfig::default`]
//! 2. A TOML document ([`NavigatorConfig::from_toml_str`] / [`NavigatorConfig::from_file`])
//! 3. `INTERCEPT_*` environment variables ([`NavigatorConfig::apply_env_overrides`])
//!
//! ```toml
//! listing_segment = "products"
//! app_title = "Routing Titbits"
//! environment = "production"
//! store_latency_ms = 250
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the application runs. Selects how strict the navigator is about inconsistencies and
/// how much a fault page reveals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn desync_policy(self) -> DesyncPolicy {
        match self {
            Environment::Development => DesyncPolicy::Fail,
            Environment::Production => DesyncPolicy::Ignore,
        }
    }

    /// Fault messages and digests are only shown to developers.
    pub fn exposes_fault_details(self) -> bool {
        self == Environment::Development
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue {
                key: "environment",
                value: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// What to do when an overlay close finds no intercepted history entry to step back over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesyncPolicy {
    /// Return `HistoryDesync` to the caller.
    Fail,
    /// Log a warning and leave history untouched.
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// First path segment of the listing and of every item address.
    pub listing_segment: String,
    /// Heading of the listing screen, also used in its document title.
    pub listing_title: String,
    /// Singular noun for one record, used by the section not-found page.
    pub record_label: String,
    pub app_title: String,
    /// Key name that dismisses an open overlay.
    pub dismiss_key: String,
    pub environment: Environment,
    /// Capacity of the navigator command channel and of the store request channel.
    pub command_buffer: usize,
    /// Simulated delay before the store answers a lookup.
    pub store_latency_ms: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            listing_segment: "listing".to_string(),
            listing_title: "Products".to_string(),
            record_label: "Product".to_string(),
            app_title: "Routing Titbits".to_string(),
            dismiss_key: "Escape".to_string(),
            environment: Environment::Development,
            command_buffer: 32,
            store_latency_ms: 0,
        }
    }
}

impl NavigatorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file, then apply environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&raw)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup. Blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|raw| !raw.trim().is_empty());

        if let Some(raw) = read("INTERCEPT_ENV") {
            self.environment = raw.parse()?;
        }
        if let Some(raw) = read("INTERCEPT_LISTING_SEGMENT") {
            self.listing_segment = raw.trim().to_string();
        }
        if let Some(raw) = read("INTERCEPT_DISMISS_KEY") {
            self.dismiss_key = raw.trim().to_string();
        }
        if let Some(raw) = read("INTERCEPT_STORE_LATENCY_MS") {
            self.store_latency_ms =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "INTERCEPT_STORE_LATENCY_MS",
                        value: raw.clone(),
                    })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listing_segment.is_empty() || self.listing_segment.contains('/') {
            return Err(ConfigError::Invalid(format!(
                "listing_segment must be a single path segment, got {:?}",
                self.listing_segment
            )));
        }
        if self.dismiss_key.is_empty() {
            return Err(ConfigError::Invalid("dismiss_key must not be empty".into()));
        }
        if self.command_buffer == 0 {
            return Err(ConfigError::Invalid("command_buffer must be at least 1".into()));
        }
        Ok(())
    }

    pub fn store_latency(&self) -> Duration {
        Duration::from_millis(self.store_latency_ms)
    }

    pub fn desync_policy(&self) -> DesyncPolicy {
        self.environment.desync_policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_valid() {
        let config = NavigatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.listing_segment, "listing");
        assert_eq!(config.dismiss_key, "Escape");
        assert_eq!(config.desync_policy(), DesyncPolicy::Fail);
    }

    #[test]
    fn toml_overrides_only_named_fields() {
        let config = NavigatorConfig::from_toml_str(
            r#"
            listing_segment = "products"
            environment = "production"
            store_latency_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.listing_segment, "products");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.store_latency(), Duration::from_millis(250));
        assert_eq!(config.app_title, "Routing Titbits");
        assert!(!config.environment.exposes_fault_details());
    }

    #[test]
    fn toml_rejects_nested_segment() {
        let err = NavigatorConfig::from_toml_str(r#"listing_segment = "a/b""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn toml_rejects_unknown_environment() {
        let err = NavigatorConfig::from_toml_str(r#"environment = "staging""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_overrides_apply_and_blank_values_are_skipped() {
        let vars: HashMap<&str, &str> = [
            ("INTERCEPT_ENV", "prod"),
            ("INTERCEPT_LISTING_SEGMENT", "products"),
            ("INTERCEPT_DISMISS_KEY", "  "),
            ("INTERCEPT_STORE_LATENCY_MS", "40"),
        ]
        .into_iter()
        .collect();

        let mut config = NavigatorConfig::default();
        config
            .apply_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.listing_segment, "products");
        assert_eq!(config.dismiss_key, "Escape");
        assert_eq!(config.store_latency_ms, 40);
        assert_eq!(config.desync_policy(), DesyncPolicy::Ignore);
    }

    #[test]
    fn env_override_with_bad_latency_is_an_error() {
        let mut config = NavigatorConfig::default();
        let err = config
            .apply_overrides(|name| {
                (name == "INTERCEPT_STORE_LATENCY_MS").then(|| "soon".to_string())
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "INTERCEPT_STORE_LATENCY_MS",
                ..
            }
        ));
    }
}
