//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `libdash.toml` in the working directory unless a path is given.
//! Every field has a sensible default so the file is optional. Environment
//! variables take precedence over file values.

use std::path::Path;

use serde::Deserialize;

use libdash_adapter_http_reqwest::HttpConfig;
use libdash_app::dashboard::DashboardOptions;
use libdash_app::placeholder_quick_stats::PlaceholderQuickStats;
use libdash_app::slot::StalePolicy;
use libdash_domain::stats::QuickStats;

const DEFAULT_PATH: &str = "libdash.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Library API connection.
    pub api: HttpConfig,
    /// Dashboard behaviour.
    pub dashboard: DashboardConfig,
    /// Counters shown as today's activity.
    pub quick_stats: QuickStatsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Drop a response when a newer request for the same resource already
    /// completed, instead of applying responses in arrival order.
    pub discard_stale_responses: bool,
}

impl DashboardConfig {
    #[must_use]
    pub fn options(&self) -> DashboardOptions {
        DashboardOptions {
            stale_responses: if self.discard_stale_responses {
                StalePolicy::LatestRequestWins
            } else {
                StalePolicy::LastCompletionWins
            },
        }
    }
}

/// Fixed counters served until a real same-day activity source exists.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QuickStatsConfig {
    pub books_added: u64,
    pub books_borrowed: u64,
    pub books_returned: u64,
}

impl From<&QuickStatsConfig> for QuickStats {
    fn from(config: &QuickStatsConfig) -> Self {
        Self {
            books_added: config.books_added,
            books_borrowed: config.books_borrowed,
            books_returned: config.books_returned,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path`, or from `libdash.toml` if present,
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `path` cannot be read, if the file is
    /// malformed, or if the resulting values are invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_optional_file(Path::new(DEFAULT_PATH))?,
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    fn from_optional_file(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("LIBDASH_API_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("LIBDASH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Validation(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "api.base_url must be an http(s) URL, got {base_url:?}"
            )));
        }
        if self.api.timeout_secs == 0 || self.api.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api timeouts must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Quick stats source built from the configured counters.
    #[must_use]
    pub fn quick_stats_source(&self) -> PlaceholderQuickStats {
        PlaceholderQuickStats::new(QuickStats::from(&self.quick_stats))
    }
}

impl Default for QuickStatsConfig {
    fn default() -> Self {
        let stats = PlaceholderQuickStats::default().stats();
        Self {
            books_added: stats.books_added,
            books_borrowed: stats.books_borrowed,
            books_returned: stats.books_returned,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "libdash=info,libdash_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert!(!config.dashboard.discard_stale_responses);
        assert_eq!(config.quick_stats.books_added, 12);
        assert_eq!(config.quick_stats.books_borrowed, 8);
        assert_eq!(config.quick_stats.books_returned, 5);
        assert_eq!(config.logging.filter, "libdash=info,libdash_app=info");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.connect_timeout_secs, 5);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [api]
            base_url = 'https://library.example/api'
            timeout_secs = 30
            connect_timeout_secs = 3

            [dashboard]
            discard_stale_responses = true

            [quick_stats]
            books_added = 1
            books_borrowed = 2
            books_returned = 3

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "https://library.example/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.connect_timeout_secs, 3);
        assert_eq!(
            config.dashboard.options().stale_responses,
            StalePolicy::LatestRequestWins
        );
        assert_eq!(
            config.quick_stats_source().stats(),
            QuickStats {
                books_added: 1,
                books_borrowed: 2,
                books_returned: 3,
            }
        );
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [api]
            timeout_secs = 20
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.timeout_secs, 20);
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(
            config.dashboard.options().stale_responses,
            StalePolicy::LastCompletionWins
        );
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_default_file_not_found() {
        let config = Config::from_optional_file(Path::new("nonexistent.toml")).unwrap();
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn should_fail_when_explicit_file_not_found() {
        let result = Config::from_file(Path::new("nonexistent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| match key {
            "LIBDASH_API_URL" => Some("https://other.example/api".to_string()),
            "LIBDASH_LOG" => Some("libdash=debug".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "https://other.example/api");
        assert_eq!(config.logging.filter, "libdash=debug");
    }

    #[test]
    fn should_prefer_rust_log_over_libdash_log() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| match key {
            "LIBDASH_LOG" => Some("libdash=debug".to_string()),
            "RUST_LOG" => Some("trace".to_string()),
            _ => None,
        });
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_reject_empty_base_url() {
        let mut config = Config::default();
        config.api.base_url = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_non_http_base_url() {
        let mut config = Config::default();
        config.api.base_url = "ftp://library.example".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_timeout() {
        let mut config = Config::default();
        config.api.connect_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
