use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::default_latest_year;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "finhealth.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub log_file: PathBuf,
    pub latest_year: i32,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            latest_year: default_latest_year(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from any key lookup, falling back to defaults
    /// for missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = lookup("FINHEALTH_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let timeout = lookup("FINHEALTH_API_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(defaults.timeout, Duration::from_secs);

        let log_file = lookup("FINHEALTH_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map_or(defaults.log_file, PathBuf::from);

        let latest_year = lookup("FINHEALTH_LATEST_YEAR")
            .and_then(|year| year.trim().parse::<i32>().ok())
            .unwrap_or(defaults.latest_year);

        let debug = lookup("DEBUG").is_some_and(|value| {
            matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
        });

        Self {
            api_url,
            timeout,
            log_file,
            latest_year,
            debug,
        }
    }
}

/// Loads `.env` (if any) and returns the resulting configuration.
pub fn init_app_config() -> AppConfig {
    // A missing .env file is normal
    dotenv().ok();
    AppConfig::from_env()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.latest_year, default_latest_year());
        assert!(!config.debug);
    }

    #[test]
    fn environment_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("FINHEALTH_API_URL", "https://api.example.com"),
            ("FINHEALTH_API_TIMEOUT_SECS", "5"),
            ("FINHEALTH_LOG_FILE", "/tmp/dash.log"),
            ("FINHEALTH_LATEST_YEAR", "2023"),
            ("DEBUG", "1"),
        ]));

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.log_file, PathBuf::from("/tmp/dash.log"));
        assert_eq!(config.latest_year, 2023);
        assert!(config.debug);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("FINHEALTH_API_URL", "   "),
            ("FINHEALTH_API_TIMEOUT_SECS", "0"),
            ("FINHEALTH_LATEST_YEAR", "last year"),
            ("DEBUG", "nope"),
        ]));

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.latest_year, default_latest_year());
        assert!(!config.debug);
    }
}
