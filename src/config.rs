//! Configuration management and validation.
//!
//! Provides the page source and output settings, layered from built-in
//! defaults, an optional TOML file, and `MODEM_STATS_*` environment
//! variables. Command-line flags are applied last by the CLI.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_MEASUREMENT, DEFAULT_PAGE_URL,
    DEFAULT_TIMEOUT_SECS, MEASUREMENT_FORBIDDEN_CHARS, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Where and how the status page is fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Status page URL on the modem
    pub url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PAGE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// How records are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Line protocol measurement name
    pub measurement: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            measurement: DEFAULT_MEASUREMENT.to_string(),
        }
    }
}

/// Complete tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from defaults, a TOML file and the environment
    ///
    /// An explicit `path` must exist. Without one, the per-user config file
    /// is read when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config: Config = toml::from_str(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Per-user configuration file location, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(env_vars::URL) {
            debug!("{} overrides source.url", env_vars::URL);
            self.source.url = url;
        }

        if let Some(measurement) = lookup(env_vars::MEASUREMENT) {
            debug!("{} overrides output.measurement", env_vars::MEASUREMENT);
            self.output.measurement = measurement;
        }

        if let Some(raw) = lookup(env_vars::TIMEOUT_SECS) {
            self.source.timeout_secs = raw.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    env_vars::TIMEOUT_SECS,
                    raw
                ))
            })?;
        }

        Ok(())
    }

    /// Set the status page URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source.url = url.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.source.timeout_secs = timeout_secs;
        self
    }

    /// Set the line protocol measurement name
    pub fn with_measurement(mut self, measurement: impl Into<String>) -> Self {
        self.output.measurement = measurement.into();
        self
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source.url.trim().is_empty() {
            return Err(Error::configuration("Source URL must not be empty"));
        }

        if self.source.timeout_secs == 0 {
            return Err(Error::configuration("Timeout must be greater than 0 seconds"));
        }

        let measurement = &self.output.measurement;
        if measurement.is_empty() {
            return Err(Error::configuration("Measurement name must not be empty"));
        }

        if let Some(c) = measurement
            .chars()
            .find(|c| MEASUREMENT_FORBIDDEN_CHARS.contains(c))
        {
            return Err(Error::configuration(format!(
                "Measurement name '{}' contains forbidden character {:?}",
                measurement.escape_default(),
                c
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.url, "http://192.168.100.1/cmSignalData.htm");
        assert_eq!(config.source.timeout_secs, 10);
        assert_eq!(config.output.measurement, "channel_stats");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nmeasurement = \"channelstats\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.output.measurement, "channelstats");
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[source]\nurl = \"http://10.0.0.1/status.htm\"\ntimeout_secs = 3\n\n[output]\nmeasurement = \"modem\""
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.source.timeout_secs, 3);
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[source\nurl = 1").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                ("MODEM_STATS_URL", "http://modem.local/signal"),
                ("MODEM_STATS_TIMEOUT_SECS", " 30 "),
            ]))
            .unwrap();

        assert_eq!(config.source.url, "http://modem.local/signal");
        assert_eq!(config.source.timeout_secs, 30);
        assert_eq!(config.output.measurement, "channel_stats");
    }

    #[test]
    fn test_env_bad_timeout() {
        let mut config = Config::default();
        let err = config
            .apply_env(env(&[("MODEM_STATS_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("MODEM_STATS_TIMEOUT_SECS"));
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_url("http://10.1.1.1/")
            .with_timeout_secs(5)
            .with_measurement("cm");
        assert_eq!(config.source.url, "http://10.1.1.1/");
        assert_eq!(config.source.timeout_secs, 5);
        assert_eq!(config.output.measurement, "cm");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Config::default().with_url("  ").validate().is_err());
        assert!(Config::default().with_timeout_secs(0).validate().is_err());
        assert!(Config::default().with_measurement("").validate().is_err());

        for name in ["channel stats", "channel,stats", "channel\"stats", "channel\nstats"] {
            assert!(
                Config::default().with_measurement(name).validate().is_err(),
                "{:?} should be rejected",
                name
            );
        }

        assert!(Config::default().with_measurement("channel_stats.v2").validate().is_ok());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = Config::default().with_measurement("cm");
        let text = toml::to_string(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
