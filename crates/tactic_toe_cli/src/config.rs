//! Game configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a terminal game.
///
/// Every field is optional in the file. Command-line flags override
/// whatever the file says.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Config {
    /// Seed for the AI's tie-breaks; drawn from the OS when absent.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Tracing filter used when neither `--log` nor `RUST_LOG` is set.
    #[setters(into)]
    log_filter: String,

    /// Print the command list before the first prompt.
    show_help_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: default_log_filter(),
            show_help_on_start: true,
        }
    }
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Records the settings in effect.
    ///
    /// Resolution happens before a subscriber exists, so `main` calls this
    /// once tracing is installed.
    pub fn log_resolved(&self) {
        info!(
            seed = ?self.seed,
            log_filter = %self.log_filter,
            show_help_on_start = self.show_help_on_start,
            "Configuration resolved"
        );
    }

    /// The file named by `--config` (or defaults), with flags applied on top.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(seed) = cli.seed {
            debug!(seed, "Overriding seed from command line");
            config = config.with_seed(seed);
        }
        if let Some(filter) = &cli.log {
            config = config.with_log_filter(filter.as_str());
        }
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.seed(), &None);
        assert_eq!(config.log_filter(), "warn");
        assert!(*config.show_help_on_start());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("seed = 7\n");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.seed(), &Some(7));
        assert_eq!(config.log_filter(), "warn");
        assert!(*config.show_help_on_start());
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            "seed = 1\nlog_filter = \"tactic_toe=debug\"\nshow_help_on_start = false\n",
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.seed(), &Some(1));
        assert_eq!(config.log_filter(), "tactic_toe=debug");
        assert!(!*config.show_help_on_start());
    }

    #[test]
    fn test_missing_file_reports_location() {
        let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: "));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let file = write_config("seed = \"seven\"\n");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_config("seed = 1\nlog_filter = \"info\"\n");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            seed: Some(99),
            log: Some("trace".to_string()),
        };
        let config = Config::resolve(&cli).unwrap();
        assert_eq!(config.seed(), &Some(99));
        assert_eq!(config.log_filter(), "trace");
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let config = Config::resolve(&Cli::default()).unwrap();
        assert_eq!(config, Config::default());
    }
}
