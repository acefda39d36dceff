/// CLI configuration
use crate::error::{CliError, Result};
use cadence_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// TOML catalog to load instead of the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Fallback `tracing` filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Maximum undrained playback events
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// Print playback events after every command
    #[serde(default)]
    pub show_events: bool,

    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// `path` overrides the default `cadence.toml`. An explicit path must
    /// exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with CADENCE_)
        settings = settings.add_source(
            config::Environment::with_prefix("CADENCE")
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.event_capacity == 0 {
            return Err(CliError::Config(
                "event_capacity must be at least 1 (set CADENCE_EVENT_CAPACITY)".to_string(),
            ));
        }

        if let Some(path) = &self.catalog_path {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Catalog not found at {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            event_capacity: self.event_capacity,
        }
    }
}

// Default values
fn default_log_filter() -> String {
    "cadence=info,cadence_cli=info,cadence_playback=info".to_string()
}

fn default_event_capacity() -> usize {
    PlaybackConfig::default().event_capacity
}

fn default_prompt() -> String {
    "cadence> ".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: default_log_filter(),
            event_capacity: default_event_capacity(),
            show_events: false,
            prompt: default_prompt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.event_capacity, 256);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn zero_event_capacity_rejected() {
        let config = CliConfig {
            event_capacity: 0,
            ..CliConfig::default()
        };
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn missing_catalog_rejected() {
        let config = CliConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.toml")),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "show_events = true\nevent_capacity = 8\nprompt = \"> \"").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert!(config.show_events);
        assert_eq!(config.event_capacity, 8);
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.log_filter, default_log_filter());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let result = CliConfig::load(Some(Path::new("/nonexistent/cadence.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
