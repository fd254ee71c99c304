//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use boxing_random::{RandomConfig, SourceKind};
use boxing_store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database settings
    #[serde(default)]
    pub database: StoreConfig,

    /// Random source settings
    #[serde(default)]
    pub random: RandomConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Values given on the command line or in the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Database path
    pub db: Option<PathBuf>,
    /// random.org endpoint
    pub random_url: Option<String>,
    /// Seed for the local generator
    pub seed: Option<u64>,
}

impl Config {
    /// Directory holding the config file and REPL history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".boxing"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            tracing::debug!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Apply command-line and environment overrides.
    ///
    /// A seed switches the random source to the local generator.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(db) = overrides.db {
            self.database.path = db;
        }
        if let Some(url) = overrides.random_url {
            self.random.url = url;
        }
        if let Some(seed) = overrides.seed {
            self.random.source = SourceKind::Seeded;
            self.random.seed = Some(seed);
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.database.validate().map_err(CliError::Config)?;
        self.random.validate().map_err(CliError::Config)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: default_history_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database.path, PathBuf::from("boxing.db"));
        assert_eq!(config.random.source, SourceKind::RandomOrg);
        assert!(config.settings.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = "/tmp/fights.db"

            [settings]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.path, PathBuf::from("/tmp/fights.db"));
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.random.timeout_secs, 5);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.history_size = 50;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.history_size, 50);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.settings.history_size, 1000);
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply(Overrides {
            db: Some(PathBuf::from(":memory:")),
            random_url: Some("http://localhost:8000/rand".into()),
            seed: Some(3),
        });

        assert!(config.database.is_in_memory());
        assert_eq!(config.random.url, "http://localhost:8000/rand");
        assert_eq!(config.random.source, SourceKind::Seeded);
        assert_eq!(config.random.seed, Some(3));
    }

    #[test]
    fn test_invalid_config() {
        let mut config = Config::default();
        config.random.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }
}
