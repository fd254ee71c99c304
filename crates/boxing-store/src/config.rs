//! Configuration for the SQLite store

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Path used when nothing else is configured
pub const DEFAULT_DB_PATH: &str = "boxing.db";

const MEMORY_PATH: &str = ":memory:";

/// Where the store keeps its data
///
/// Passed explicitly to [`crate::SqliteStore::open`]; the store never reads
/// environment variables itself.
///
/// # Examples
///
/// ```
/// use boxing_store::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.path.to_str(), Some("boxing.db"));
///
/// assert!(StoreConfig::in_memory().is_in_memory());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite database file, or `:memory:`
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl StoreConfig {
    /// Store data in the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Keep all data in memory; it is lost when the store is dropped
    pub fn in_memory() -> Self {
        Self::new(MEMORY_PATH)
    }

    /// Whether this configuration points at an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.path == Path::new(MEMORY_PATH)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("database path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(StoreConfig::default().validate().is_ok());
        assert!(StoreConfig::new("").validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, StoreConfig::default());

        let config: StoreConfig = toml::from_str("path = \"/tmp/ring.db\"").unwrap();
        assert_eq!(config.path, PathBuf::from("/tmp/ring.db"));
        assert!(!config.is_in_memory());
    }
}
