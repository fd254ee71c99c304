//! Configuration for random sources

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::random_org::{DEFAULT_TIMEOUT_SECS, DEFAULT_URL};

/// Which kind of source to draw samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// random.org over HTTP
    #[default]
    RandomOrg,

    /// Local pseudo-random generator
    Seeded,
}

/// Configuration for the random source
///
/// # Examples
///
/// ```
/// use boxing_random::{RandomConfig, SourceKind};
///
/// let config = RandomConfig::default();
/// assert_eq!(config.source, SourceKind::RandomOrg);
/// assert_eq!(config.timeout_secs, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Source to draw from
    #[serde(default)]
    pub source: SourceKind,

    /// random.org endpoint returning one plain-text decimal fraction
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout for random.org (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Seed for the local generator; drawn from OS entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.source == SourceKind::RandomOrg {
            if self.url.trim().is_empty() {
                return Err("url must not be empty".to_string());
            }
            if self.timeout_secs == 0 {
                return Err("timeout_secs must be greater than 0".to_string());
            }
        }
        Ok(())
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::RandomOrg,
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            seed: None,
        }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RandomConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let empty_url = RandomConfig {
            url: " ".into(),
            ..RandomConfig::default()
        };
        assert!(empty_url.validate().is_err());

        // The url is irrelevant to the local generator
        let seeded = RandomConfig {
            source: SourceKind::Seeded,
            url: String::new(),
            timeout_secs: 0,
            seed: None,
        };
        assert!(seeded.validate().is_ok());
    }

    #[test]
    fn test_deserialize() {
        let config: RandomConfig = toml::from_str("source = \"seeded\"\nseed = 9").unwrap();
        assert_eq!(config.source, SourceKind::Seeded);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.url, DEFAULT_URL);
    }
}
