//! Boxing Random Source Layer
//!
//! Implementations of the `RandomSource` trait from `boxing-domain`.
//!
//! # Sources
//!
//! - `RandomOrgSource`: fetches a decimal fraction from random.org over HTTP
//! - `SeededSource`: local pseudo-random generator, reproducible with a seed
//! - `ScriptedSource`: replays fixed draws for deterministic testing
//! - `ConfiguredSource`: one of the first two, chosen from a [`RandomConfig`]
//!
//! # Examples
//!
//! ```
//! use boxing_domain::traits::RandomSource;
//! use boxing_random::ScriptedSource;
//!
//! let mut source = ScriptedSource::new([0.25, 0.75]);
//! assert_eq!(source.next().unwrap(), 0.25);
//! assert_eq!(source.next().unwrap(), 0.75);
//! assert!(source.next().is_err());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod random_org;
pub mod scripted;
pub mod seeded;

pub use config::{RandomConfig, SourceKind};
pub use random_org::RandomOrgSource;
pub use scripted::ScriptedSource;
pub use seeded::SeededSource;

use boxing_domain::traits::RandomSource;
use boxing_domain::BoxingError;
use thiserror::Error;

/// Errors that can occur while drawing a sample
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomError {
    /// The source could not be reached or answered with an error status
    #[error("{0}")]
    Unavailable(String),

    /// The source answered with something that is not a number in [0, 1)
    #[error("{0}")]
    InvalidSample(String),

    /// The source could not be built from its configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<RandomError> for BoxingError {
    fn from(e: RandomError) -> Self {
        match e {
            RandomError::Unavailable(msg) => BoxingError::SourceUnavailable(msg),
            RandomError::InvalidSample(msg) => BoxingError::InvalidSample(msg),
            RandomError::Config(msg) => BoxingError::SourceUnavailable(msg),
        }
    }
}

/// Check that a sample lies in [0, 1)
pub fn check_sample(sample: f64) -> Result<f64, RandomError> {
    if (0.0..1.0).contains(&sample) {
        Ok(sample)
    } else {
        Err(RandomError::InvalidSample(format!(
            "Sample {} is outside [0, 1)",
            sample
        )))
    }
}

/// A random source selected at runtime from configuration
#[derive(Debug)]
pub enum ConfiguredSource {
    /// Draws from random.org
    RandomOrg(RandomOrgSource),

    /// Draws from a local generator
    Seeded(SeededSource),
}

impl ConfiguredSource {
    /// Build the source described by `config`
    ///
    /// # Examples
    ///
    /// ```
    /// use boxing_random::{ConfiguredSource, RandomConfig, SourceKind};
    ///
    /// let config = RandomConfig {
    ///     source: SourceKind::Seeded,
    ///     seed: Some(7),
    ///     ..RandomConfig::default()
    /// };
    /// let source = ConfiguredSource::from_config(&config).unwrap();
    /// assert!(matches!(source, ConfiguredSource::Seeded(_)));
    /// ```
    pub fn from_config(config: &RandomConfig) -> Result<Self, RandomError> {
        config.validate().map_err(RandomError::Config)?;

        let source = match config.source {
            SourceKind::RandomOrg => {
                ConfiguredSource::RandomOrg(RandomOrgSource::with_timeout(&config.url, config.timeout())?)
            }
            SourceKind::Seeded => ConfiguredSource::Seeded(match config.seed {
                Some(seed) => SeededSource::new(seed),
                None => SeededSource::from_entropy(),
            }),
        };

        tracing::debug!("Random source configured: {:?}", config.source);
        Ok(source)
    }
}

impl RandomSource for ConfiguredSource {
    type Error = RandomError;

    fn next(&mut self) -> Result<f64, Self::Error> {
        match self {
            ConfiguredSource::RandomOrg(source) => source.next(),
            ConfiguredSource::Seeded(source) => source.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let unavailable: BoxingError = RandomError::Unavailable("timed out".into()).into();
        assert_eq!(unavailable, BoxingError::SourceUnavailable("timed out".into()));

        let invalid: BoxingError = RandomError::InvalidSample("abc".into()).into();
        assert_eq!(invalid, BoxingError::InvalidSample("abc".into()));
    }

    #[test]
    fn test_check_sample() {
        assert_eq!(check_sample(0.0).unwrap(), 0.0);
        assert_eq!(check_sample(0.99).unwrap(), 0.99);
        assert!(check_sample(1.0).is_err());
        assert!(check_sample(-0.1).is_err());
        assert!(check_sample(f64::NAN).is_err());
    }

    #[test]
    fn test_configured_seeded_is_reproducible() {
        let config = RandomConfig {
            source: SourceKind::Seeded,
            seed: Some(42),
            ..RandomConfig::default()
        };
        let mut a = ConfiguredSource::from_config(&config).unwrap();
        let mut b = ConfiguredSource::from_config(&config).unwrap();

        for _ in 0..10 {
            assert_eq!(a.next().unwrap(), b.next().unwrap());
        }
    }

    #[test]
    fn test_configured_rejects_invalid_config() {
        let config = RandomConfig {
            timeout_secs: 0,
            ..RandomConfig::default()
        };
        assert!(matches!(
            ConfiguredSource::from_config(&config),
            Err(RandomError::Config(_))
        ));
    }
}
