//! The store and random source a command runs against.

use crate::config::Config;
use crate::error::Result;
use boxing_random::ConfiguredSource;
use boxing_store::SqliteStore;

/// Open handles for one CLI invocation or REPL session
///
/// Dropping the session closes the database connection.
#[derive(Debug)]
pub struct Session<R = SqliteStore, S = ConfiguredSource> {
    /// Boxer repository
    pub repo: R,

    /// Source of fight draws
    pub random: S,
}

impl Session {
    /// Open the database and build the random source described by `config`.
    pub fn open(config: &Config) -> Result<Self> {
        let repo = SqliteStore::open(&config.database)?;
        let random = ConfiguredSource::from_config(&config.random)?;
        Ok(Self { repo, random })
    }
}

impl<R, S> Session<R, S> {
    /// Assemble a session from existing handles.
    pub fn new(repo: R, random: S) -> Self {
        Self { repo, random }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxing_random::SourceKind;
    use boxing_store::StoreConfig;

    #[test]
    fn test_open_in_memory_seeded() {
        let mut config = Config::default();
        config.database = StoreConfig::in_memory();
        config.random.source = SourceKind::Seeded;
        config.random.seed = Some(1);

        let session = Session::open(&config).unwrap();
        assert_eq!(session.repo.count().unwrap(), 0);
        assert!(matches!(session.random, ConfiguredSource::Seeded(_)));
    }
}
