//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations live in other crates (boxing-store, boxing-random).

use crate::{BoxerId, BoxerRecord, BoxingError, LeaderboardSort, NewBoxer, Outcome};

/// Trait for storing and retrieving boxers
///
/// Implemented by the infrastructure layer (boxing-store). Calls may block;
/// timeouts and retries are the implementation's concern.
pub trait BoxerRepository {
    /// Error type for repository operations
    type Error: Into<BoxingError>;

    /// Insert a new boxer and return the id assigned to it
    ///
    /// Fails if a boxer with the same name already exists.
    fn insert(&mut self, boxer: &NewBoxer) -> Result<BoxerId, Self::Error>;

    /// Delete a boxer by id; fails if no such boxer exists
    fn delete(&mut self, id: BoxerId) -> Result<(), Self::Error>;

    /// Look up a boxer by id
    fn find_by_id(&self, id: BoxerId) -> Result<Option<BoxerRecord>, Self::Error>;

    /// Look up a boxer by exact name
    fn find_by_name(&self, name: &str) -> Result<Option<BoxerRecord>, Self::Error>;

    /// Add one fight to a boxer's record, and one win if the outcome is a win
    fn apply_result(&mut self, id: BoxerId, outcome: Outcome) -> Result<(), Self::Error>;

    /// Boxers with at least one fight, best first by `sort`
    fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<BoxerRecord>, Self::Error>;
}

/// Trait for drawing uniformly distributed samples
///
/// Implemented by the infrastructure layer (boxing-random).
pub trait RandomSource {
    /// Error type for sampling
    type Error: Into<BoxingError>;

    /// Draw the next sample in [0, 1)
    fn next(&mut self) -> Result<f64, Self::Error>;
}
