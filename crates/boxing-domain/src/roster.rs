//! Roster operations - validated boxer management on top of a repository
//!
//! These functions hold the rules that do not depend on how boxers are
//! stored: attribute validation, uniqueness of names, existence checks and
//! the leaderboard contract. Repository errors are converted into
//! [`BoxingError`] and propagated unchanged.

use crate::error::{BoxingError, IntoDomain, Result};
use crate::traits::BoxerRepository;
use crate::{Boxer, BoxerId, BoxerRecord, LeaderboardSort, NewBoxer, Outcome};

/// Validate and persist a new boxer
///
/// Fails with `InvalidAttribute` on the first invalid field and with
/// `AlreadyExists` if the name is taken. The name check and the insert are
/// not atomic; the repository is expected to reject a racing duplicate.
pub fn create_boxer<R: BoxerRepository>(repo: &mut R, boxer: NewBoxer) -> Result<BoxerId> {
    tracing::info!("Attempting to create a new boxer.");
    boxer.validate()?;

    if repo.find_by_name(&boxer.name).into_domain()?.is_some() {
        tracing::warn!("Boxer with name '{}' already exists", boxer.name);
        return Err(BoxingError::AlreadyExists(boxer.name));
    }

    let id = repo.insert(&boxer).into_domain()?;
    tracing::info!(boxer_id = %id, "Successfully added new boxer: {}", boxer.name);
    Ok(id)
}

/// Delete a boxer by id
pub fn delete_boxer<R: BoxerRepository>(repo: &mut R, id: BoxerId) -> Result<()> {
    tracing::info!("Attempting to delete boxer with ID {}", id);
    require_by_id(repo, id)?;
    repo.delete(id).into_domain()?;
    tracing::info!("Successfully deleted boxer with ID {}.", id);
    Ok(())
}

/// Fetch a boxer by id
pub fn get_boxer_by_id<R: BoxerRepository>(repo: &R, id: BoxerId) -> Result<Boxer> {
    get_record_by_id(repo, id).map(|record| record.boxer)
}

/// Fetch a boxer by name
pub fn get_boxer_by_name<R: BoxerRepository>(repo: &R, name: &str) -> Result<Boxer> {
    get_record_by_name(repo, name).map(|record| record.boxer)
}

/// Fetch a boxer and their fight record by id
pub fn get_record_by_id<R: BoxerRepository>(repo: &R, id: BoxerId) -> Result<BoxerRecord> {
    tracing::info!("Fetching boxer with ID {}.", id);
    require_by_id(repo, id)
}

/// Fetch a boxer and their fight record by name
pub fn get_record_by_name<R: BoxerRepository>(repo: &R, name: &str) -> Result<BoxerRecord> {
    tracing::info!("Fetching boxer '{}'.", name);
    match repo.find_by_name(name).into_domain()? {
        Some(record) => Ok(record),
        None => {
            tracing::error!("Boxer '{}' not found.", name);
            Err(BoxingError::NotFound(format!("Boxer '{}'", name)))
        }
    }
}

/// Record a fight outcome for a boxer
///
/// A win adds one fight and one win; a loss adds one fight.
pub fn update_boxer_stats<R: BoxerRepository>(
    repo: &mut R,
    id: BoxerId,
    outcome: Outcome,
) -> Result<()> {
    tracing::info!("Updating stats for boxer ID {} with result '{}'.", id, outcome);
    require_by_id(repo, id)?;
    repo.apply_result(id, outcome).into_domain()?;
    tracing::info!("Stats updated successfully for boxer ID {}.", id);
    Ok(())
}

/// Boxers with at least one fight, sorted descending by `sort`
pub fn get_leaderboard<R: BoxerRepository>(
    repo: &R,
    sort: LeaderboardSort,
) -> Result<Vec<BoxerRecord>> {
    tracing::info!("Fetching leaderboard sorted by {}.", sort);
    let mut records = repo.leaderboard(sort).into_domain()?;

    // Stable, so the adapter's tie order survives
    records.retain(|record| record.fights > 0);
    records.sort_by(|a, b| sort.compare(a, b));

    tracing::info!("Successfully fetched leaderboard ({} boxers).", records.len());
    Ok(records)
}

fn require_by_id<R: BoxerRepository>(repo: &R, id: BoxerId) -> Result<BoxerRecord> {
    match repo.find_by_id(id).into_domain()? {
        Some(record) => Ok(record),
        None => {
            tracing::error!("Boxer with ID {} not found.", id);
            Err(BoxingError::NotFound(format!("Boxer with ID {}", id)))
        }
    }
}
