//! In-memory doubles for the repository and random-source traits

use crate::traits::{BoxerRepository, RandomSource};
use crate::{BoxerId, BoxerRecord, BoxingError, LeaderboardSort, NewBoxer, Outcome};
use std::collections::{BTreeMap, VecDeque};

/// Repository backed by a map, recording every applied result
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: BTreeMap<BoxerId, BoxerRecord>,
    next_id: i64,
    applied: Vec<(BoxerId, Outcome)>,
    fail_apply_for: Option<BoxerId>,
}

impl MemoryRepository {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn applied(&self) -> &[(BoxerId, Outcome)] {
        &self.applied
    }

    /// Make `apply_result` fail with a storage error for this boxer
    pub fn fail_apply_for(&mut self, id: BoxerId) {
        self.fail_apply_for = Some(id);
    }
}

impl BoxerRepository for MemoryRepository {
    type Error = BoxingError;

    fn insert(&mut self, boxer: &NewBoxer) -> Result<BoxerId, Self::Error> {
        if self.records.values().any(|r| r.boxer.name() == boxer.name) {
            return Err(BoxingError::AlreadyExists(boxer.name.clone()));
        }
        self.next_id += 1;
        let id = BoxerId::from_value(self.next_id);
        let record = BoxerRecord::rookie(boxer.clone().into_boxer(id)?);
        self.records.insert(id, record);
        Ok(id)
    }

    fn delete(&mut self, id: BoxerId) -> Result<(), Self::Error> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| BoxingError::NotFound(format!("Boxer with ID {}", id)))
    }

    fn find_by_id(&self, id: BoxerId) -> Result<Option<BoxerRecord>, Self::Error> {
        Ok(self.records.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<BoxerRecord>, Self::Error> {
        Ok(self.records.values().find(|r| r.boxer.name() == name).cloned())
    }

    fn apply_result(&mut self, id: BoxerId, outcome: Outcome) -> Result<(), Self::Error> {
        if self.fail_apply_for == Some(id) {
            return Err(BoxingError::Storage("database is locked".into()));
        }
        let record = self
            .records
            .get_mut(&id)
            .ok_or_else(|| BoxingError::NotFound(format!("Boxer with ID {}", id)))?;
        record.apply(outcome);
        self.applied.push((id, outcome));
        Ok(())
    }

    fn leaderboard(&self, _sort: LeaderboardSort) -> Result<Vec<BoxerRecord>, Self::Error> {
        // Unfiltered and unsorted on purpose: the roster enforces both
        Ok(self.records.values().cloned().collect())
    }
}

/// Random source replaying a fixed script of draws
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<Result<f64, BoxingError>>,
    calls: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().map(Ok).collect(),
            calls: 0,
        }
    }

    pub fn failing(err: BoxingError) -> Self {
        Self {
            draws: VecDeque::from([Err(err)]),
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for ScriptedRandom {
    type Error = BoxingError;

    fn next(&mut self) -> Result<f64, Self::Error> {
        self.calls += 1;
        self.draws
            .pop_front()
            .unwrap_or_else(|| Err(BoxingError::SourceUnavailable("script exhausted".into())))
    }
}
