//! Integration tests for boxing-store
//!
//! These tests verify the full CRUD cycle for boxers and their records,
//! and a complete bout resolved against a real database.

use boxing_domain::traits::{BoxerRepository, RandomSource};
use boxing_domain::{
    roster, BoxerId, BoxingError, LeaderboardSort, NewBoxer, Outcome, Ring, WeightClass,
};
use boxing_store::{SqliteStore, StoreConfig, StoreError};

/// Random source that always returns the same draw
struct FixedDraw(f64);

impl RandomSource for FixedDraw {
    type Error = BoxingError;

    fn next(&mut self) -> Result<f64, Self::Error> {
        Ok(self.0)
    }
}

fn store_with(boxers: &[NewBoxer]) -> (SqliteStore, Vec<BoxerId>) {
    let mut store = SqliteStore::in_memory().unwrap();
    let ids = boxers
        .iter()
        .map(|b| store.insert(b).unwrap())
        .collect();
    (store, ids)
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
    assert_eq!(store.unwrap().count().unwrap(), 0);
}

#[test]
fn test_insert_and_find() {
    let (store, ids) = store_with(&[NewBoxer::new("Boxer 1", 180, 70, 75.0, 30)]);

    let by_id = store.find_by_id(ids[0]).unwrap().expect("boxer should exist");
    let by_name = store.find_by_name("Boxer 1").unwrap().expect("boxer should exist");

    assert_eq!(by_id, by_name);
    assert_eq!(by_id.boxer.id(), ids[0]);
    assert_eq!(by_id.boxer.height(), 70);
    assert_eq!(by_id.boxer.reach(), 75.0);
    assert_eq!(by_id.boxer.age(), 30);
    assert_eq!(by_id.boxer.weight_class(), WeightClass::Middleweight);
    assert_eq!((by_id.fights, by_id.wins), (0, 0));
}

#[test]
fn test_ids_are_positive_and_unique() {
    let (_, ids) = store_with(&[
        NewBoxer::new("A", 150, 70, 70.0, 30),
        NewBoxer::new("B", 150, 70, 70.0, 30),
        NewBoxer::new("C", 150, 70, 70.0, 30),
    ]);

    assert!(ids.iter().all(|id| id.value() > 0));
    assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2]);
}

#[test]
fn test_find_missing() {
    let store = SqliteStore::in_memory().unwrap();
    assert!(store.find_by_id(BoxerId::from_value(1)).unwrap().is_none());
    assert!(store.find_by_name("Nobody").unwrap().is_none());
}

#[test]
fn test_duplicate_name_rejected() {
    let (mut store, _) = store_with(&[NewBoxer::new("Ali", 210, 75, 78.0, 30)]);

    let result = store.insert(&NewBoxer::new("Ali", 190, 72, 74.0, 25));
    assert!(matches!(result, Err(StoreError::Duplicate(ref name)) if name == "Ali"));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_delete() {
    let (mut store, ids) = store_with(&[NewBoxer::new("Ali", 210, 75, 78.0, 30)]);

    store.delete(ids[0]).unwrap();
    assert!(store.find_by_id(ids[0]).unwrap().is_none());

    let again = store.delete(ids[0]);
    assert!(matches!(again, Err(StoreError::NotFound(_))));
}

#[test]
fn test_apply_result() {
    let (mut store, ids) = store_with(&[NewBoxer::new("Ali", 210, 75, 78.0, 30)]);

    store.apply_result(ids[0], Outcome::Win).unwrap();
    store.apply_result(ids[0], Outcome::Loss).unwrap();
    store.apply_result(ids[0], Outcome::Win).unwrap();

    let record = store.find_by_id(ids[0]).unwrap().unwrap();
    assert_eq!((record.fights, record.wins), (3, 2));
}

#[test]
fn test_apply_result_missing_boxer() {
    let mut store = SqliteStore::in_memory().unwrap();
    let result = store.apply_result(BoxerId::from_value(5), Outcome::Win);
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_leaderboard_ordering() {
    let (mut store, ids) = store_with(&[
        NewBoxer::new("Veteran", 200, 72, 76.0, 35),
        NewBoxer::new("Prodigy", 140, 66, 68.0, 19),
        NewBoxer::new("Rookie", 160, 69, 70.0, 22),
    ]);
    let (veteran, prodigy, rookie) = (ids[0], ids[1], ids[2]);

    // Veteran: 3 wins from 5 fights (60%). Prodigy: 2 from 2 (100%). Rookie: no fights.
    for outcome in [Outcome::Win, Outcome::Win, Outcome::Win, Outcome::Loss, Outcome::Loss] {
        store.apply_result(veteran, outcome).unwrap();
    }
    store.apply_result(prodigy, Outcome::Win).unwrap();
    store.apply_result(prodigy, Outcome::Win).unwrap();

    let by_wins = store.leaderboard(LeaderboardSort::Wins).unwrap();
    let order: Vec<_> = by_wins.iter().map(|r| r.boxer.id()).collect();
    assert_eq!(order, vec![veteran, prodigy]);
    assert!(!order.contains(&rookie));

    let by_pct = store.leaderboard(LeaderboardSort::WinPct).unwrap();
    let order: Vec<_> = by_pct.iter().map(|r| r.boxer.id()).collect();
    assert_eq!(order, vec![prodigy, veteran]);
    assert_eq!(by_pct[0].win_pct(), 100.0);
    assert_eq!(by_pct[1].win_pct(), 60.0);
}

#[test]
fn test_leaderboard_empty() {
    let (store, _) = store_with(&[NewBoxer::new("Rookie", 160, 69, 70.0, 22)]);
    assert!(store.leaderboard(LeaderboardSort::Wins).unwrap().is_empty());
}

#[test]
fn test_roster_over_sqlite() {
    let mut store = SqliteStore::in_memory().unwrap();

    let id = roster::create_boxer(&mut store, NewBoxer::new("Ali", 210, 75, 78.0, 30)).unwrap();
    let err = roster::create_boxer(&mut store, NewBoxer::new("Ali", 210, 75, 78.0, 30)).unwrap_err();
    assert_eq!(err, BoxingError::AlreadyExists("Ali".into()));

    let err = roster::create_boxer(&mut store, NewBoxer::new("Frazier", 205, -1, 73.0, 27)).unwrap_err();
    assert!(matches!(err, BoxingError::InvalidAttribute { field: "height", .. }));

    roster::update_boxer_stats(&mut store, id, Outcome::Win).unwrap();
    let record = roster::get_record_by_name(&store, "Ali").unwrap();
    assert_eq!((record.fights, record.wins), (1, 1));

    roster::delete_boxer(&mut store, id).unwrap();
    let err = roster::delete_boxer(&mut store, id).unwrap_err();
    assert!(matches!(err, BoxingError::NotFound(_)));
}

#[test]
fn test_full_bout() {
    let mut store = SqliteStore::in_memory().unwrap();
    roster::create_boxer(&mut store, NewBoxer::new("Ali", 210, 75, 78.0, 30)).unwrap();
    roster::create_boxer(&mut store, NewBoxer::new("Frazier", 205, 71, 73.0, 27)).unwrap();

    let mut ring = Ring::new();
    ring.enter(roster::get_boxer_by_name(&store, "Ali").unwrap()).unwrap();
    ring.enter(roster::get_boxer_by_name(&store, "Frazier").unwrap()).unwrap();

    let winner = ring.fight(&mut store, &mut FixedDraw(0.25)).unwrap();
    assert_eq!(winner, "Ali");
    assert!(ring.is_empty());

    let ali = roster::get_record_by_name(&store, "Ali").unwrap();
    let frazier = roster::get_record_by_name(&store, "Frazier").unwrap();
    assert_eq!((ali.fights, ali.wins), (1, 1));
    assert_eq!((frazier.fights, frazier.wins), (1, 0));

    let board = roster::get_leaderboard(&store, LeaderboardSort::Wins).unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].boxer.name(), "Ali");
}

#[test]
fn test_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("boxing.db"));

    {
        let mut store = SqliteStore::open(&config).unwrap();
        let id = store.insert(&NewBoxer::new("Ali", 210, 75, 78.0, 30)).unwrap();
        store.apply_result(id, Outcome::Win).unwrap();
    }

    let store = SqliteStore::open(&config).unwrap();
    let record = store.find_by_name("Ali").unwrap().expect("boxer should survive reopen");
    assert_eq!((record.fights, record.wins), (1, 1));
}
