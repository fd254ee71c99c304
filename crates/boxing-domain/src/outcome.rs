//! Fight outcomes and the persisted win/loss record

use crate::boxer::Boxer;
use crate::error::{BoxingError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Result of a bout from one boxer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Counts as a fight and a win
    Win,

    /// Counts as a fight only
    Loss,
}

impl Outcome {
    /// Get the outcome name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }

    /// Parse an outcome, rejecting anything other than `win` or `loss`
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "win" => Ok(Outcome::Win),
            "loss" => Ok(Outcome::Loss),
            _ => {
                tracing::error!("Invalid result: {}. Expected 'win' or 'loss'.", s);
                Err(BoxingError::invalid("result", s, "Expected 'win' or 'loss'."))
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Outcome {
    type Err = BoxingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Metric used to rank the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeaderboardSort {
    /// Raw number of wins
    #[default]
    Wins,

    /// Wins divided by fights
    WinPct,
}

impl LeaderboardSort {
    /// Get the sort key as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardSort::Wins => "wins",
            LeaderboardSort::WinPct => "win_pct",
        }
    }

    /// Parse a sort key, rejecting anything other than `wins` or `win_pct`
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" | "win-pct" => Ok(LeaderboardSort::WinPct),
            _ => {
                tracing::info!("Invalid sort_by parameter: {}.", s);
                Err(BoxingError::invalid("sort_by", s, "Expected 'wins' or 'win_pct'."))
            }
        }
    }

    /// Order two records best-first by this metric
    pub fn compare(&self, a: &BoxerRecord, b: &BoxerRecord) -> Ordering {
        match self {
            LeaderboardSort::Wins => b.wins.cmp(&a.wins),
            LeaderboardSort::WinPct => b.win_ratio().total_cmp(&a.win_ratio()),
        }
    }
}

impl fmt::Display for LeaderboardSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeaderboardSort {
    type Err = BoxingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A boxer together with their persisted fight record
#[derive(Debug, Clone, PartialEq)]
pub struct BoxerRecord {
    /// The boxer's attributes
    pub boxer: Boxer,

    /// Number of fights recorded
    pub fights: u32,

    /// Number of those fights that were won
    pub wins: u32,
}

impl BoxerRecord {
    /// Record for a boxer who has not fought yet
    pub fn rookie(boxer: Boxer) -> Self {
        Self {
            boxer,
            fights: 0,
            wins: 0,
        }
    }

    /// Number of fights lost
    pub fn losses(&self) -> u32 {
        self.fights.saturating_sub(self.wins)
    }

    /// Wins per fight in [0, 1]; zero for a boxer without fights
    pub fn win_ratio(&self) -> f64 {
        if self.fights == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.fights)
    }

    /// Win percentage rounded to one decimal place
    ///
    /// # Examples
    ///
    /// ```
    /// use boxing_domain::{Boxer, BoxerId, BoxerRecord};
    ///
    /// let boxer = Boxer::from_parts(BoxerId::from_value(1), "Ali", 210, 75, 78.0, 30).unwrap();
    /// let record = BoxerRecord { boxer, fights: 3, wins: 2 };
    /// assert_eq!(record.win_pct(), 66.7);
    /// ```
    pub fn win_pct(&self) -> f64 {
        (self.win_ratio() * 1000.0).round() / 10.0
    }

    /// Apply an outcome to the in-memory counters
    pub fn apply(&mut self, outcome: Outcome) {
        self.fights += 1;
        if outcome == Outcome::Win {
            self.wins += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxer::BoxerId;

    fn record(fights: u32, wins: u32) -> BoxerRecord {
        let boxer = Boxer::from_parts(BoxerId::from_value(1), "Test", 150, 70, 70.0, 25).unwrap();
        BoxerRecord { boxer, fights, wins }
    }

    #[test]
    fn test_outcome_parse() {
        assert_eq!(Outcome::parse("win").unwrap(), Outcome::Win);
        assert_eq!(Outcome::parse("LOSS").unwrap(), Outcome::Loss);
        assert!(matches!(
            Outcome::parse("draw"),
            Err(BoxingError::InvalidAttribute { field: "result", .. })
        ));
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(LeaderboardSort::parse("wins").unwrap(), LeaderboardSort::Wins);
        assert_eq!(LeaderboardSort::parse("win_pct").unwrap(), LeaderboardSort::WinPct);
        assert!(matches!(
            LeaderboardSort::parse("losses"),
            Err(BoxingError::InvalidAttribute { field: "sort_by", .. })
        ));
    }

    #[test]
    fn test_apply_outcome() {
        let mut rec = record(0, 0);
        rec.apply(Outcome::Win);
        assert_eq!((rec.fights, rec.wins), (1, 1));
        rec.apply(Outcome::Loss);
        assert_eq!((rec.fights, rec.wins), (2, 1));
        assert_eq!(rec.losses(), 1);
    }

    #[test]
    fn test_win_pct_rounding() {
        assert_eq!(record(3, 1).win_pct(), 33.3);
        assert_eq!(record(3, 2).win_pct(), 66.7);
        assert_eq!(record(4, 4).win_pct(), 100.0);
        assert_eq!(record(0, 0).win_pct(), 0.0);
    }

    #[test]
    fn test_compare_descending() {
        let strong = record(10, 8);
        let perfect = record(2, 2);

        assert_eq!(LeaderboardSort::Wins.compare(&strong, &perfect), Ordering::Less);
        assert_eq!(LeaderboardSort::WinPct.compare(&strong, &perfect), Ordering::Greater);
    }
}
