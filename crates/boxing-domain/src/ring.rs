//! Ring module - a two-slot container that resolves a single bout
//!
//! A fight turns each boxer's attributes into a skill score, maps the skill
//! gap through a logistic curve into a probability, draws one sample from a
//! [`RandomSource`] and records the outcome through a [`BoxerRepository`].
//!
//! A `Ring` is meant to be owned by one caller for the duration of a bout;
//! it does no locking of its own.

use crate::error::{BoxingError, IntoDomain, Result};
use crate::roster;
use crate::traits::{BoxerRepository, RandomSource};
use crate::{Boxer, BoxerId, Outcome};

/// Maximum number of boxers in a ring
pub const RING_CAPACITY: usize = 2;

/// Fighting skill of a boxer
///
/// `weight × name length + reach / 10 + age modifier`, where the modifier is
/// -1 under 25, -2 over 35 and 0 otherwise. Name length counts characters,
/// not bytes.
///
/// # Examples
///
/// ```
/// use boxing_domain::{fighting_skill, Boxer, BoxerId};
///
/// let boxer = Boxer::from_parts(BoxerId::from_value(1), "Boxer 1", 180, 70, 75.0, 30).unwrap();
/// assert_eq!(fighting_skill(&boxer), 1447.5);
/// ```
pub fn fighting_skill(boxer: &Boxer) -> f64 {
    let age_modifier = if boxer.age() < 25 {
        -1.0
    } else if boxer.age() > 35 {
        -2.0
    } else {
        0.0
    };
    let name_length = boxer.name().chars().count() as f64;
    let skill = f64::from(boxer.weight()) * name_length + boxer.reach() / 10.0 + age_modifier;

    tracing::debug!("Fighting skill for {}: {}.", boxer.name(), skill);
    skill
}

/// Probability that the boxer in the first slot wins
///
/// This is the logistic function of the *absolute* skill gap, so it never
/// drops below 0.5 and always favours the first slot, whichever boxer is
/// actually stronger. Kept as-is for compatibility with existing records.
///
/// # Examples
///
/// ```
/// use boxing_domain::win_probability;
///
/// assert_eq!(win_probability(5.0, 5.0), 0.5);
/// assert!((win_probability(10.0, 5.0) - 0.9933).abs() < 1e-4);
/// assert_eq!(win_probability(5.0, 10.0), win_probability(10.0, 5.0));
/// ```
pub fn win_probability(skill_1: f64, skill_2: f64) -> f64 {
    let delta = (skill_1 - skill_2).abs();
    1.0 / (1.0 + (-delta).exp())
}

/// The result of a resolved bout
#[derive(Debug, Clone, PartialEq)]
pub struct Bout {
    /// The boxer credited with the win
    pub winner: Boxer,

    /// The boxer charged with the loss
    pub loser: Boxer,

    /// Probability that the first-slot boxer would win
    pub probability: f64,

    /// Sample drawn from the random source
    pub draw: f64,
}

/// A boxing ring holding at most two boxers, in entry order
#[derive(Debug, Clone, Default)]
pub struct Ring {
    boxers: Vec<Boxer>,
}

impl Ring {
    /// Create an empty ring
    pub fn new() -> Self {
        tracing::info!("Ring initialized empty.");
        Self {
            boxers: Vec::with_capacity(RING_CAPACITY),
        }
    }

    /// Add a boxer to the ring
    ///
    /// Fails with `RingFull` when two boxers are already in, and with
    /// `AlreadyInRing` when the same boxer (by id) is entered twice.
    pub fn enter(&mut self, boxer: Boxer) -> Result<()> {
        if self.is_full() {
            tracing::error!("Ring is full, cannot add more boxers.");
            return Err(BoxingError::RingFull);
        }
        if self.contains(boxer.id()) {
            tracing::error!("Boxer {} is already in the ring.", boxer.name());
            return Err(BoxingError::AlreadyInRing(boxer.name().to_string()));
        }

        tracing::info!("Boxer {} entered the ring successfully.", boxer.name());
        self.boxers.push(boxer);
        Ok(())
    }

    /// Remove every boxer; a no-op on an empty ring
    pub fn clear(&mut self) {
        if self.boxers.is_empty() {
            tracing::info!("Ring is already empty.");
            return;
        }
        tracing::info!("Clearing ring.");
        self.boxers.clear();
    }

    /// Boxers currently in the ring, in entry order
    pub fn boxers(&self) -> &[Boxer] {
        tracing::debug!("Retrieving boxers from the ring.");
        &self.boxers
    }

    /// Number of boxers in the ring
    pub fn len(&self) -> usize {
        self.boxers.len()
    }

    /// Whether the ring is empty
    pub fn is_empty(&self) -> bool {
        self.boxers.is_empty()
    }

    /// Whether the ring holds two boxers
    pub fn is_full(&self) -> bool {
        self.boxers.len() >= RING_CAPACITY
    }

    /// Whether a boxer with this id is in the ring
    pub fn contains(&self, id: BoxerId) -> bool {
        self.boxers.iter().any(|b| b.id() == id)
    }

    /// Fight and return the winner's name
    ///
    /// See [`Ring::bout`] for the full contract.
    pub fn fight<R, S>(&mut self, repo: &mut R, rng: &mut S) -> Result<String>
    where
        R: BoxerRepository,
        S: RandomSource,
    {
        self.bout(repo, rng).map(|bout| bout.winner.name().to_string())
    }

    /// Resolve a bout between the two boxers in the ring
    ///
    /// 1. Skill of each boxer, then `p = win_probability(s1, s2)`.
    /// 2. One draw `r` from `rng`; the first-slot boxer wins if `r < p`.
    /// 3. The winner's win is recorded, then the loser's loss.
    /// 4. The ring is cleared.
    ///
    /// Errors from the random source or the repository are returned as-is
    /// and leave the ring occupied. A failure while recording the loss
    /// leaves the winner's record already updated; there is no rollback.
    pub fn bout<R, S>(&mut self, repo: &mut R, rng: &mut S) -> Result<Bout>
    where
        R: BoxerRepository,
        S: RandomSource,
    {
        tracing::info!("Starting a fight.");

        let (boxer_1, boxer_2) = match self.boxers.as_slice() {
            [first, second] => (first, second),
            _ => {
                tracing::warn!("Not enough boxers in the ring to start a fight.");
                return Err(BoxingError::InsufficientParticipants);
            }
        };

        let skill_1 = fighting_skill(boxer_1);
        let skill_2 = fighting_skill(boxer_2);
        let probability = win_probability(skill_1, skill_2);

        let draw = rng.next().into_domain()?;
        tracing::info!(
            probability,
            draw,
            "{} ({}) vs {} ({})",
            boxer_1.name(),
            skill_1,
            boxer_2.name(),
            skill_2
        );

        let (winner, loser) = if draw < probability {
            (boxer_1, boxer_2)
        } else {
            (boxer_2, boxer_1)
        };

        roster::update_boxer_stats(repo, winner.id(), Outcome::Win)?;
        roster::update_boxer_stats(repo, loser.id(), Outcome::Loss)?;

        let bout = Bout {
            winner: winner.clone(),
            loser: loser.clone(),
            probability,
            draw,
        };

        self.clear();
        tracing::info!("Fight won by {}; ring cleared.", bout.winner.name());
        Ok(bout)
    }
}
