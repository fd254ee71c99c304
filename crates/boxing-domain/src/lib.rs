//! Boxing Domain Layer
//!
//! This crate contains the core model of the boxing competition: validated
//! boxers, weight classes, the two-slot ring and its fight algorithm. It
//! defines the trait interfaces that the persistence and randomness adapters
//! implement, so no infrastructure code lives here.
//!
//! ## Key Concepts
//!
//! - **Boxer**: a validated competitor whose weight class is derived once
//! - **Weight class**: featherweight → lightweight → middleweight → heavyweight
//! - **Ring**: a container of 0, 1 or 2 boxers that resolves a single bout
//! - **Outcome**: win or loss, applied to a boxer's persisted record
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - `BoxerRepository` and `RandomSource` are the seams to the outside world
//! - Adapters convert their own errors into [`BoxingError`]
//!
//! # Examples
//!
//! ```
//! use boxing_domain::{Boxer, BoxerId, Ring, WeightClass};
//!
//! let boxer = Boxer::from_parts(BoxerId::from_value(1), "Ali", 210, 75, 78.0, 30).unwrap();
//! assert_eq!(boxer.weight_class(), WeightClass::Heavyweight);
//!
//! let mut ring = Ring::new();
//! ring.enter(boxer).unwrap();
//! assert_eq!(ring.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boxer;
pub mod error;
pub mod outcome;
pub mod ring;
pub mod roster;
pub mod traits;
pub mod weight_class;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use boxer::{Boxer, BoxerId, NewBoxer};
pub use error::{BoxingError, Result};
pub use outcome::{BoxerRecord, LeaderboardSort, Outcome};
pub use ring::{fighting_skill, win_probability, Bout, Ring, RING_CAPACITY};
pub use weight_class::WeightClass;
