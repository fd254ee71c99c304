//! Error types shared by every boxing operation

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, BoxingError>;

/// Errors surfaced by boxer, roster and ring operations
///
/// Adapter crates convert their own error types into this one so that the
/// ring and roster can propagate repository and random-source failures
/// without knowing which adapter produced them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxingError {
    /// Input failed validation; always correctable by the caller
    #[error("Invalid {field}: {value}. {reason}")]
    InvalidAttribute {
        /// Name of the offending field
        field: &'static str,
        /// Offending value as given
        value: String,
        /// Constraint that was violated
        reason: String,
    },

    /// A boxer with this name is already persisted
    #[error("Boxer with name '{0}' already exists")]
    AlreadyExists(String),

    /// No boxer matches the given id or name
    #[error("{0} not found")]
    NotFound(String),

    /// The ring already holds two boxers
    #[error("Ring is full, cannot add more boxers")]
    RingFull,

    /// The ring needs exactly two boxers to start a fight
    #[error("There must be two boxers to start a fight")]
    InsufficientParticipants,

    /// The boxer already occupies a slot in the ring
    #[error("Boxer '{0}' is already in the ring")]
    AlreadyInRing(String),

    /// The random source could not be reached
    #[error("Random source unavailable: {0}")]
    SourceUnavailable(String),

    /// The random source answered with something that is not a sample in [0, 1)
    #[error("Invalid random sample: {0}")]
    InvalidSample(String),

    /// Repository-layer failure, propagated unchanged
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BoxingError {
    /// Build an `InvalidAttribute` error for `field`
    pub fn invalid(field: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        BoxingError::InvalidAttribute {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Lift an adapter result into a domain result
pub(crate) trait IntoDomain<T> {
    fn into_domain(self) -> Result<T>;
}

impl<T, E: Into<BoxingError>> IntoDomain<T> for std::result::Result<T, E> {
    fn into_domain(self) -> Result<T> {
        self.map_err(Into::into)
    }
}
