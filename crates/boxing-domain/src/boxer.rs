//! Boxer module - the validated competitor entity

use crate::error::{BoxingError, Result};
use crate::weight_class::{WeightClass, MIN_WEIGHT};
use std::fmt;

/// Youngest age allowed to compete
pub const MIN_AGE: i32 = 18;

/// Oldest age allowed to compete
pub const MAX_AGE: i32 = 40;

/// Unique identifier for a persisted boxer
///
/// Ids are assigned by the repository on insertion and are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoxerId(i64);

impl BoxerId {
    /// Create a BoxerId from a raw value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BoxerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BoxerId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            Ok(value) => Err(format!("Boxer ID must be positive, got {}", value)),
            Err(e) => Err(format!("Invalid boxer ID '{}': {}", s, e)),
        }
    }
}

/// Attributes of a boxer that has not been persisted yet
///
/// This is what callers hand to the roster when registering a boxer; the
/// repository assigns the id on insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBoxer {
    /// Unique name
    pub name: String,

    /// Weight in pounds (at least 125)
    pub weight: i32,

    /// Height in inches (greater than 0)
    pub height: i32,

    /// Arm reach in inches (greater than 0)
    pub reach: f64,

    /// Age in years (18 to 40 inclusive)
    pub age: i32,
}

impl NewBoxer {
    /// Create a new, not yet validated, set of boxer attributes
    pub fn new(name: impl Into<String>, weight: i32, height: i32, reach: f64, age: i32) -> Self {
        Self {
            name: name.into(),
            weight,
            height,
            reach,
            age,
        }
    }

    /// Validate the attributes
    ///
    /// Checks run in a fixed order (weight, height, reach, age, name) and the
    /// first violation is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxing_domain::NewBoxer;
    ///
    /// assert!(NewBoxer::new("Ali", 210, 75, 78.0, 30).validate().is_ok());
    /// assert!(NewBoxer::new("Ali", 120, 75, 78.0, 30).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.weight < MIN_WEIGHT {
            return Err(reject(
                "weight",
                self.weight,
                format!("Must be at least {}.", MIN_WEIGHT),
            ));
        }
        if self.height <= 0 {
            return Err(reject("height", self.height, "Must be greater than 0."));
        }
        if self.reach.is_nan() || self.reach <= 0.0 {
            return Err(reject("reach", self.reach, "Must be greater than 0."));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(reject(
                "age",
                self.age,
                format!("Must be between {} and {}.", MIN_AGE, MAX_AGE),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(reject("name", format!("'{}'", self.name), "Must not be empty."));
        }
        Ok(())
    }

    /// Validate and attach a repository-assigned id
    pub fn into_boxer(self, id: BoxerId) -> Result<Boxer> {
        Boxer::from_parts(id, self.name, self.weight, self.height, self.reach, self.age)
    }
}

fn reject(field: &'static str, value: impl ToString, reason: impl Into<String>) -> BoxingError {
    let err = BoxingError::invalid(field, value, reason);
    tracing::error!("{}", err);
    err
}

/// A boxer - a validated competitor
///
/// The weight class is derived from the weight when the value is built and
/// cannot be changed afterwards; all fields are read-only. A `Boxer` has no
/// link back to the repository it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Boxer {
    id: BoxerId,
    name: String,
    weight: i32,
    height: i32,
    reach: f64,
    age: i32,
    weight_class: WeightClass,
}

impl Boxer {
    /// Build a boxer from its stored attributes
    ///
    /// All attributes are validated and the weight class is derived.
    pub fn from_parts(
        id: BoxerId,
        name: impl Into<String>,
        weight: i32,
        height: i32,
        reach: f64,
        age: i32,
    ) -> Result<Self> {
        let attrs = NewBoxer::new(name, weight, height, reach, age);
        attrs.validate()?;
        let weight_class = WeightClass::classify(attrs.weight)?;

        Ok(Self {
            id,
            name: attrs.name,
            weight: attrs.weight,
            height: attrs.height,
            reach: attrs.reach,
            age: attrs.age,
            weight_class,
        })
    }

    /// Repository-assigned id
    pub fn id(&self) -> BoxerId {
        self.id
    }

    /// Unique name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in pounds
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Height in inches
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Arm reach in inches
    pub fn reach(&self) -> f64 {
        self.reach
    }

    /// Age in years
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Weight class derived from the weight
    pub fn weight_class(&self) -> WeightClass {
        self.weight_class
    }
}

impl fmt::Display for Boxer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{}, {})", self.name, self.id, self.weight_class)
    }
}
