//! Weight class module - ordinal divisions derived from a boxer's weight

use crate::error::{BoxingError, Result};
use std::fmt;

/// Minimum weight (pounds) accepted for any boxer
pub const MIN_WEIGHT: i32 = 125;

const LIGHTWEIGHT_MIN: i32 = 133;
const MIDDLEWEIGHT_MIN: i32 = 166;
const HEAVYWEIGHT_MIN: i32 = 203;

/// Weight class of a boxer
///
/// Classes are ordered from lightest to heaviest:
/// - Featherweight: 125 to 132 lbs
/// - Lightweight: 133 to 165 lbs
/// - Middleweight: 166 to 202 lbs
/// - Heavyweight: 203 lbs and up
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeightClass {
    /// 125 to 132 lbs
    Featherweight,

    /// 133 to 165 lbs
    Lightweight,

    /// 166 to 202 lbs
    Middleweight,

    /// 203 lbs and up
    Heavyweight,
}

impl WeightClass {
    /// Classify a weight in pounds
    ///
    /// Thresholds are checked from the heaviest class down.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxing_domain::WeightClass;
    ///
    /// assert_eq!(WeightClass::classify(125).unwrap(), WeightClass::Featherweight);
    /// assert_eq!(WeightClass::classify(203).unwrap(), WeightClass::Heavyweight);
    /// assert!(WeightClass::classify(124).is_err());
    /// ```
    pub fn classify(weight: i32) -> Result<Self> {
        let class = if weight >= HEAVYWEIGHT_MIN {
            WeightClass::Heavyweight
        } else if weight >= MIDDLEWEIGHT_MIN {
            WeightClass::Middleweight
        } else if weight >= LIGHTWEIGHT_MIN {
            WeightClass::Lightweight
        } else if weight >= MIN_WEIGHT {
            WeightClass::Featherweight
        } else {
            tracing::error!("Invalid weight: {}. Weight must be at least {}.", weight, MIN_WEIGHT);
            return Err(BoxingError::invalid(
                "weight",
                weight,
                format!("Weight must be at least {}.", MIN_WEIGHT),
            ));
        };

        tracing::debug!("Weight {} classified as {}", weight, class);
        Ok(class)
    }

    /// Get the weight class name as stored and displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightClass::Featherweight => "FEATHERWEIGHT",
            WeightClass::Lightweight => "LIGHTWEIGHT",
            WeightClass::Middleweight => "MIDDLEWEIGHT",
            WeightClass::Heavyweight => "HEAVYWEIGHT",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
