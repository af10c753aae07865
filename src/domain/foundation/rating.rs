//! Rating value object for competency self-assessment (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Self-assessed competency level: 1 (novice) to 5 (expert).
///
/// There is deliberately no `Default`: an item the user never touched has no
/// rating, and the selector's pre-selected value must not leak into storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Rating {
    Novice = 1,
    Developing = 2,
    Competent = 3,
    Proficient = 4,
    Expert = 5,
}

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Value the selector shows before the user picks anything.
    pub const DISPLAY_DEFAULT: Rating = Rating::Competent;

    /// All levels in ascending order.
    pub const ALL: [Rating; 5] = [
        Rating::Novice,
        Rating::Developing,
        Rating::Competent,
        Rating::Proficient,
        Rating::Expert,
    ];

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Rating::Novice),
            2 => Ok(Rating::Developing),
            3 => Ok(Rating::Competent),
            4 => Ok(Rating::Proficient),
            5 => Ok(Rating::Expert),
            _ => Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Novice => "Novice",
            Rating::Developing => "Developing",
            Rating::Competent => "Competent",
            Rating::Proficient => "Proficient",
            Rating::Expert => "Expert",
        }
    }

    /// Returns the scale description shown in the rating legend.
    pub fn description(&self) -> &'static str {
        match self {
            Rating::Novice => "Limited experience or confidence in this area",
            Rating::Developing => "Basic understanding with occasional application",
            Rating::Competent => "Consistent application in routine situations",
            Rating::Proficient => "Adaptable application across diverse situations",
            Rating::Expert => "Intuitive mastery with ability to coach others",
        }
    }

    /// Legend line, e.g. `3 = Competent: Consistent application in routine situations`.
    pub fn legend_line(&self) -> String {
        format!("{} = {}: {}", self.value(), self.label(), self.description())
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::try_from_u8(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
