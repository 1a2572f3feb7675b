//! Four-letter personality type code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::question::{Dimension, Preference};
use crate::domain::foundation::ValidationError;

/// A personality type such as `INTJ`: one letter per dimension, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonalityType([Preference; 4]);

impl PersonalityType {
    /// Builds a type from four letters, checking each sits in its dimension.
    pub fn from_preferences(preferences: [Preference; 4]) -> Result<Self, ValidationError> {
        for (dimension, preference) in Dimension::all().iter().zip(preferences.iter()) {
            if preference.dimension() != *dimension {
                return Err(ValidationError::invalid_format(
                    "personality_type",
                    format!("'{}' does not belong to {}", preference, dimension.code()),
                ));
            }
        }
        Ok(Self(preferences))
    }

    /// Builds a type from the winning letter of each dimension.
    pub(super) fn from_winners(winners: [Preference; 4]) -> Self {
        Self(winners)
    }

    /// Returns the chosen letter for a dimension.
    pub fn preference(&self, dimension: Dimension) -> Preference {
        self.0[dimension.position()]
    }

    /// Returns the four-letter code.
    pub fn code(&self) -> String {
        self.0.iter().map(Preference::letter).collect()
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for PersonalityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.trim().chars().collect();
        if letters.len() != 4 {
            return Err(ValidationError::invalid_format(
                "personality_type",
                format!("expected 4 letters, got '{}'", s),
            ));
        }

        let mut preferences = [Preference::E; 4];
        for (slot, letter) in preferences.iter_mut().zip(letters) {
            *slot = Preference::from_letter(letter).ok_or_else(|| {
                ValidationError::invalid_format(
                    "personality_type",
                    format!("'{}' is not a preference letter", letter),
                )
            })?;
        }
        Self::from_preferences(preferences)
    }
}

impl TryFrom<String> for PersonalityType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PersonalityType> for String {
    fn from(value: PersonalityType) -> Self {
        value.code()
    }
}
