//! Mondioring competition level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mondioring levels, ordered by difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "dog_level")]
pub enum DogLevel {
    /// Mondioring I.
    #[sqlx(rename = "MR1")]
    #[serde(rename = "MR1")]
    Mr1,
    /// Mondioring II.
    #[sqlx(rename = "MR2")]
    #[serde(rename = "MR2")]
    Mr2,
    /// Mondioring III.
    #[sqlx(rename = "MR3")]
    #[serde(rename = "MR3")]
    Mr3,
}

impl DogLevel {
    /// Return the level as its competition label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mr1 => "MR1",
            Self::Mr2 => "MR2",
            Self::Mr3 => "MR3",
        }
    }
}

impl fmt::Display for DogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DogLevel {
    type Err = mondio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MR1" => Ok(Self::Mr1),
            "MR2" => Ok(Self::Mr2),
            "MR3" => Ok(Self::Mr3),
            _ => Err(mondio_core::AppError::validation(format!(
                "Invalid level: '{s}'. Expected one of: MR1, MR2, MR3"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("MR1".parse::<DogLevel>().unwrap(), DogLevel::Mr1);
        assert_eq!("mr3".parse::<DogLevel>().unwrap(), DogLevel::Mr3);
        assert!("MR4".parse::<DogLevel>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for level in [DogLevel::Mr1, DogLevel::Mr2, DogLevel::Mr3] {
            assert_eq!(level.to_string().parse::<DogLevel>().unwrap(), level);
        }
    }
}
