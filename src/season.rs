//! NBA season identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A season in the stats API's "YYYY-YY" form, e.g. `2024-25`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season {
    start_year: u16,
}

/// Season parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeasonError {
    /// Not in "YYYY-YY" form
    #[error("Invalid season '{0}', expected YYYY-YY (e.g. 2024-25)")]
    Format(String),
    /// Second half does not follow the first year
    #[error("Season '{0}' does not span consecutive years")]
    NotConsecutive(String),
}

impl Season {
    /// Season starting in the given calendar year
    pub fn starting(start_year: u16) -> Self {
        Self { start_year }
    }

    pub fn start_year(&self) -> u16 {
        self.start_year
    }

    /// Calendar year the season ends in, one past `start_year`
    pub fn end_year(&self) -> u32 {
        u32::from(self.start_year) + 1
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.start_year, self.end_year() % 100)
    }
}

impl FromStr for Season {
    type Err = SeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let format_err = || SeasonError::Format(trimmed.to_string());

        let (start, end) = trimmed.split_once('-').ok_or_else(format_err)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(format_err());
        }
        if !start.bytes().chain(end.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(format_err());
        }

        let start_year: u16 = start.parse().map_err(|_| format_err())?;
        let end_suffix: u32 = end.parse().map_err(|_| format_err())?;

        if Self::starting(start_year).end_year() % 100 != end_suffix {
            return Err(SeasonError::NotConsecutive(trimmed.to_string()));
        }

        Ok(Self { start_year })
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
