// ABOUTME: Traffic share expressed as a whole percentage.
// ABOUTME: Construction rejects anything above 100.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PercentageError {
    #[error("percentage must be between 0 and 100, got {0}")]
    OutOfRange(u32),

    #[error("invalid percentage: '{0}'")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);
    pub const FULL: Percentage = Percentage(100);

    pub fn new(value: u32) -> Result<Self, PercentageError> {
        if value > 100 {
            return Err(PercentageError::OutOfRange(value));
        }
        // Bounded above, so the narrowing is lossless.
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Percentage {
    type Err = PercentageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| PercentageError::Invalid(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<u32> for Percentage {
    type Error = PercentageError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(percentage: Percentage) -> Self {
        percentage.0
    }
}
