// ABOUTME: Version label distinguishing sibling stacks that share a name.
// ABOUTME: Restricted to ASCII alphanumerics so "<name>-<version>" stays a valid stack name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StackVersionError {
    #[error("stack version cannot be empty")]
    Empty,

    #[error("invalid character in stack version: '{0}'")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StackVersion(String);

impl StackVersion {
    pub fn new(value: &str) -> Result<Self, StackVersionError> {
        if value.is_empty() {
            return Err(StackVersionError::Empty);
        }

        if let Some(c) = value.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(StackVersionError::InvalidChar(c));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StackVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StackVersion {
    type Err = StackVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for StackVersion {
    type Error = StackVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<StackVersion> for String {
    fn from(version: StackVersion) -> Self {
        version.0
    }
}
