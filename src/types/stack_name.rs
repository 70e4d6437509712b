// ABOUTME: Application name shared by every version of a senza stack.
// ABOUTME: Must be usable as a CloudFormation stack prefix and a DNS label of the app domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest name that still fits in one DNS label of the app domain.
const MAX_LEN: usize = 63;

#[derive(Debug, Error)]
pub enum StackNameError {
    #[error("stack name cannot be empty")]
    Empty,

    #[error("stack name is {0} characters long, at most 63 fit in a domain label")]
    TooLong(usize),

    #[error("stack name must start with a letter for CloudFormation, found '{0}'")]
    MustStartWithLetter(char),

    #[error("stack name cannot end with '-', senza appends '-<version>' to it")]
    TrailingHyphen,

    #[error("stack name must be lowercase to match its domain, found '{0}'")]
    Uppercase(char),

    #[error("invalid character in stack name: '{0}'")]
    InvalidChar(char),
}

/// Name of an application, e.g. `kio` for the stacks `kio-v1` and `kio-v2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StackName(String);

impl StackName {
    pub fn new(value: &str) -> Result<Self, StackNameError> {
        let mut chars = value.chars();
        let first = chars.next().ok_or(StackNameError::Empty)?;

        if value.len() > MAX_LEN {
            return Err(StackNameError::TooLong(value.len()));
        }
        if !first.is_ascii_alphabetic() {
            return Err(StackNameError::MustStartWithLetter(first));
        }

        for c in value.chars() {
            match c {
                'a'..='z' | '0'..='9' | '-' => {}
                'A'..='Z' => return Err(StackNameError::Uppercase(c)),
                _ => return Err(StackNameError::InvalidChar(c)),
            }
        }

        if value.ends_with('-') {
            return Err(StackNameError::TrailingHyphen);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StackName {
    type Err = StackNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for StackName {
    type Error = StackNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<StackName> for String {
    fn from(name: StackName) -> Self {
        name.0
    }
}
