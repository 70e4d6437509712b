// ABOUTME: Image argument for compute-group image updates.
// ABOUTME: Either the symbolic "latest" marker or an opaque machine image ID.

use super::id::ImageId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const LATEST: &str = "latest";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageSpecError {
    #[error("image cannot be empty")]
    Empty,

    #[error("image cannot contain whitespace: '{0}'")]
    Whitespace(String),
}

/// The image a stack's compute group should boot from.
///
/// Identifiers are not checked against any naming scheme; the provisioner is
/// the authority on whether an image exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSpec {
    /// Let the provisioner resolve the newest matching image.
    Latest,
    /// A concrete machine image, e.g. `ami-0a1b2c3d`.
    Id(ImageId),
}

impl ImageSpec {
    pub fn parse(s: &str) -> Result<Self, ImageSpecError> {
        if s.is_empty() {
            return Err(ImageSpecError::Empty);
        }

        if s.chars().any(char::is_whitespace) {
            return Err(ImageSpecError::Whitespace(s.to_string()));
        }

        if s == LATEST {
            Ok(ImageSpec::Latest)
        } else {
            Ok(ImageSpec::Id(ImageId::new(s)))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImageSpec::Latest => LATEST,
            ImageSpec::Id(id) => id.as_str(),
        }
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, ImageSpec::Latest)
    }
}

impl fmt::Display for ImageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSpec {
    type Err = ImageSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ImageId> for ImageSpec {
    fn from(id: ImageId) -> Self {
        ImageSpec::Id(id)
    }
}
