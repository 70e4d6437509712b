// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Invalid names, versions, percentages, and regions are rejected at parse time.

mod id;
mod image_spec;
mod percentage;
mod region;
mod stack_name;
mod stack_version;

pub use id::{Id, ImageId, StackId};
pub use image_spec::{ImageSpec, ImageSpecError};
pub use percentage::{Percentage, PercentageError};
pub use region::{Region, RegionError};
pub use stack_name::{StackName, StackNameError};
pub use stack_version::{StackVersion, StackVersionError};
