// ABOUTME: External stack provisioner abstraction and its senza implementation.
// ABOUTME: Exports the Provisioner trait, its error types, and SenzaCli.

mod error;
mod senza;
mod traits;

pub use error::{DomainsError, ExecutionError, TrafficError};
pub use senza::{DEFAULT_BINARY, SenzaCli};
pub use traits::Provisioner;
