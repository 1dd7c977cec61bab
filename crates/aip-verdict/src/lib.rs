//! Validates an analysis model's JSON response into a strongly-typed
//! [`aip_schemas::IntegrityCheckpoint`]. `check_integrity` is a pure
//! function: it never calls a model and never performs I/O.

mod check;
mod error;
mod repair;
mod response;

pub use check::{check_integrity, CheckpointContext, ExtractionInfo};
pub use error::VerdictError;
pub use repair::extract_and_repair;
