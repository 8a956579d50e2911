//! Crate error type.

use std::io;

/// Errors raised while producing console output.
///
/// These never cross the C boundary: exported functions log and drop them.
#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    #[error("failed to write greeting to stdout")]
    Stdout(#[from] io::Error),
}
