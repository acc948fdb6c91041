// Error kinds for song generation.
//
// All errors here are fatal to the current invocation: generation is a single
// pure computation, so there is nothing to retry or partially recover.
// Unrecognized CLI flags are rejected by the argument parser before any of
// this code runs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SongError {
    /// A note name outside the 12 recognized pitch-class names.
    #[error("unrecognized note name: {0:?}")]
    InvalidNote(String),

    /// An out-of-range or degenerate generation parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
