//! Error type shared by construction and queries.

use thiserror::Error;

use crate::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A table needs at least one element.
    #[error("cannot build a sparse table over an empty array")]
    EmptyInput,

    /// The closed interval `[left, right]` is empty or leaves `0..len`.
    #[error("invalid range [{left}, {right}] for an array of length {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },

    /// Index queries only make sense for an extremum.
    #[error("operation {0} doesn't support index queries")]
    UnsupportedOperation(Operation),
}

pub type Result<T> = std::result::Result<T, Error>;
