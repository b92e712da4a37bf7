//! Error types for `folio-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field was absent or empty after trimming.
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("invalid email address: {0:?}")]
  InvalidEmail(String),

  /// A stored row could not be decoded back into a record.
  #[error("cannot decode column {column}: expected {expected}")]
  Decode {
    column:   &'static str,
    expected: &'static str,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
