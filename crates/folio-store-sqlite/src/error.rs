//! Error type for `folio-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] folio_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// A column held a BLOB, which no portfolio entity stores.
  #[error("unexpected BLOB value in a record column")]
  UnexpectedBlob,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
