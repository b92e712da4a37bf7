//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

/// Validation failures from the core layer surface as 400s; anything else
/// is a store-side failure.
impl From<folio_core::Error> for ApiError {
  fn from(err: folio_core::Error) -> Self {
    match err {
      folio_core::Error::MissingField(_) | folio_core::Error::InvalidEmail(_) => {
        Self::BadRequest(err.to_string())
      }
      other => Self::store(other),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Store(e) => {
        // Driver detail stays in the log; the client gets a generic message.
        tracing::error!(error = %e, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "internal server error".to_owned(),
        )
      }
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}
