//! `/contacts` — visitor message submission.
//!
//! The write surface is add-only: the body may omit `action` entirely or
//! spell out `"add"`, and nothing else. `GET` lists received messages,
//! newest first.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use folio_core::{entity::ContactMessage, record::Record, store::PortfolioStore};
use serde_json::{Value, json};

use crate::{dispatch::decode_record, error::ApiError};

pub async fn submit<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError>
where
  S: PortfolioStore,
{
  if let Some(action) = body.get("action") {
    if action.as_str() != Some("add") {
      return Err(ApiError::BadRequest(format!("invalid action: {action}")));
    }
  }

  let record: ContactMessage = decode_record(&body)?;
  record.validate()?;
  let id = store.add(record).await.map_err(ApiError::store)?;
  Ok((
    StatusCode::CREATED,
    Json(json!({ "message": "Message Sent", "id": id })),
  ))
}
