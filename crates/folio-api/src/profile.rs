//! `/profile` — the singleton profile record.
//!
//! Only two operations exist: read and update. The id is fixed; `add` and
//! `delete` are not part of this endpoint's vocabulary.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use folio_core::{
  entity::{PROFILE_ID, Profile},
  field::Stored,
  record::Record,
  store::PortfolioStore,
};
use serde_json::{Value, json};

use crate::{
  dispatch::{action_of, decode_record},
  error::ApiError,
};

pub async fn read<S>(State(store): State<Arc<S>>) -> Result<Json<Stored<Profile>>, ApiError>
where
  S: PortfolioStore,
{
  store
    .get::<Profile>(PROFILE_ID)
    .await
    .map_err(ApiError::store)?
    .map(Json)
    .ok_or_else(|| ApiError::NotFound("Profile not found".to_owned()))
}

pub async fn update<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError>
where
  S: PortfolioStore,
{
  let action = action_of(&body)?;
  if action != "update" {
    return Err(ApiError::BadRequest(format!("invalid action: {action:?}")));
  }
  let record: Profile = decode_record(&body)?;
  record.validate()?;
  if store
    .update(PROFILE_ID, record)
    .await
    .map_err(ApiError::store)?
  {
    Ok((StatusCode::OK, Json(json!({ "message": "Profile Updated" }))))
  } else {
    Err(ApiError::NotFound("Profile not found".to_owned()))
  }
}
