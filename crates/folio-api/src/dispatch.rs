//! The generic dispatch layer shared by every entity endpoint.
//!
//! `GET` lists records; `POST` carries a JSON body whose `action` field
//! selects the mutation (`add`, `update`, `delete`). Entities with extra
//! read modes or a different write surface (profile, contacts) build on the
//! same pieces in their own modules.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use folio_core::{
  field::{RecordId, Stored},
  record::Record,
  store::PortfolioStore,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::error::ApiError;

/// A parsed mutation request.
pub enum Mutation<R> {
  Add(R),
  Update(RecordId, R),
  Delete(RecordId),
}

/// Parse a POST body into a [`Mutation`]. The `action` field is required
/// and must be one of the three verbs; `update` and `delete` also require a
/// numeric `id`.
pub fn parse_mutation<R>(body: &Value) -> Result<Mutation<R>, ApiError>
where
  R: DeserializeOwned,
{
  match action_of(body)? {
    "add" => Ok(Mutation::Add(decode_record(body)?)),
    "update" => Ok(Mutation::Update(require_id(body)?, decode_record(body)?)),
    "delete" => Ok(Mutation::Delete(require_id(body)?)),
    other => Err(ApiError::BadRequest(format!("invalid action: {other:?}"))),
  }
}

pub(crate) fn action_of(body: &Value) -> Result<&str, ApiError> {
  body
    .get("action")
    .and_then(Value::as_str)
    .ok_or_else(|| ApiError::BadRequest("action parameter is required".to_owned()))
}

/// Deserialize the record from the body. Unknown keys (`action`, `id`) are
/// ignored; a missing required field or a malformed value is a 400.
pub(crate) fn decode_record<R>(body: &Value) -> Result<R, ApiError>
where
  R: DeserializeOwned,
{
  serde_json::from_value(body.clone()).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn require_id(body: &Value) -> Result<RecordId, ApiError> {
  body
    .get("id")
    .and_then(Value::as_i64)
    .ok_or_else(|| ApiError::BadRequest("id parameter is required".to_owned()))
}

/// Run a parsed mutation against the store and shape the acknowledgement.
///
/// Validation happens here, before the store is touched, so a bad record is
/// a 400 rather than a store error. `add` answers 201 with the new id;
/// `update`/`delete` answer 200, or 404 when no row matched.
pub async fn apply<S, R>(
  store: &S,
  mutation: Mutation<R>,
) -> Result<(StatusCode, Json<Value>), ApiError>
where
  S: PortfolioStore,
  R: Record,
{
  match mutation {
    Mutation::Add(record) => {
      record.validate()?;
      let id = store.add(record).await.map_err(ApiError::store)?;
      Ok((
        StatusCode::CREATED,
        Json(json!({ "message": format!("{} Added", R::NOUN), "id": id })),
      ))
    }
    Mutation::Update(id, record) => {
      record.validate()?;
      if store.update(id, record).await.map_err(ApiError::store)? {
        Ok((
          StatusCode::OK,
          Json(json!({ "message": format!("{} Updated", R::NOUN) })),
        ))
      } else {
        Err(ApiError::NotFound(format!("{} {id} not found", R::NOUN)))
      }
    }
    Mutation::Delete(id) => {
      if store.delete::<R>(id).await.map_err(ApiError::store)? {
        Ok((
          StatusCode::OK,
          Json(json!({ "message": format!("{} Deleted", R::NOUN) })),
        ))
      } else {
        Err(ApiError::NotFound(format!("{} {id} not found", R::NOUN)))
      }
    }
  }
}

/// `GET` handler: the full list in the entity's default order.
pub async fn list<S, R>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Stored<R>>>, ApiError>
where
  S: PortfolioStore,
  R: Record + Serialize,
{
  let rows = store.list::<R>(None).await.map_err(ApiError::store)?;
  Ok(Json(rows))
}

/// `POST` handler: parse the action and apply it.
pub async fn mutate<S, R>(
  State(store): State<Arc<S>>,
  Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError>
where
  S: PortfolioStore,
  R: Record + DeserializeOwned,
{
  let mutation = parse_mutation::<R>(&body)?;
  apply(store.as_ref(), mutation).await
}
