//! `/experience` — work history, with duration reporting read modes.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  response::{IntoResponse, Response},
};
use chrono::Utc;
use folio_core::{entity::Experience, store::PortfolioStore};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub duration: Option<bool>,
  #[serde(default)]
  pub total_years: Option<bool>,
}

/// `GET /experience`, plus `?duration=true` for per-entry durations and
/// `?total_years=true` for the summed figure.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Response, ApiError>
where
  S: PortfolioStore,
{
  let today = Utc::now().date_naive();

  if params.total_years.unwrap_or(false) {
    let years = store
      .total_experience_years(today)
      .await
      .map_err(ApiError::store)?;
    return Ok(Json(json!({ "total_years": years })).into_response());
  }

  if params.duration.unwrap_or(false) {
    let rows = store
      .experience_durations(today)
      .await
      .map_err(ApiError::store)?;
    return Ok(Json(rows).into_response());
  }

  let rows = store
    .list::<Experience>(None)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(rows).into_response())
}
