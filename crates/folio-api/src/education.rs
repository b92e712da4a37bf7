//! `/education` — with summary and by-degree read modes.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  response::{IntoResponse, Response},
};
use folio_core::{entity::Education, store::PortfolioStore};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub summary: Option<bool>,
  #[serde(default)]
  pub by_degree: Option<bool>,
}

/// `GET /education`, plus `?summary=true` for counts and the overall date
/// range, and `?by_degree=true` for records grouped by degree type.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Response, ApiError>
where
  S: PortfolioStore,
{
  if params.summary.unwrap_or(false) {
    let summary = store.education_summary().await.map_err(ApiError::store)?;
    return Ok(Json(summary).into_response());
  }

  if params.by_degree.unwrap_or(false) {
    let groups = store.education_by_degree().await.map_err(ApiError::store)?;
    return Ok(Json(groups).into_response());
  }

  let rows = store
    .list::<Education>(None)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(rows).into_response())
}
