//! `/achievements` — with category filtering and a grouped summary.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  response::{IntoResponse, Response},
};
use folio_core::{
  entity::Achievement,
  field::Filter,
  store::PortfolioStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub summary: Option<bool>,
}

/// `GET /achievements`, plus `?category=<name>` to filter and
/// `?summary=true` for per-category counts. A category filter takes
/// precedence over the summary flag.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Response, ApiError>
where
  S: PortfolioStore,
{
  if let Some(category) = params.category {
    let rows = store
      .list::<Achievement>(Some(Filter::equals("category", category)))
      .await
      .map_err(ApiError::store)?;
    return Ok(Json(rows).into_response());
  }

  if params.summary.unwrap_or(false) {
    let groups = store.achievement_summary().await.map_err(ApiError::store)?;
    return Ok(Json(groups).into_response());
  }

  let rows = store
    .list::<Achievement>(None)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(rows).into_response())
}
