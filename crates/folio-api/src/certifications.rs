//! `/certifications` — with an active-only read mode.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::Utc;
use folio_core::{
  entity::Certification,
  field::{Filter, Stored},
  store::PortfolioStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub active: Option<bool>,
}

/// `GET /certifications`, plus `?active=true` to exclude expired entries.
/// A certification with no expiry date never expires.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Stored<Certification>>>, ApiError>
where
  S: PortfolioStore,
{
  let filter = params
    .active
    .unwrap_or(false)
    .then(|| Filter::not_expired("expiry_date", Utc::now().date_naive()));

  let rows = store
    .list::<Certification>(filter)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(rows))
}
