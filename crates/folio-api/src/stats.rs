//! `/stats` — the read-only portfolio statistics report.

use std::sync::Arc;

use axum::{Json, extract::State};
use folio_core::store::{PortfolioStats, PortfolioStore};

use crate::error::ApiError;

pub async fn report<S>(State(store): State<Arc<S>>) -> Result<Json<PortfolioStats>, ApiError>
where
  S: PortfolioStore,
{
  let stats = store.portfolio_stats().await.map_err(ApiError::store)?;
  Ok(Json(stats))
}
