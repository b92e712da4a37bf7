//! JSON HTTP API for the portfolio.
//!
//! Exposes an axum [`Router`] backed by any
//! [`folio_core::store::PortfolioStore`]. Auth, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! Every entity endpoint speaks the same contract: `GET` reads (some take
//! query-string read modes), `POST` mutates via an `action` field in the
//! JSON body. Unsupported methods answer 405.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folio_api::api_router(store.clone()))
//! ```

pub mod achievements;
pub mod certifications;
pub mod contacts;
pub mod dispatch;
pub mod education;
pub mod error;
pub mod experience;
pub mod profile;
pub mod stats;

use std::sync::Arc;

use axum::{Router, routing::get};
use folio_core::{
  entity::{
    Achievement, Certification, ContactMessage, Education, Experience, Hobby,
    Project, Skill,
  },
  store::PortfolioStore,
};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PortfolioStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/profile", get(profile::read::<S>).post(profile::update::<S>))
    .route(
      "/projects",
      get(dispatch::list::<S, Project>).post(dispatch::mutate::<S, Project>),
    )
    .route(
      "/skills",
      get(dispatch::list::<S, Skill>).post(dispatch::mutate::<S, Skill>),
    )
    .route(
      "/experience",
      get(experience::list::<S>).post(dispatch::mutate::<S, Experience>),
    )
    .route(
      "/education",
      get(education::list::<S>).post(dispatch::mutate::<S, Education>),
    )
    .route(
      "/certifications",
      get(certifications::list::<S>).post(dispatch::mutate::<S, Certification>),
    )
    .route(
      "/achievements",
      get(achievements::list::<S>).post(dispatch::mutate::<S, Achievement>),
    )
    .route(
      "/hobbies",
      get(dispatch::list::<S, Hobby>).post(dispatch::mutate::<S, Hobby>),
    )
    .route(
      "/contacts",
      get(dispatch::list::<S, ContactMessage>).post(contacts::submit::<S>),
    )
    .route("/stats", get(stats::report::<S>))
    .with_state(store)
}

#[cfg(test)]
mod tests;
