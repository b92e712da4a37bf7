//! Core types and trait definitions for the Folio portfolio store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Every entity (profile, project, skill, ...) is pure *configuration* of
//! the generic [`record::Record`] abstraction — a table name, ordered column
//! lists, a default ordering, and conversions to and from the field-value
//! model. Storage backends implement [`store::PortfolioStore`] over it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod dates;
pub mod entity;
pub mod error;
pub mod field;
pub mod record;
pub mod sanitize;
pub mod store;

pub use error::{Error, Result};
