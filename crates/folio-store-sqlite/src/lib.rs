//! SQLite backend for the Folio portfolio store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. All SQL text is generated
//! once per call from each entity's [`folio_core::record::Record`]
//! configuration — no entity has bespoke CRUD statements.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
