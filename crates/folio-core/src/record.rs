//! The [`Record`] trait — the configuration surface of the generic
//! repository.
//!
//! A concrete entity contributes no imperative storage code of its own: it
//! names its table and columns, declares a default ordering, and converts
//! itself to and from the backend-neutral field-value model. Everything else
//! (SQL text, binding, row iteration) lives once in the storage backend.

use crate::{
  Result,
  field::{FieldCursor, FieldValue},
};

pub trait Record: Sized + Send + 'static {
  /// Table the records live in.
  const TABLE: &'static str;

  /// Capitalised noun used in acknowledgement messages ("Project Added").
  const NOUN: &'static str;

  /// Columns written on insert and update, in [`Record::field_values`]
  /// order. Never includes the id.
  const INSERT_COLUMNS: &'static [&'static str];

  /// Columns read on select, in [`Record::from_fields`] order. May include
  /// read-only joined or server-assigned columns that are absent from
  /// `INSERT_COLUMNS`.
  const SELECT_COLUMNS: &'static [&'static str];

  /// FROM clause for reads; entities that join override this.
  const FROM_CLAUSE: &'static str = Self::TABLE;

  /// Identifier column as addressed within `FROM_CLAUSE`.
  const SELECT_ID: &'static str = "id";

  /// Default ordering for `list`; the empty string means insertion order.
  const DEFAULT_ORDER: &'static str;

  /// Check required fields are present and non-empty. SQLite accepts empty
  /// strings for NOT NULL columns, so this is where "required" lives.
  fn validate(&self) -> Result<()>;

  /// Free-text hygiene: strip markup and escape HTML-significant
  /// characters. Applied by the store before every insert and update.
  fn sanitized(self) -> Self;

  /// Values for `INSERT_COLUMNS`, in order.
  fn field_values(&self) -> Vec<FieldValue>;

  /// Rebuild from a row read in `SELECT_COLUMNS` order.
  fn from_fields(row: &mut FieldCursor) -> Result<Self>;
}
