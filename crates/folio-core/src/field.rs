//! The field-value model shared between records and storage backends.
//!
//! Records describe themselves as ordered sequences of [`FieldValue`]s so a
//! backend can bind and read them without knowing any concrete entity type.
//! The variants mirror SQLite's storage classes, which keeps the mapping in
//! `folio-store-sqlite` trivial. Dates travel as `YYYY-MM-DD` text,
//! timestamps as RFC 3339 text, booleans as 0/1 integers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Surrogate integer identifier assigned by the store on insert. Immutable
/// once assigned, unique within its entity's table, never reused.
pub type RecordId = i64;

// ─── FieldValue ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
  Null,
  Integer(i64),
  Real(f64),
  Text(String),
}

impl From<i64> for FieldValue {
  fn from(v: i64) -> Self { Self::Integer(v) }
}

impl From<bool> for FieldValue {
  fn from(v: bool) -> Self { Self::Integer(v as i64) }
}

impl From<f64> for FieldValue {
  fn from(v: f64) -> Self { Self::Real(v) }
}

impl From<String> for FieldValue {
  fn from(v: String) -> Self { Self::Text(v) }
}

impl From<&str> for FieldValue {
  fn from(v: &str) -> Self { Self::Text(v.to_owned()) }
}

impl From<NaiveDate> for FieldValue {
  fn from(v: NaiveDate) -> Self { Self::Text(v.format("%Y-%m-%d").to_string()) }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
  fn from(v: Option<T>) -> Self {
    match v {
      Some(inner) => inner.into(),
      None => Self::Null,
    }
  }
}

// ─── FieldCursor ─────────────────────────────────────────────────────────────

/// Sequential reader over one row's values, in `SELECT_COLUMNS` order.
///
/// Each accessor consumes the next value and fails with a column-qualified
/// [`Error::Decode`] on a type mismatch.
pub struct FieldCursor {
  fields: std::vec::IntoIter<FieldValue>,
}

impl FieldCursor {
  pub fn new(fields: Vec<FieldValue>) -> Self {
    Self { fields: fields.into_iter() }
  }

  fn next(&mut self, column: &'static str) -> Result<FieldValue> {
    self.fields.next().ok_or(Error::Decode {
      column,
      expected: "a value, but the row was exhausted",
    })
  }

  pub fn text(&mut self, column: &'static str) -> Result<String> {
    match self.next(column)? {
      FieldValue::Text(s) => Ok(s),
      _ => Err(Error::Decode { column, expected: "text" }),
    }
  }

  pub fn opt_text(&mut self, column: &'static str) -> Result<Option<String>> {
    match self.next(column)? {
      FieldValue::Null => Ok(None),
      FieldValue::Text(s) => Ok(Some(s)),
      _ => Err(Error::Decode { column, expected: "text or null" }),
    }
  }

  pub fn integer(&mut self, column: &'static str) -> Result<i64> {
    match self.next(column)? {
      FieldValue::Integer(i) => Ok(i),
      _ => Err(Error::Decode { column, expected: "integer" }),
    }
  }

  pub fn opt_integer(&mut self, column: &'static str) -> Result<Option<i64>> {
    match self.next(column)? {
      FieldValue::Null => Ok(None),
      FieldValue::Integer(i) => Ok(Some(i)),
      _ => Err(Error::Decode { column, expected: "integer or null" }),
    }
  }

  pub fn boolean(&mut self, column: &'static str) -> Result<bool> {
    Ok(self.integer(column)? != 0)
  }

  pub fn date(&mut self, column: &'static str) -> Result<NaiveDate> {
    let text = self.text(column)?;
    parse_date(&text).ok_or(Error::Decode { column, expected: "a YYYY-MM-DD date" })
  }

  pub fn opt_date(&mut self, column: &'static str) -> Result<Option<NaiveDate>> {
    match self.opt_text(column)? {
      None => Ok(None),
      Some(text) => parse_date(&text)
        .map(Some)
        .ok_or(Error::Decode { column, expected: "a YYYY-MM-DD date" }),
    }
  }

  /// An RFC 3339 or SQLite `CURRENT_TIMESTAMP` (`YYYY-MM-DD HH:MM:SS`, UTC)
  /// timestamp.
  pub fn timestamp(&mut self, column: &'static str) -> Result<DateTime<Utc>> {
    let text = self.text(column)?;
    parse_timestamp(&text).ok_or(Error::Decode { column, expected: "a timestamp" })
  }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
    return Some(dt.with_timezone(&Utc));
  }
  chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
    .ok()
    .map(|naive| naive.and_utc())
}

// ─── Stored ──────────────────────────────────────────────────────────────────

/// A persisted record together with its store-assigned identifier.
///
/// Serialises flat: `{"id": 3, ...record fields...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stored<R> {
  pub id: RecordId,
  #[serde(flatten)]
  pub record: R,
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// A fixed restriction applied to a `list` call.
///
/// Only the named constructors below exist — this is an escape hatch for the
/// handful of filtered reads, not a query builder.
#[derive(Debug, Clone)]
pub struct Filter {
  pub clause: String,
  pub params: Vec<FieldValue>,
}

impl Filter {
  /// Equality on a single column.
  pub fn equals(column: &str, value: impl Into<FieldValue>) -> Self {
    Self {
      clause: format!("{column} = ?"),
      params: vec![value.into()],
    }
  }

  /// Null or on/after `today` — "not expired". A record with no expiry is
  /// always included.
  pub fn not_expired(column: &str, today: NaiveDate) -> Self {
    Self {
      clause: format!("({column} IS NULL OR {column} >= ?)"),
      params: vec![today.into()],
    }
  }
}
