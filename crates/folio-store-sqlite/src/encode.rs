//! Conversions between the backend-neutral field-value model and rusqlite's
//! value type, plus date parsing for aggregate rows.

use chrono::NaiveDate;
use folio_core::field::FieldValue;

use crate::{Error, Result};

pub fn to_sql_value(value: FieldValue) -> rusqlite::types::Value {
  use rusqlite::types::Value;
  match value {
    FieldValue::Null => Value::Null,
    FieldValue::Integer(i) => Value::Integer(i),
    FieldValue::Real(f) => Value::Real(f),
    FieldValue::Text(s) => Value::Text(s),
  }
}

pub fn from_sql_value(value: rusqlite::types::Value) -> Result<FieldValue> {
  use rusqlite::types::Value;
  match value {
    Value::Null => Ok(FieldValue::Null),
    Value::Integer(i) => Ok(FieldValue::Integer(i)),
    Value::Real(f) => Ok(FieldValue::Real(f)),
    Value::Text(s) => Ok(FieldValue::Text(s)),
    Value::Blob(_) => Err(Error::UnexpectedBlob),
  }
}

/// Parse an optional `YYYY-MM-DD` column from an aggregate row.
pub fn parse_opt_date(text: Option<String>) -> Result<Option<NaiveDate>> {
  text
    .map(|s| {
      NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
    })
    .transpose()
}
