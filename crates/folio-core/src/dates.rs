//! Calendar arithmetic for experience durations.

use chrono::{Datelike, NaiveDate};

/// Whole months between two dates; a partial trailing month does not count
/// (MySQL `TIMESTAMPDIFF(MONTH, ...)` semantics).
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
  let mut months = (end.year() as i64 - start.year() as i64) * 12
    + (end.month() as i64 - start.month() as i64);
  if end.day() < start.day() {
    months -= 1;
  }
  months
}

/// Human-readable rendering, e.g. `"2 years 5 months"`.
pub fn duration_text(months: i64) -> String {
  format!("{} years {} months", months / 12, months % 12)
}
