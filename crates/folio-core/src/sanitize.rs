//! Free-text hygiene and field validation helpers.
//!
//! [`clean`] reproduces the presentation-layer step applied to every
//! free-text field on write: markup is stripped, then HTML-significant
//! characters are entity-escaped. This is hygiene, not a security boundary;
//! output encoding still belongs to the client.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Remove `<...>` spans, then escape `& < > " '`.
pub fn clean(input: &str) -> String {
  escape_html(&strip_tags(input))
}

/// Require a non-empty (post-trim) string for field `name`.
pub fn required(name: &'static str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    Err(Error::MissingField(name))
  } else {
    Ok(())
  }
}

static EMAIL_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

/// Minimal shape check: one `@`, a dotted domain, no whitespace.
pub fn validate_email(address: &str) -> Result<()> {
  if EMAIL_RE.is_match(address) {
    Ok(())
  } else {
    Err(Error::InvalidEmail(address.to_owned()))
  }
}

fn strip_tags(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut depth = 0usize;
  for ch in input.chars() {
    match ch {
      '<' => depth += 1,
      '>' if depth > 0 => depth -= 1,
      c if depth == 0 => out.push(c),
      _ => {}
    }
  }
  out
}

fn escape_html(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#039;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clean_strips_markup_and_escapes() {
    assert_eq!(clean("<b>bold</b> & \"quoted\""), "bold &amp; &quot;quoted&quot;");
    assert_eq!(clean("plain text"), "plain text");
    assert_eq!(clean("<script>alert('x')</script>"), "alert(&#039;x&#039;)");
  }

  #[test]
  fn clean_keeps_stray_closing_angle() {
    assert_eq!(clean("a > b"), "a &gt; b");
  }

  #[test]
  fn required_rejects_blank() {
    assert!(required("title", "  ").is_err());
    assert!(required("title", "ok").is_ok());
  }

  #[test]
  fn email_shapes() {
    assert!(validate_email("visitor@example.com").is_ok());
    assert!(validate_email("no-at-sign").is_err());
    assert!(validate_email("a@b").is_err());
    assert!(validate_email("spaces in@example.com").is_err());
  }
}
