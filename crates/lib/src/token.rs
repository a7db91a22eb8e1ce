//! Flag extraction from raw command strings.
//!
//! A command string like `webpack --config=prod.js --watch` decomposes into a
//! base command name and an ordered list of flag/value pairs. The scan is an
//! explicit character walk rather than a regex so the span boundaries are
//! spelled out:
//!
//! - a flag span starts at a `-` preceded by whitespace (or the start of the
//!   string)
//! - a span ends before the next flag start or before a `&&` delimiter,
//!   whichever comes first
//! - within a span, the first `=` splits name from value; otherwise the first
//!   whitespace run does, and a missing remainder means the flag has no value
//!
//! Runs of whitespace between a flag name and its value never produce empty
//! values: the remainder is trimmed before it is stored.

use serde::{Deserialize, Serialize};

use crate::consts;

/// One `name`/`value` pair extracted from a command string.
///
/// `value` is `None` when the flag was given without an associated value.
/// Order within an action's flag list follows source order and is preserved
/// all the way into the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
  pub name: String,
  pub value: Option<String>,
}

impl Flag {
  pub fn new(name: impl Into<String>, value: Option<&str>) -> Self {
    Self {
      name: name.into(),
      value: value.map(str::to_string),
    }
  }
}

/// Extract every flag span from `text`, in source order.
pub fn extract_flags(text: &str) -> Vec<Flag> {
  flag_spans(text)
    .into_iter()
    .map(|(start, end)| parse_flag(&text[start..end]))
    .collect()
}

/// The base command name: everything up to the first flag start, trimmed.
///
/// A string with no flag spans yields the whole trimmed input.
pub fn base_name(text: &str) -> &str {
  match flag_spans(text).first() {
    Some(&(start, _)) => text[..start].trim(),
    None => text.trim(),
  }
}

/// Remove every flag span from `text` and trim the remainder.
///
/// Used to reduce a decorated script reference (`other --prefix dir`) to its
/// bare lookup key.
pub fn strip_flags(text: &str) -> String {
  let mut out = String::new();
  let mut pos = 0;
  for (start, end) in flag_spans(text) {
    out.push_str(&text[pos..start]);
    pos = end;
  }
  out.push_str(&text[pos..]);
  out.trim().to_string()
}

/// Remove the package-manager quiet flags (`--silent`, `--quiet`).
///
/// Only used while scanning for a nested script name; in that path the quiet
/// flags are noise, not flags of the script being resolved.
pub fn strip_quiet_flags(text: &str) -> String {
  let mut out = text.to_string();
  for quiet in consts::QUIET_FLAGS {
    out = out.replace(quiet, "");
  }
  out.trim().to_string()
}

/// Byte ranges of every flag span in `text`, in source order.
fn flag_spans(text: &str) -> Vec<(usize, usize)> {
  let mut spans = Vec::new();
  let mut pos = 0;
  let mut at_boundary = true;
  while pos < text.len() {
    let Some(ch) = text[pos..].chars().next() else {
      break;
    };
    if ch == '-' && at_boundary {
      let end = span_end(text, pos);
      spans.push((pos, end));
      pos = end;
      at_boundary = false;
      continue;
    }
    at_boundary = ch.is_whitespace();
    pos += ch.len_utf8();
  }
  spans
}

/// Find the end of the flag span starting at `start`.
///
/// The span ends at a whitespace character that (after any further
/// whitespace) precedes a `-`, at the start of a `&&` delimiter, or at the
/// end of the string.
fn span_end(text: &str, start: usize) -> usize {
  for (off, ch) in text[start..].char_indices().skip(1) {
    let abs = start + off;
    if text[abs..].starts_with(consts::SERIAL_DELIMITER) {
      return abs;
    }
    if ch.is_whitespace() && text[abs..].trim_start().starts_with('-') {
      return abs;
    }
  }
  text.len()
}

/// Split one trimmed flag span into a name and optional value.
fn parse_flag(span: &str) -> Flag {
  let span = span.trim();
  if let Some((name, value)) = span.split_once('=') {
    return Flag::new(name, Some(value));
  }
  match span.split_once(char::is_whitespace) {
    Some((name, rest)) => {
      let rest = rest.trim();
      if rest.is_empty() {
        Flag::new(name, None)
      } else {
        Flag::new(name, Some(rest))
      }
    }
    None => Flag::new(span, None),
  }
}
