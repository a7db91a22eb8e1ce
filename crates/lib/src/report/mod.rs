//! Report rendering for the resolved action sequence.
//!
//! Two report kinds exist: `json` serializes the action sequence verbatim,
//! `html` renders a self-contained collapsible document. Both are written
//! under a `runmap/` directory inside the chosen output root.

mod html;

pub use html::render_html;

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts;
use crate::resolve::Action;

/// The recognized report kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportKind {
  #[default]
  Html,
  Json,
}

impl ReportKind {
  /// Parse a user-supplied kind. Unrecognized values fall back to html.
  pub fn parse(raw: &str) -> Self {
    if raw.eq_ignore_ascii_case("json") {
      ReportKind::Json
    } else {
      ReportKind::Html
    }
  }

  fn file_name(self) -> String {
    let ext = match self {
      ReportKind::Html => "html",
      ReportKind::Json => "json",
    };
    format!("{}.{ext}", consts::REPORT_FILE_STEM)
  }
}

/// Errors that can occur while producing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
  #[error("failed to write report to {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to serialize mapping result: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Serialize the action sequence verbatim.
pub fn render_json(actions: &[Action]) -> Result<String, ReportError> {
  Ok(serde_json::to_string_pretty(actions)?)
}

/// Render `actions` as `kind` and write the file under `<out_dir>/runmap/`.
///
/// Returns the path of the written report.
pub fn write_report(
  kind: ReportKind,
  actions: &[Action],
  manifest_path: &Path,
  out_dir: &Path,
) -> Result<PathBuf, ReportError> {
  let content = match kind {
    ReportKind::Html => render_html(actions, manifest_path),
    ReportKind::Json => render_json(actions)?,
  };

  let report_dir = out_dir.join(consts::REPORT_DIR_NAME);
  fs::create_dir_all(&report_dir).map_err(|source| ReportError::Io {
    path: report_dir.clone(),
    source,
  })?;

  let report_path = report_dir.join(kind.file_name());
  fs::write(&report_path, content).map_err(|source| ReportError::Io {
    path: report_path.clone(),
    source,
  })?;
  Ok(report_path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::token::Flag;

  fn sample_actions() -> Vec<Action> {
    vec![Action::Script {
      name: "build".to_string(),
      flags: vec![],
      pre: None,
      post: None,
      steps: vec![Action::Command {
        name: "compile".to_string(),
        flags: vec![Flag::new("--watch", None)],
      }],
      location: None,
    }]
  }

  #[test]
  fn unrecognized_kind_falls_back_to_html() {
    assert_eq!(ReportKind::parse("json"), ReportKind::Json);
    assert_eq!(ReportKind::parse("JSON"), ReportKind::Json);
    assert_eq!(ReportKind::parse("html"), ReportKind::Html);
    assert_eq!(ReportKind::parse("pdf"), ReportKind::Html);
    assert_eq!(ReportKind::parse(""), ReportKind::Html);
  }

  #[test]
  fn json_report_tags_action_kinds() {
    let json = render_json(&sample_actions()).unwrap();
    assert!(json.contains(r#""kind": "script""#));
    assert!(json.contains(r#""kind": "command""#));
    assert!(json.contains(r#""name": "compile""#));
  }

  #[test]
  fn json_report_keeps_valueless_flags() {
    let json = render_json(&sample_actions()).unwrap();
    assert!(json.contains(r#""name": "--watch""#));
    assert!(json.contains(r#""value": null"#));
  }

  #[test]
  fn write_report_creates_the_report_directory() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_report(
      ReportKind::Json,
      &sample_actions(),
      Path::new("/pkg/package.json"),
      temp.path(),
    )
    .unwrap();
    assert_eq!(path, temp.path().join("runmap").join("runmap-report.json"));
    assert!(path.exists());
  }

  #[test]
  fn html_report_is_written_by_default_kind() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_report(
      ReportKind::default(),
      &sample_actions(),
      Path::new("/pkg/package.json"),
      temp.path(),
    )
    .unwrap();
    assert!(path.ends_with("runmap/runmap-report.html"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<!DOCTYPE html>"));
  }
}
