//! The resolved action tree.

use serde::{Deserialize, Serialize};

use crate::token::Flag;

/// One node of the resolved graph.
///
/// A `Command` is an opaque external invocation; a `Script` is a fully
/// expanded manifest script: its serial `steps`, the optional `pre`/`post`
/// hooks attached by naming convention, and - on the first action of a
/// prefix hop - the `location` of the manifest it was loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
  Command {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    flags: Vec<Flag>,
  },
  Script {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    flags: Vec<Flag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pre: Option<Box<Action>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post: Option<Box<Action>>,
    steps: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
  },
}

impl Action {
  pub fn name(&self) -> &str {
    match self {
      Action::Command { name, .. } | Action::Script { name, .. } => name,
    }
  }

  pub fn flags(&self) -> &[Flag] {
    match self {
      Action::Command { flags, .. } | Action::Script { flags, .. } => flags,
    }
  }

  pub fn is_script(&self) -> bool {
    matches!(self, Action::Script { .. })
  }

  /// Mark this action as the entry point of a prefix hop.
  ///
  /// Only meaningful on the `Script` variant; a hop always resolves to one.
  pub(crate) fn mark_location(&mut self, path: String) {
    if let Action::Script { location, .. } = self {
      *location = Some(path);
    }
  }
}
