//! The script graph resolver.
//!
//! Given a script name and a loaded manifest, `Resolver` recursively produces
//! the full action tree that running the script would trigger:
//!
//! 1. a reference carrying a `--prefix` flag is a hop: resolution reloads the
//!    manifest from the prefixed directory and recurses there, marking the
//!    returned action with the new manifest path
//! 2. otherwise the reference's flags are peeled off and the bare name is
//!    looked up in `scripts`
//! 3. the body splits on `&&` into serial steps; each step is either a nested
//!    script invocation (`npm run x`, `yarn x`, `yarn run x`) resolved
//!    recursively, or an opaque command tokenized in place
//! 4. scripts literally named `pre<name>` / `post<name>` attach as hooks,
//!    resolved by the same rules (including their own hooks)
//!
//! Resolution never mutates a manifest and is a pure function of the manifest
//! set and the starting name; the origin manifest path is threaded through
//! the resolver rather than kept in shared state. Re-entering a
//! `(manifest path, script name)` pair already on the active chain is a
//! cycle and fails rather than recursing forever.

mod action;

pub use action::Action;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config;
use crate::consts;
use crate::manifest::{LoadError, Manifest};
use crate::token::{self, Flag};

/// Errors that can occur during graph resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
  /// The requested name is not a key of the manifest's script table.
  #[error("no script by the name \"{name}\" was found")]
  ScriptNotFound { name: String },

  /// A script chain re-entered a script already being resolved.
  #[error("cyclic script reference to \"{name}\" via {path}")]
  CyclicScriptReference { name: String, path: PathBuf },

  /// A prefix hop failed to load the target manifest.
  #[error(transparent)]
  Manifest(#[from] LoadError),
}

/// Resolve the scripts of the manifest found under `dir`.
///
/// With a script name, resolves just that script; otherwise every script in
/// the manifest's declared order. Returns the actions together with the
/// origin manifest path.
pub fn map_scripts(dir: &Path, script: Option<&str>) -> Result<(Vec<Action>, PathBuf), ResolveError> {
  let (manifest, path) = Manifest::load_dir(dir)?;
  let mut resolver = Resolver::new(&path);
  let actions = match script {
    Some(name) => vec![resolver.resolve_script(name, &manifest, &path)?],
    None => resolver.resolve_all(&manifest, &path)?,
  };
  Ok((actions, path))
}

/// One resolution session.
///
/// Holds the origin manifest path (to tell hops from direct lookups) and the
/// chain of in-progress resolutions (to detect cycles). Everything else is
/// threaded through the call stack.
pub struct Resolver {
  origin: PathBuf,
  in_progress: Vec<(PathBuf, String)>,
}

impl Resolver {
  /// Create a resolver whose origin manifest lives at `origin`.
  pub fn new(origin: impl Into<PathBuf>) -> Self {
    Self {
      origin: origin.into(),
      in_progress: Vec::new(),
    }
  }

  /// Resolve every script declared in `manifest`, in declared order.
  pub fn resolve_all(&mut self, manifest: &Manifest, path: &Path) -> Result<Vec<Action>, ResolveError> {
    manifest
      .script_names()
      .map(|name| self.resolve_script(name, manifest, path))
      .collect()
  }

  /// Resolve one script reference against `manifest` (loaded from `path`).
  ///
  /// The reference may carry flags (`build -q`) or a `--prefix` redirection
  /// (`other --prefix dir`); both are peeled off before the lookup.
  pub fn resolve_script(&mut self, script_ref: &str, manifest: &Manifest, path: &Path) -> Result<Action, ResolveError> {
    if let Some(prefix_value) = prefix_value(script_ref) {
      return self.resolve_hop(script_ref, &prefix_value, manifest);
    }

    let flags = resolved_flags(script_ref, manifest);
    let name = token::base_name(script_ref);
    let Some(body) = manifest.script(name) else {
      return Err(ResolveError::ScriptNotFound { name: name.to_string() });
    };

    let key = (path.to_path_buf(), name.to_string());
    if self.in_progress.contains(&key) {
      return Err(ResolveError::CyclicScriptReference {
        name: name.to_string(),
        path: path.to_path_buf(),
      });
    }
    self.in_progress.push(key);
    let result = self.resolve_body(name, body, flags, manifest, path);
    self.in_progress.pop();
    result
  }

  /// Expand a looked-up script body into its hooks and serial steps.
  fn resolve_body(
    &mut self,
    name: &str,
    body: &str,
    flags: Vec<Flag>,
    manifest: &Manifest,
    path: &Path,
  ) -> Result<Action, ResolveError> {
    debug!(script = name, "resolving script");

    let pre_name = format!("{}{name}", consts::PRE_SCRIPT_PREFIX);
    let pre = if manifest.script(&pre_name).is_some() {
      Some(Box::new(self.resolve_script(&pre_name, manifest, path)?))
    } else {
      None
    };

    let steps = body
      .split(consts::SERIAL_DELIMITER)
      .map(str::trim)
      .map(|step| self.classify(step, manifest, path))
      .collect::<Result<Vec<_>, _>>()?;

    let post_name = format!("{}{name}", consts::POST_SCRIPT_PREFIX);
    let post = if manifest.script(&post_name).is_some() {
      Some(Box::new(self.resolve_script(&post_name, manifest, path)?))
    } else {
      None
    };

    Ok(Action::Script {
      name: name.to_string(),
      flags,
      pre,
      post,
      steps,
      location: None,
    })
  }

  /// Follow a `--prefix` redirection into another directory's manifest.
  fn resolve_hop(&mut self, script_ref: &str, prefix_value: &str, manifest: &Manifest) -> Result<Action, ResolveError> {
    let prefix_path = config::resolve_raw(prefix_value, manifest).unwrap_or_else(|| {
      warn!(value = prefix_value, "prefix references an undefined config entry");
      String::new()
    });
    let target = token::strip_flags(script_ref);
    debug!(target = %target, prefix = %prefix_path, "following prefix redirection");

    let (hopped, hopped_path) = Manifest::load_dir(Path::new(&prefix_path))?;
    let mut action = self.resolve_script(&target, &hopped, &hopped_path)?;
    if hopped_path != self.origin {
      action.mark_location(hopped_path.display().to_string());
    }
    Ok(action)
  }

  /// Decide whether one serial step is a nested script or an opaque command.
  fn classify(&mut self, step: &str, manifest: &Manifest, path: &Path) -> Result<Action, ResolveError> {
    if let Some(nested) = nested_script_ref(step) {
      let nested = token::strip_quiet_flags(nested);
      return self.resolve_script(nested.trim(), manifest, path);
    }
    Ok(command_action(step, manifest))
  }
}

/// Build a `Command` action from one opaque step.
fn command_action(step: &str, manifest: &Manifest) -> Action {
  Action::Command {
    name: token::base_name(step).to_string(),
    flags: resolved_flags(step, manifest),
  }
}

/// Extract flags, substituting configuration references in the values.
fn resolved_flags(text: &str, manifest: &Manifest) -> Vec<Flag> {
  token::extract_flags(text)
    .into_iter()
    .map(|flag| Flag {
      name: flag.name,
      value: flag.value.map(|value| config::resolve_value(&value, manifest)),
    })
    .collect()
}

/// The remainder of `step` after a recognized nested-invocation prefix.
fn nested_script_ref(step: &str) -> Option<&str> {
  consts::NESTED_SCRIPT_PREFIXES
    .iter()
    .find_map(|prefix| step.strip_prefix(prefix))
}

/// The value of a `--prefix` flag on `script_ref`, quotes stripped.
fn prefix_value(script_ref: &str) -> Option<String> {
  token::extract_flags(script_ref)
    .into_iter()
    .find(|flag| flag.name == consts::PREFIX_FLAG)
    .and_then(|flag| flag.value)
    .map(|value| value.trim_matches('"').to_string())
}
