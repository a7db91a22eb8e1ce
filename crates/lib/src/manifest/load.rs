//! Manifest loading from the file system.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts;

use super::Manifest;

/// Errors that can occur while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
  /// The manifest file is missing or unreadable.
  #[error("no package.json file can be found on {path}")]
  NotAccessible {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The file exists but is not a well-formed `{scripts, config}` manifest.
  #[error("malformed package.json at {path}: {reason}")]
  Malformed { path: PathBuf, reason: String },
}

impl Manifest {
  /// Load the manifest found by joining `dir` with the standard filename.
  ///
  /// Returns the manifest together with the resolved file path; the path
  /// identifies the manifest for hop tracking and cycle detection.
  pub fn load_dir(dir: &Path) -> Result<(Manifest, PathBuf), LoadError> {
    let path = dir.join(consts::MANIFEST_FILE_NAME);
    let manifest = Manifest::load_file(&path)?;
    Ok((manifest, path))
  }

  /// Load and validate the manifest at `path`.
  pub fn load_file(path: &Path) -> Result<Manifest, LoadError> {
    debug!(path = %path.display(), "loading manifest");
    let content = fs::read_to_string(path).map_err(|source| LoadError::NotAccessible {
      path: path.to_path_buf(),
      source,
    })?;
    let manifest: Manifest = serde_json::from_str(&content).map_err(|err| LoadError::Malformed {
      path: path.to_path_buf(),
      reason: err.to_string(),
    })?;
    manifest.validate().map_err(|reason| LoadError::Malformed {
      path: path.to_path_buf(),
      reason,
    })?;
    Ok(manifest)
  }
}
