//! Configuration-table value substitution.
//!
//! A flag value may indirect through the manifest's `config` table instead of
//! being a literal: `$npm_package_config_port` resolves to `config.port`.
//! Display values are decorated with the configuration name they came from;
//! path values (the `--prefix` case) use the raw lookup, since the decorated
//! form would corrupt the path.
//!
//! A reference to a missing configuration property is not an error: the
//! decorated string simply embeds an empty value. Legacy-compatible behavior,
//! kept lenient on purpose.

use tracing::warn;

use crate::consts;
use crate::manifest::Manifest;

/// Whether `raw` indirects through the configuration table.
pub fn is_config_reference(raw: &str) -> bool {
  raw.contains(consts::CONFIG_MARKER)
}

/// Resolve `raw` for display.
///
/// Literal values pass through unchanged. Configuration references come back
/// as `"<value> (from npm configuration named \"<prop>\")"`, with an empty
/// value when the property is not defined.
pub fn resolve_value(raw: &str, manifest: &Manifest) -> String {
  let Some(prop) = config_prop(raw) else {
    return raw.to_string();
  };
  let value = match manifest.config_value(&prop) {
    Some(value) => value.to_string(),
    None => {
      warn!(property = %prop, "configuration reference has no matching config entry");
      String::new()
    }
  };
  format!("{value} (from npm configuration named \"{prop}\")")
}

/// Resolve `raw` to its plain value, without the display decoration.
///
/// Literal values pass through unchanged; a reference to a missing property
/// yields `None`.
pub fn resolve_raw(raw: &str, manifest: &Manifest) -> Option<String> {
  match config_prop(raw) {
    Some(prop) => manifest.config_value(&prop).map(str::to_string),
    None => Some(raw.to_string()),
  }
}

/// The configuration property name referenced by `raw`, if any.
fn config_prop(raw: &str) -> Option<String> {
  if !is_config_reference(raw) {
    return None;
  }
  Some(raw.replace(consts::CONFIG_MARKER, "").trim().to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn manifest(json: serde_json::Value) -> Manifest {
    serde_json::from_value(json).unwrap()
  }

  #[test]
  fn literal_values_pass_through() {
    let m = manifest(serde_json::json!({ "scripts": {}, "config": {} }));
    assert_eq!(resolve_value("prod.js", &m), "prod.js");
    assert_eq!(resolve_raw("prod.js", &m), Some("prod.js".to_string()));
  }

  #[test]
  fn reference_resolves_through_config_table() {
    let m = manifest(serde_json::json!({ "scripts": {}, "config": { "X": "Y" } }));
    assert_eq!(
      resolve_value("$npm_package_config_X", &m),
      "Y (from npm configuration named \"X\")"
    );
  }

  #[test]
  fn missing_property_degrades_to_empty_value() {
    let m = manifest(serde_json::json!({ "scripts": {}, "config": {} }));
    assert_eq!(
      resolve_value("$npm_package_config_X", &m),
      " (from npm configuration named \"X\")"
    );
  }

  #[test]
  fn raw_lookup_skips_decoration() {
    let m = manifest(serde_json::json!({ "scripts": {}, "config": { "dir": "packages/app" } }));
    assert_eq!(resolve_raw("$npm_package_config_dir", &m), Some("packages/app".to_string()));
    assert_eq!(resolve_raw("$npm_package_config_missing", &m), None);
  }
}
