//! The in-memory manifest structure.
//!
//! Both tables keep the declared key order from the source file (serde_json's
//! `preserve_order` feature): the order of the `scripts` table is observable
//! output when a whole manifest is resolved, so a sorted map would not do.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `{scripts, config}` slice of one `package.json`.
///
/// Values in both tables are strings in any well-formed manifest; they are
/// held as [`Value`]s for serde's sake and validated at load time.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
  /// Script name to raw command body, in declared order.
  #[serde(default)]
  pub scripts: Map<String, Value>,
  /// Configuration property to value, in declared order.
  #[serde(default)]
  pub config: Map<String, Value>,
}

impl Manifest {
  /// The command body of the script named `name`.
  pub fn script(&self, name: &str) -> Option<&str> {
    self.scripts.get(name).and_then(Value::as_str)
  }

  /// The configuration value of the property named `name`.
  pub fn config_value(&self, name: &str) -> Option<&str> {
    self.config.get(name).and_then(Value::as_str)
  }

  /// Script names in declared order.
  pub fn script_names(&self) -> impl Iterator<Item = &str> {
    self.scripts.keys().map(String::as_str)
  }

  /// Check that every table value is a string.
  ///
  /// Returns the first offending key on failure.
  pub(crate) fn validate(&self) -> Result<(), String> {
    for (table, entries) in [("scripts", &self.scripts), ("config", &self.config)] {
      if let Some((key, _)) = entries.iter().find(|(_, value)| !value.is_string()) {
        return Err(format!("{table}.{key} is not a string"));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn script_names_keep_declared_order() {
    let manifest: Manifest = serde_json::from_value(serde_json::json!({
      "scripts": { "zeta": "z", "alpha": "a", "mid": "m" }
    }))
    .unwrap();
    let names: Vec<_> = manifest.script_names().collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
  }

  #[test]
  fn missing_tables_default_to_empty() {
    let manifest: Manifest = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(manifest.scripts.is_empty());
    assert!(manifest.config.is_empty());
    assert_eq!(manifest.script("build"), None);
  }

  #[test]
  fn validate_rejects_non_string_values() {
    let manifest: Manifest = serde_json::from_value(serde_json::json!({
      "scripts": { "build": ["not", "a", "string"] }
    }))
    .unwrap();
    let err = manifest.validate().unwrap_err();
    assert!(err.contains("scripts.build"));
  }
}
