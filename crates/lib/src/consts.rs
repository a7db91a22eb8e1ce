//! Fixed textual conventions recognized by the resolver.

/// Standard manifest filename, joined onto every directory resolution visits.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Separates independent command steps within one script body.
pub const SERIAL_DELIMITER: &str = "&&";

/// Naming prefix that attaches a hook script before its target.
pub const PRE_SCRIPT_PREFIX: &str = "pre";

/// Naming prefix that attaches a hook script after its target.
pub const POST_SCRIPT_PREFIX: &str = "post";

/// Recognized nested-invocation prefixes. `yarn run ` must be tried before
/// the bare `yarn ` form.
pub const NESTED_SCRIPT_PREFIXES: [&str; 3] = ["npm run ", "yarn run ", "yarn "];

/// Package-manager flags stripped while scanning for a nested script name.
pub const QUIET_FLAGS: [&str; 2] = ["--silent", "--quiet"];

/// Flag that redirects resolution into another directory's manifest.
pub const PREFIX_FLAG: &str = "--prefix";

/// Marker that indirects a value through the manifest's config table.
pub const CONFIG_MARKER: &str = "$npm_package_config_";

/// Directory (under the output root) reports are written into.
pub const REPORT_DIR_NAME: &str = "runmap";

/// File stem shared by the html and json reports.
pub const REPORT_FILE_STEM: &str = "runmap-report";

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn yarn_run_is_tried_before_the_bare_yarn_form() {
    // `yarn run sub` must strip to `sub`, never to `run sub`.
    let longer = NESTED_SCRIPT_PREFIXES.iter().position(|p| *p == "yarn run ");
    let bare = NESTED_SCRIPT_PREFIXES.iter().position(|p| *p == "yarn ");
    assert!(longer.unwrap() < bare.unwrap());
  }
}
