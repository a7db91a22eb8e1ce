//! Package manifest types and loading.
//!
//! A manifest is the `{scripts, config}` slice of a `package.json` file.
//! Multiple manifests may be loaded during one resolution session (one per
//! directory visited via prefix redirection); each is immutable once loaded.

mod load;
mod types;

pub use load::LoadError;
pub use types::*;
