//! runmap-lib: core script-graph resolution for runmap
//!
//! This crate turns a package manifest's script table into the full tree of
//! actions that running a named script would trigger:
//! - `manifest`: loading and typing of `package.json` `{scripts, config}`
//! - `token`: flag extraction from raw command strings
//! - `config`: `$npm_package_config_*` value substitution
//! - `resolve`: the recursive graph resolver (hooks, nested scripts, hops)
//! - `report`: html/json rendering of the resolved graph

pub mod config;
pub mod consts;
pub mod manifest;
pub mod report;
pub mod resolve;
pub mod token;
