//! locsync - localization store maintenance for the block editor
//!
//! Works on a directory of `ui_<code>.json` dictionaries, one per language:
//! merges seed translations into them, audits coverage of tracked key
//! prefixes, and syncs every language with a master language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reports, exit status)
//! - `config`: Configuration file loading and defaults
//! - `core`: Store access plus the merge, audit and sync operations

pub mod cli;
pub mod config;
pub mod core;
