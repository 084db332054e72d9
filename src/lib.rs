//! transcheck - translation consistency checker for next-intl projects
//!
//! transcheck scans a TS/JS source tree for next-intl translation calls,
//! reconstructs which namespaces and keys each file uses, and cross-validates
//! that usage against per-locale JSON catalogs. It can also prune catalog
//! entries no source file references.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reports, run log)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning engine (catalogs, walker, extractor, run context)
//! - `rules`: Validation and unused-entry reports

pub mod cli;
pub mod config;
pub mod core;
pub mod rules;
