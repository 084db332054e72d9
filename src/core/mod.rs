//! Core scanning engine.
//!
//! ## Module Structure
//!
//! - `catalog`: per-locale JSON catalogs (load, query, prune, save)
//! - `walker`: source file enumeration
//! - `extract`: lexical usage extraction, one `UsageRecord` per file
//! - `usage`: bindings, per-file records, and the run-wide `UsageSet`
//! - `context`: `RunContext`, the config + scan + load pipeline shared by commands

pub mod catalog;
pub mod context;
pub mod extract;
pub mod usage;
pub mod walker;

pub use catalog::{Catalog, CatalogLoadError, CatalogStore};
pub use context::RunContext;
pub use usage::{UsageRecord, UsageSet};
