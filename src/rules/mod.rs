//! Report builders for transcheck.
//!
//! Pure functions over the run's [`UsageSet`](crate::core::usage::UsageSet)
//! and the loaded catalogs. Neither touches the filesystem.
//!
//! ## Module Structure
//!
//! - `validation`: usage -> catalog (missing namespaces/keys, locale-exclusive keys)
//! - `unused`: catalog -> usage (unused namespaces/keys)

pub mod unused;
pub mod validation;

pub use unused::{LocaleUnused, UnusedReport, build_unused_report};
pub use validation::{
    LocaleExclusiveKeys, LocaleValidation, ValidationReport, build_validation_report,
};
