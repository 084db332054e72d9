//! Unused catalog entry detection.
//!
//! The reverse direction of validation: walks each catalog outward against
//! what the source uses.

use crate::core::{catalog::Catalog, usage::UsageSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleUnused {
    pub locale: String,
    /// Top-level keys no source file binds, in catalog order.
    pub namespaces: Vec<String>,
    /// Leaf keys no source file references, in catalog order.
    pub keys: Vec<String>,
}

impl LocaleUnused {
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty() && self.keys.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnusedReport {
    pub locales: Vec<LocaleUnused>,
}

impl UnusedReport {
    /// True when any catalog carries an entry the source never uses.
    pub fn has_unused(&self) -> bool {
        self.locales.iter().any(|l| !l.is_empty())
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleUnused> {
        self.locales.iter().find(|l| l.locale == locale)
    }
}

pub fn build_unused_report(usage: &UsageSet, catalogs: &[Catalog]) -> UnusedReport {
    let locales = catalogs
        .iter()
        .map(|catalog| LocaleUnused {
            locale: catalog.locale.clone(),
            namespaces: catalog
                .top_level_keys()
                .into_iter()
                .filter(|ns| !usage.namespaces.contains(ns))
                .collect(),
            keys: catalog
                .flatten_keys()
                .into_iter()
                .filter(|key| !usage.keys.contains(key))
                .collect(),
        })
        .collect();

    UnusedReport { locales }
}
