//! Usage -> catalog validation.
//!
//! Walks what the source uses outward against every catalog: namespaces and
//! keys the code needs but a locale lacks, plus keys that exist in one
//! locale's catalog and not in another's.

use std::collections::HashSet;

use crate::core::{catalog::Catalog, usage::UsageSet};

/// Problems found in one locale's catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleValidation {
    pub locale: String,
    pub missing_namespaces: Vec<String>,
    pub missing_keys: Vec<String>,
}

/// Keys present in `locale` but absent from `other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleExclusiveKeys {
    pub locale: String,
    pub other: String,
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// One entry per loaded locale, in locale order.
    pub locales: Vec<LocaleValidation>,
    /// One entry per ordered locale pair, in locale order.
    pub exclusive: Vec<LocaleExclusiveKeys>,
}

impl ValidationReport {
    pub fn has_issues(&self) -> bool {
        self.locales
            .iter()
            .any(|l| !l.missing_namespaces.is_empty() || !l.missing_keys.is_empty())
            || self.exclusive.iter().any(|e| !e.keys.is_empty())
    }

    pub fn issue_count(&self) -> usize {
        self.locales
            .iter()
            .map(|l| l.missing_namespaces.len() + l.missing_keys.len())
            .sum::<usize>()
            + self.exclusive.iter().map(|e| e.keys.len()).sum::<usize>()
    }
}

/// Check every found namespace and key against every catalog, then compare
/// each ordered pair of catalogs.
pub fn build_validation_report(usage: &UsageSet, catalogs: &[Catalog]) -> ValidationReport {
    let locales = catalogs
        .iter()
        .map(|catalog| LocaleValidation {
            locale: catalog.locale.clone(),
            missing_namespaces: usage
                .namespaces
                .iter()
                .filter(|ns| !catalog.namespace_exists(ns))
                .cloned()
                .collect(),
            missing_keys: usage
                .keys
                .iter()
                .filter(|key| !catalog.key_exists(key))
                .cloned()
                .collect(),
        })
        .collect();

    let flattened: Vec<Vec<String>> = catalogs.iter().map(Catalog::flatten_keys).collect();
    let key_sets: Vec<HashSet<&str>> = flattened
        .iter()
        .map(|keys| keys.iter().map(String::as_str).collect())
        .collect();

    let mut exclusive = Vec::new();
    for (i, catalog) in catalogs.iter().enumerate() {
        for (j, other) in catalogs.iter().enumerate() {
            if i == j {
                continue;
            }
            let keys = flattened[i]
                .iter()
                .filter(|key| !key_sets[j].contains(key.as_str()))
                .cloned()
                .collect();
            exclusive.push(LocaleExclusiveKeys {
                locale: catalog.locale.clone(),
                other: other.locale.clone(),
                keys,
            });
        }
    }

    ValidationReport { locales, exclusive }
}
