use crate::{
    core::catalog::{Catalog, CatalogStore},
    rules::unused::{LocaleUnused, UnusedReport},
};

/// What pruning did (or would do) to one locale's catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneOutcome {
    pub locale: String,
    pub removed_keys: Vec<String>,
    pub removed_namespaces: Vec<String>,
    /// True when the catalog file was rewritten.
    pub saved: bool,
    /// Set when rewriting the catalog file failed.
    pub save_error: Option<String>,
}

impl PruneOutcome {
    pub fn is_empty(&self) -> bool {
        self.removed_keys.is_empty() && self.removed_namespaces.is_empty()
    }
}

/// Totals across all outcomes of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneStats {
    pub keys_removed: usize,
    pub namespaces_removed: usize,
    pub files_modified: usize,
}

impl std::ops::AddAssign<&PruneOutcome> for PruneStats {
    fn add_assign(&mut self, outcome: &PruneOutcome) {
        self.keys_removed += outcome.removed_keys.len();
        self.namespaces_removed += outcome.removed_namespaces.len();
        if outcome.saved {
            self.files_modified += 1;
        }
    }
}

impl PruneStats {
    pub fn from_outcomes(outcomes: &[PruneOutcome]) -> Self {
        let mut stats = Self::default();
        for outcome in outcomes {
            stats += outcome;
        }
        stats
    }
}

/// Remove every entry in `report` from the matching catalog.
///
/// A dry run performs the same edits on a copy of each catalog, so the
/// outcomes list exactly what a real run would remove while the store and
/// the files on disk stay untouched. Catalogs with nothing unused are never
/// rewritten. A locale whose file cannot be written records the error in its
/// outcome and the remaining locales are still pruned.
pub fn prune_unused(
    report: &UnusedReport,
    store: &mut CatalogStore,
    dry_run: bool,
) -> Vec<PruneOutcome> {
    let mut outcomes = Vec::with_capacity(store.catalogs.len());

    for catalog in &mut store.catalogs {
        let Some(unused) = report.get(&catalog.locale).filter(|u| !u.is_empty()) else {
            outcomes.push(PruneOutcome {
                locale: catalog.locale.clone(),
                ..Default::default()
            });
            continue;
        };

        let outcome = if dry_run {
            let mut scratch = catalog.clone();
            remove_unused(&mut scratch, unused)
        } else {
            let mut outcome = remove_unused(catalog, unused);
            match catalog.save() {
                Ok(()) => outcome.saved = true,
                Err(err) => outcome.save_error = Some(format!("{:#}", err)),
            }
            outcome
        };
        outcomes.push(outcome);
    }

    outcomes
}

fn remove_unused(catalog: &mut Catalog, unused: &LocaleUnused) -> PruneOutcome {
    let removed_keys = unused
        .keys
        .iter()
        .filter(|key| catalog.delete_key(key))
        .cloned()
        .collect();
    let removed_namespaces = unused
        .namespaces
        .iter()
        .filter(|ns| catalog.delete_namespace(ns))
        .cloned()
        .collect();
    catalog.prune_empty_containers();

    PruneOutcome {
        locale: catalog.locale.clone(),
        removed_keys,
        removed_namespaces,
        ..Default::default()
    }
}
