//! Locale catalogs: loading, key lookups, and in-place editing.
//!
//! A catalog is a nested JSON object. Objects are containers (namespaces and
//! sub-namespaces); every other value is a leaf. Keys are addressed with
//! dot-separated paths like `common.footer.copyright`.
//!
//! `serde_json` is built with `preserve_order`, so the key order read from disk
//! is the order written back by [`Catalog::save`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a locale's catalog could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("cannot read catalog for locale '{locale}' ({path}): {source}")]
    Read {
        locale: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse catalog for locale '{locale}' ({path}): {source}")]
    Parse {
        locale: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog for locale '{locale}' ({path}) is not a JSON object")]
    NotAnObject { locale: String, path: PathBuf },
}

impl CatalogLoadError {
    pub fn locale(&self) -> &str {
        match self {
            Self::Read { locale, .. }
            | Self::Parse { locale, .. }
            | Self::NotAnObject { locale, .. } => locale,
        }
    }
}

/// Translation tree for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub locale: String,
    pub path: PathBuf,
    pub root: Map<String, Value>,
}

impl Catalog {
    pub fn new(
        locale: impl Into<String>,
        path: impl Into<PathBuf>,
        root: Map<String, Value>,
    ) -> Self {
        Self {
            locale: locale.into(),
            path: path.into(),
            root,
        }
    }

    /// Read and parse `<messages_dir>/<locale>.json`.
    pub fn load(messages_dir: &Path, locale: &str) -> Result<Self, CatalogLoadError> {
        let path = messages_dir.join(format!("{}.json", locale));
        let content = fs::read_to_string(&path).map_err(|source| CatalogLoadError::Read {
            locale: locale.to_string(),
            path: path.clone(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| CatalogLoadError::Parse {
                locale: locale.to_string(),
                path: path.clone(),
                source,
            })?;
        match value {
            Value::Object(root) => Ok(Self::new(locale, path, root)),
            _ => Err(CatalogLoadError::NotAnObject {
                locale: locale.to_string(),
                path,
            }),
        }
    }

    /// Write the catalog back to its file, pretty-printed with 2-space indentation.
    pub fn save(&self) -> anyhow::Result<()> {
        use anyhow::Context;

        let mut content = serde_json::to_string_pretty(&self.root)
            .with_context(|| format!("Failed to serialize catalog '{}'", self.locale))?;
        content.push('\n');
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;
        Ok(())
    }

    /// Top-level keys (namespaces) in catalog order.
    pub fn top_level_keys(&self) -> Vec<String> {
        self.root.keys().cloned().collect()
    }

    /// Every leaf as a dot-joined path, in catalog order.
    ///
    /// Empty containers produce no entries.
    pub fn flatten_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        flatten_into(&self.root, "", &mut keys);
        keys
    }

    /// Whether `key` names an entry in the catalog.
    ///
    /// Every segment but the last must resolve to a container; the last may be
    /// a leaf or a container.
    pub fn key_exists(&self, key: &str) -> bool {
        let mut current = &self.root;
        let mut segments = key.split('.').peekable();
        while let Some(segment) = segments.next() {
            let Some(value) = current.get(segment) else {
                return false;
            };
            if segments.peek().is_none() {
                return true;
            }
            match value {
                Value::Object(map) => current = map,
                _ => return false,
            }
        }
        false
    }

    pub fn namespace_exists(&self, namespace: &str) -> bool {
        self.root.contains_key(namespace)
    }

    /// Remove the entry at `key`. Empty parents are left in place.
    ///
    /// Returns whether anything was removed.
    pub fn delete_key(&mut self, key: &str) -> bool {
        let parts: Vec<&str> = key.split('.').collect();
        let Some((last, parents)) = parts.split_last() else {
            return false;
        };

        let mut current = &mut self.root;
        for part in parents {
            match current.get_mut(*part) {
                Some(Value::Object(map)) => current = map,
                _ => return false,
            }
        }

        // shift_remove keeps the order of the remaining siblings
        current.shift_remove(*last).is_some()
    }

    /// Remove a whole top-level namespace.
    pub fn delete_namespace(&mut self, namespace: &str) -> bool {
        self.root.shift_remove(namespace).is_some()
    }

    /// Recursively drop containers that end up with no children.
    pub fn prune_empty_containers(&mut self) {
        remove_empty_objects(&mut self.root);
    }
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in map {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(child) => flatten_into(child, &full_key, keys),
            _ => keys.push(full_key),
        }
    }
}

fn remove_empty_objects(map: &mut Map<String, Value>) {
    // Children first, so a container emptied by the recursion is removed too.
    for child in map.values_mut() {
        if let Value::Object(child_map) = child {
            remove_empty_objects(child_map);
        }
    }
    map.retain(|_, v| !matches!(v, Value::Object(m) if m.is_empty()));
}

/// All catalogs of a run, in configured locale order.
#[derive(Debug, Default)]
pub struct CatalogStore {
    pub catalogs: Vec<Catalog>,
    /// Locales that failed to load; they take no part in the reports.
    pub failures: Vec<CatalogLoadError>,
}

impl CatalogStore {
    /// Load every locale in parallel.
    pub fn load_all(messages_dir: &Path, locales: &[String]) -> Self {
        let results: Vec<Result<Catalog, CatalogLoadError>> = locales
            .par_iter()
            .map(|locale| Catalog::load(messages_dir, locale))
            .collect();

        let mut store = Self::default();
        for result in results {
            match result {
                Ok(catalog) => store.catalogs.push(catalog),
                Err(err) => store.failures.push(err),
            }
        }
        store
    }

    pub fn get(&self, locale: &str) -> Option<&Catalog> {
        self.catalogs.iter().find(|c| c.locale == locale)
    }

    pub fn locales(&self) -> Vec<&str> {
        self.catalogs.iter().map(|c| c.locale.as_str()).collect()
    }
}

/// Locale names of the `*.json` files in `messages_dir`, sorted, with
/// `default_locale` moved to the front when present.
pub fn discover_locales(messages_dir: &Path, default_locale: &str) -> Vec<String> {
    let Ok(entries) = fs::read_dir(messages_dir) else {
        return Vec::new();
    };

    let mut locales: Vec<String> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().to_string()))
        .collect();
    locales.sort();

    if let Some(pos) = locales.iter().position(|l| l == default_locale) {
        let default = locales.remove(pos);
        locales.insert(0, default);
    }
    locales
}
