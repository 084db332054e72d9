//! Usage records produced by the extractor and the run-wide accumulator.

use std::{collections::BTreeSet, fmt, path::PathBuf};

/// Local identifier -> namespace bindings for one file.
///
/// Keeps first-insertion order: re-binding an identifier updates its
/// namespace without moving it, so [`Bindings::first_namespace`] is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<(String, String)>,
}

impl Bindings {
    pub fn bind(&mut self, ident: impl Into<String>, namespace: impl Into<String>) {
        let ident = ident.into();
        let namespace = namespace.into();
        match self.entries.iter_mut().find(|(name, _)| *name == ident) {
            Some(entry) => entry.1 = namespace,
            None => self.entries.push((ident, namespace)),
        }
    }

    pub fn namespace_of(&self, ident: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == ident)
            .map(|(_, ns)| ns.as_str())
    }

    pub fn first_namespace(&self) -> Option<&str> {
        self.entries.first().map(|(_, ns)| ns.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(i, n)| (i.as_str(), n.as_str()))
    }
}

/// How a dynamic key expression was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicKeyKind {
    /// Template literal; only the static prefix (plus configured leaves) was recorded.
    Template,
    /// `t(var.prop)` resolved through a `key: "..."` object literal.
    Resolved,
    /// `t(var.prop)` resolved through a configured property-key hint.
    Fallback,
    /// `t(var.prop)` could not be resolved; nothing was recorded.
    Unresolved,
}

impl fmt::Display for DynamicKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Template => "template",
            Self::Resolved => "resolved",
            Self::Fallback => "fallback",
            Self::Unresolved => "unresolved",
        };
        f.write_str(label)
    }
}

/// Informational entry for a key the scanner could only partly see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicKeyNote {
    pub kind: DynamicKeyKind,
    /// `namespace.<expression as written>`, e.g. `blog.tags.${id}`.
    pub expression: String,
}

/// Everything found in one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageRecord {
    pub file: PathBuf,
    pub bindings: Bindings,
    /// Namespaces used by the file, in detection order, without duplicates.
    pub namespaces: Vec<String>,
    /// Fully qualified keys in detection order.
    pub keys: Vec<String>,
    pub notes: Vec<DynamicKeyNote>,
}

impl UsageRecord {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn add_namespace(&mut self, namespace: &str) {
        if !self.namespaces.iter().any(|ns| ns == namespace) {
            self.namespaces.push(namespace.to_string());
        }
    }

    pub fn add_key(&mut self, key: String) {
        self.keys.push(key);
    }

    pub fn add_note(&mut self, kind: DynamicKeyKind, expression: String) {
        self.notes.push(DynamicKeyNote { kind, expression });
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
            && self.keys.is_empty()
            && self.namespaces.is_empty()
            && self.notes.is_empty()
    }
}

/// Run-scoped `foundNamespaces` / `foundKeys` sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageSet {
    pub namespaces: BTreeSet<String>,
    pub keys: BTreeSet<String>,
}

impl UsageSet {
    pub fn merge(&mut self, record: &UsageRecord) {
        self.namespaces.extend(record.namespaces.iter().cloned());
        self.keys.extend(record.keys.iter().cloned());
    }

    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a UsageRecord>) -> Self {
        let mut set = Self::default();
        for record in records {
            set.merge(record);
        }
        set
    }
}
