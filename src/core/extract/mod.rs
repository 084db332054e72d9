//! Lexical usage extraction.
//!
//! Scans raw source text for next-intl call shapes without parsing the host
//! language. Each detection pass is an independent [`PatternHandler`]; the
//! [`UsageExtractor`] runs them in a fixed order over the whole file:
//!
//! 1. `getTranslations(...)` namespace calls, bound through a nearby `const`
//! 2. `useTranslations("ns")` hooks, bound on the same line
//! 3. `t("key")` literal keys
//! 4. ``t(`prefix.${id}`)`` template keys
//! 5. `t(item.key)` property keys
//! 6. `<FormattedMessage id="key" />` component keys
//!
//! Bindings are file-scoped. Passes 3-6 only see identifiers bound by
//! passes 1-2 of the same file.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use rayon::prelude::*;
use thiserror::Error;

use crate::{config::Config, config::PropertyKeyHint, core::usage::UsageRecord};

mod component;
mod keys;
mod namespace;

pub use component::ComponentKeyHandler;
pub use keys::{LiteralKeyHandler, PropertyKeyHandler, TemplateKeyHandler};
pub use namespace::{HookCallHandler, NamespaceCallHandler};

/// A source file that could not be scanned.
#[derive(Debug, Error)]
#[error("failed to read {}: {source}", path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Source text handed to each handler.
pub struct SourceFile<'a> {
    /// File path with `/` separators, used for route-based namespace inference.
    pub path: &'a str,
    pub text: &'a str,
}

/// One detection pass over a file.
pub trait PatternHandler: Send + Sync {
    fn name(&self) -> &'static str;

    /// Add whatever this pass finds to `record`, reading the bindings made by
    /// earlier passes.
    fn apply(&self, file: &SourceFile<'_>, record: &mut UsageRecord);
}

/// Extraction settings taken from the config file.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub dynamic_keys: BTreeMap<String, Vec<String>>,
    pub property_key_hints: Vec<PropertyKeyHint>,
    pub key_components: Vec<String>,
    pub locale_route_marker: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ExtractOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dynamic_keys: config.dynamic_keys.clone(),
            property_key_hints: config.property_key_hints.clone(),
            key_components: config.key_components.clone(),
            locale_route_marker: config.locale_route_marker.clone(),
        }
    }
}

pub struct UsageExtractor {
    handlers: Vec<Box<dyn PatternHandler>>,
}

impl UsageExtractor {
    pub fn new(options: &ExtractOptions) -> Result<Self> {
        let handlers: Vec<Box<dyn PatternHandler>> = vec![
            Box::new(NamespaceCallHandler),
            Box::new(HookCallHandler),
            Box::new(LiteralKeyHandler),
            Box::new(TemplateKeyHandler::new(options.dynamic_keys.clone())),
            Box::new(PropertyKeyHandler::new(options.property_key_hints.clone())),
            Box::new(ComponentKeyHandler::new(
                &options.key_components,
                &options.locale_route_marker,
            )?),
        ];
        Ok(Self { handlers })
    }

    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Run every pass over `text` and return the file's usage record.
    pub fn extract(&self, path: &Path, text: &str) -> UsageRecord {
        let path_str = path.to_string_lossy().replace('\\', "/");
        let file = SourceFile {
            path: &path_str,
            text,
        };
        let mut record = UsageRecord::new(path);
        for handler in &self.handlers {
            handler.apply(&file, &mut record);
        }
        record
    }

    pub fn extract_file(&self, path: &Path) -> Result<UsageRecord, FileError> {
        let text = fs::read_to_string(path).map_err(|source| FileError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.extract(path, &text))
    }

    /// Scan `files` in parallel. Records and errors come back in input order.
    pub fn extract_files(&self, files: &[PathBuf]) -> (Vec<UsageRecord>, Vec<FileError>) {
        let results: Vec<Result<UsageRecord, FileError>> = files
            .par_iter()
            .map(|path| self.extract_file(path))
            .collect();

        let mut records = Vec::with_capacity(results.len());
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(record) => records.push(record),
                Err(err) => errors.push(err),
            }
        }
        (records, errors)
    }
}

/// Text of the line containing `offset`, up to `offset`.
pub(crate) fn line_prefix(text: &str, offset: usize) -> &str {
    let before = &text[..offset];
    match before.rfind('\n') {
        Some(pos) => &before[pos + 1..],
        None => before,
    }
}

/// Key suffixes that look like paths rather than translation keys.
pub(crate) fn is_plausible_key(key: &str) -> bool {
    !key.is_empty() && !key.contains('/')
}
