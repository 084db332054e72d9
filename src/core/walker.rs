use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::config::{DEPENDENCY_DIRS, TEST_FILE_PATTERNS};

/// The source root itself could not be walked.
#[derive(Debug, Error)]
#[error("cannot read source root {}: {source}", root.display())]
pub struct WalkerError {
    pub root: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// A compiled include or ignore rule, matched against root-relative paths.
enum PathRule {
    Glob(Pattern),
    /// Literal path; matches itself and everything below it.
    Prefix(String),
}

impl PathRule {
    fn parse(raw: &str, verbose: bool) -> Option<Self> {
        if is_glob_pattern(raw) {
            match Pattern::new(raw) {
                Ok(pattern) => Some(Self::Glob(pattern)),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            raw,
                            e
                        );
                    }
                    None
                }
            }
        } else {
            let trimmed = raw.trim_start_matches("./").trim_matches('/');
            Some(Self::Prefix(trimmed.to_string()))
        }
    }

    fn matches(&self, rel_path: &str) -> bool {
        match self {
            Self::Glob(pattern) => pattern.matches(rel_path),
            Self::Prefix(prefix) => {
                prefix.is_empty()
                    || rel_path == prefix
                    || rel_path
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted lexicographically.
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be read during the walk.
    pub skipped_count: usize,
}

/// List every scannable file under `root` that matches at least one include
/// rule and no ignore rule.
///
/// An empty `includes` list includes everything. Declaration files (`*.d.ts`)
/// and dependency directories are always skipped; test files are skipped when
/// `ignore_test_files` is set.
pub fn list_files(
    root: &Path,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> Result<ScanResult, WalkerError> {
    fs::read_dir(root).map_err(|source| WalkerError {
        root: root.to_path_buf(),
        source,
    })?;

    let include_rules: Vec<PathRule> = includes
        .iter()
        .filter_map(|p| PathRule::parse(p, verbose))
        .collect();

    let mut ignore_rules: Vec<PathRule> = ignores
        .iter()
        .filter_map(|p| PathRule::parse(p, verbose))
        .collect();
    if ignore_test_files {
        ignore_rules.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| PathRule::parse(p, false)));
    }

    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_dependency_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_scannable_file(path) {
            continue;
        }

        let rel_path = relative_path_string(root, path);

        let included =
            include_rules.is_empty() || include_rules.iter().any(|r| r.matches(&rel_path));
        if !included || ignore_rules.iter().any(|r| r.matches(&rel_path)) {
            continue;
        }

        files.insert(path.to_path_buf());
    }

    Ok(ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    })
}

fn is_dependency_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| DEPENDENCY_DIRS.contains(&name))
}

fn is_scannable_file(path: &Path) -> bool {
    let is_declaration = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".d.ts"));
    !is_declaration
        && matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("tsx" | "ts" | "jsx" | "js" | "mjs" | "cjs")
        )
}

/// Path relative to `root`, with `/` separators on every platform.
pub fn relative_path_string(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
