use std::path::{Component, Path, PathBuf};

use anyhow::{Context as _, Result, bail};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        catalog::{CatalogStore, discover_locales},
        extract::{ExtractOptions, FileError, UsageExtractor},
        usage::{UsageRecord, UsageSet},
        walker::{ScanResult, list_files},
    },
};

/// Everything a command needs after scanning and loading.
///
/// Built once per run by [`RunContext::new`]:
///
/// 1. Load configuration (CLI args > config file > defaults)
/// 2. Resolve the scan root, messages directory, log directory and locales
/// 3. Walk the source tree and load catalogs concurrently
/// 4. Extract usage from every file and merge it into a [`UsageSet`]
pub struct RunContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root; config, messages and log paths are relative to it.
    pub root_dir: PathBuf,

    /// Directory the source walker starts from (`root_dir` + `sourceRoot`).
    pub source_dir: PathBuf,

    pub messages_dir: PathBuf,

    pub log_dir: PathBuf,

    /// Locales this run targets, in report order.
    pub locales: Vec<String>,

    pub scan: ScanResult,

    /// One record per scanned file, sorted by path.
    pub records: Vec<UsageRecord>,

    /// Files that could not be read.
    pub file_errors: Vec<FileError>,

    pub usage: UsageSet,

    pub catalogs: CatalogStore,

    pub verbose: bool,
}

impl RunContext {
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - The source root can't be read
    /// - No locale can be resolved, or no catalog loads
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // Priority: CLI --source-root arg > current directory
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        apply_overrides(&mut config, common_args);

        let source_dir = resolve_path(&root_dir, &config.source_root);
        let messages_dir = resolve_path(&root_dir, &config.messages_root);
        let log_dir = resolve_path(&root_dir, &config.log_dir);

        let locales = if config.locales.is_empty() {
            discover_locales(&messages_dir, &config.default_locale)
        } else {
            config.locales.clone()
        };
        if locales.is_empty() {
            bail!(
                "No locales configured and no catalogs found in '{}'",
                messages_dir.display()
            );
        }

        let extractor = UsageExtractor::new(&ExtractOptions::from_config(&config))?;

        let (scan_result, catalogs) = rayon::join(
            || {
                list_files(
                    &source_dir,
                    &config.includes,
                    &config.ignores,
                    config.ignore_test_files,
                    verbose,
                )
            },
            || CatalogStore::load_all(&messages_dir, &locales),
        );

        let scan = scan_result.context("Failed to scan source files")?;
        if catalogs.catalogs.is_empty() {
            bail!(
                "No catalog could be loaded from '{}'",
                messages_dir.display()
            );
        }

        let (records, file_errors) = extractor.extract_files(&scan.files);
        let usage = UsageSet::from_records(&records);

        Ok(Self {
            config,
            root_dir,
            source_dir,
            messages_dir,
            log_dir,
            locales,
            scan,
            records,
            file_errors,
            usage,
            catalogs,
            verbose,
        })
    }

    /// Path shown in logs: relative to the scan root, `/`-separated.
    pub fn display_path(&self, path: &Path) -> String {
        crate::core::walker::relative_path_string(&self.source_dir, path)
    }
}

fn apply_overrides(config: &mut Config, common_args: &CommonArgs) {
    if let Some(ref default_locale) = common_args.default_locale {
        config.default_locale = default_locale.clone();
    }

    if let Some(ref messages_root) = common_args.messages_root {
        config.messages_root = messages_root.to_string_lossy().to_string();
    }

    if !common_args.locales.is_empty() {
        config.locales = common_args.locales.clone();
    }
}

/// Join a configured path onto the project root. Absolute paths and a
/// `.` root pass through untouched.
fn resolve_path(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
