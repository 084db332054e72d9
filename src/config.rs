use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".transcheckrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.*",
    "**/*.spec.*",
    "**/__tests__/**",
];

/// Directories that hold third-party or generated code and are never scanned.
pub const DEPENDENCY_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    "vendor",
    ".git",
    ".next",
];

/// A content marker that makes a fixed set of keys count as used for
/// `t(item.key)` calls whose variable cannot be traced to a literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyKeyHint {
    /// Text fragments; the hint applies when any of them occurs in the file.
    pub markers: Vec<String>,
    /// Leaf keys (relative to the bound namespace) recorded when the hint applies.
    pub keys: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    /// Locales in report order. Empty means "every `*.json` in `messagesRoot`".
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default = "default_locale", alias = "primaryLocale")]
    pub default_locale: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Key prefix -> known leaves, used to enumerate template keys like `t(`tags.${id}`)`.
    #[serde(default)]
    pub dynamic_keys: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub property_key_hints: Vec<PropertyKeyHint>,
    #[serde(default = "default_key_components")]
    pub key_components: Vec<String>,
    #[serde(default = "default_locale_route_marker")]
    pub locale_route_marker: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_log_dir() -> String {
    "scripts".to_string()
}

fn default_key_components() -> Vec<String> {
    vec!["FormattedMessage".to_string()]
}

fn default_locale_route_marker() -> String {
    "[locale]".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            messages_root: default_messages_root(),
            locales: Vec::new(),
            default_locale: default_locale(),
            log_dir: default_log_dir(),
            dynamic_keys: BTreeMap::new(),
            property_key_hints: Vec::new(),
            key_components: default_key_components(),
            locale_route_marker: default_locale_route_marker(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or `includes` is invalid,
    /// or if a key component name is not a plain identifier.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        // Patterns without wildcards are literal paths, so [locale] needs no escaping.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for component in &self.key_components {
            let valid = !component.is_empty()
                && component
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '$');
            if !valid {
                anyhow::bail!("Invalid component name in 'keyComponents': \"{}\"", component);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
