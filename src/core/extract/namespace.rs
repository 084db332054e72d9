//! Namespace-establishing calls: `getTranslations` and `useTranslations`.

use std::sync::LazyLock;

use regex::Regex;

use super::{PatternHandler, SourceFile, line_prefix};
use crate::core::usage::UsageRecord;

// getTranslations("ns") or getTranslations({ locale, namespace: "ns" })
static GET_TRANSLATIONS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"getTranslations\(\s*(?:\{[^}]*namespace:\s*['"]([^'"]+)['"][^}]*\}|['"]([^'"]+)['"])\s*\)"#,
    )
    .unwrap()
});

static USE_TRANSLATIONS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"useTranslations\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap());

static CONST_DECL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const\s+(\w+)\s*=").unwrap());

/// Lines searched for the `const` that receives a `getTranslations` result,
/// counting the call's own line.
pub const BINDING_LOOKBACK_LINES: usize = 5;

/// `getTranslations(...)`, usually awaited and assigned a few lines around the call.
pub struct NamespaceCallHandler;

impl PatternHandler for NamespaceCallHandler {
    fn name(&self) -> &'static str {
        "namespace-call"
    }

    fn apply(&self, file: &SourceFile<'_>, record: &mut UsageRecord) {
        for caps in GET_TRANSLATIONS_REGEX.captures_iter(file.text) {
            let Some(namespace) = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()) else {
                continue;
            };
            record.add_namespace(namespace);

            let Some(whole) = caps.get(0) else {
                continue;
            };
            if let Some(ident) = find_binding_before(file.text, whole.start()) {
                record.bindings.bind(ident, namespace);
            }
        }
    }
}

/// Nearest `const <ident> =` within the lookback window, skipping lines that
/// hold another translation call.
fn find_binding_before(text: &str, offset: usize) -> Option<&str> {
    text[..offset]
        .split('\n')
        .rev()
        .take(BINDING_LOOKBACK_LINES)
        .filter(|line| !line.contains("useTranslations") && !line.contains("getTranslations"))
        .find_map(|line| {
            CONST_DECL_REGEX
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })
}

/// `useTranslations("ns")`, conventionally written inline as `const t = useTranslations(...)`.
pub struct HookCallHandler;

impl PatternHandler for HookCallHandler {
    fn name(&self) -> &'static str {
        "hook-call"
    }

    fn apply(&self, file: &SourceFile<'_>, record: &mut UsageRecord) {
        for caps in USE_TRANSLATIONS_REGEX.captures_iter(file.text) {
            let (Some(whole), Some(namespace)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let namespace = namespace.as_str();
            record.add_namespace(namespace);

            let prefix = line_prefix(file.text, whole.start());
            if let Some(ident) = CONST_DECL_REGEX.captures(prefix).and_then(|c| c.get(1)) {
                record.bindings.bind(ident.as_str(), namespace);
            }
        }
    }
}
