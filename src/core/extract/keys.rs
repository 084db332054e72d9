//! Key lookups through bound translation functions.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use super::{PatternHandler, SourceFile, is_plausible_key};
use crate::{
    config::PropertyKeyHint,
    core::usage::{DynamicKeyKind, UsageRecord},
};

// t("key") / t('key')
static LITERAL_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap());

// t(`section.${id}`)
static TEMPLATE_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\(\s*`([^`]+)`\s*\)").unwrap());

// t(item.key)
static PROPERTY_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\(\s*(\w+)\.(\w+)\s*\)").unwrap());

pub struct LiteralKeyHandler;

impl PatternHandler for LiteralKeyHandler {
    fn name(&self) -> &'static str {
        "literal-key"
    }

    fn apply(&self, file: &SourceFile<'_>, record: &mut UsageRecord) {
        for caps in LITERAL_CALL_REGEX.captures_iter(file.text) {
            let (Some(func), Some(key)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let key = key.as_str();
            if !is_plausible_key(key) {
                continue;
            }
            if let Some(namespace) = record.bindings.namespace_of(func.as_str()) {
                let full_key = format!("{}.{}", namespace, key);
                record.add_key(full_key);
            }
        }
    }
}

/// Template keys. Only the static prefix is visible; configured leaves stand in
/// for the interpolated part.
pub struct TemplateKeyHandler {
    /// Key prefix -> known leaves.
    dynamic_keys: BTreeMap<String, Vec<String>>,
}

impl TemplateKeyHandler {
    pub fn new(dynamic_keys: BTreeMap<String, Vec<String>>) -> Self {
        Self { dynamic_keys }
    }

    /// ``t(`${id}`)``: only a table entry for the namespace itself can name the keys.
    fn apply_namespace_leaves(&self, namespace: &str, template: &str, record: &mut UsageRecord) {
        let note = format!("{}.{}", namespace, template);
        let Some(leaves) = self.dynamic_keys.get(namespace) else {
            record.add_note(DynamicKeyKind::Unresolved, note);
            return;
        };
        for leaf in leaves {
            record.add_key(format!("{}.{}", namespace, leaf));
        }
        record.add_note(DynamicKeyKind::Template, note);
    }
}

impl PatternHandler for TemplateKeyHandler {
    fn name(&self) -> &'static str {
        "template-key"
    }

    fn apply(&self, file: &SourceFile<'_>, record: &mut UsageRecord) {
        for caps in TEMPLATE_CALL_REGEX.captures_iter(file.text) {
            let (Some(func), Some(template)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let Some(namespace) = record.bindings.namespace_of(func.as_str()) else {
                continue;
            };
            let namespace = namespace.to_string();
            let template = template.as_str();

            let is_dynamic = template.contains("${");
            let static_part = template.split("${").next().unwrap_or_default().trim();
            if !is_plausible_key(static_part) {
                if is_dynamic && static_part.is_empty() {
                    self.apply_namespace_leaves(&namespace, template, record);
                }
                continue;
            }

            let segments: Vec<&str> = static_part.split('.').filter(|s| !s.is_empty()).collect();
            let Some(first) = segments.first() else {
                continue;
            };
            record.add_key(format!("{}.{}", namespace, first));
            let static_path = segments.join(".");
            if segments.len() > 1 {
                record.add_key(format!("{}.{}", namespace, static_path));
            }

            if is_dynamic {
                let candidates = [namespace.clone(), format!("{}.{}", namespace, static_path)];
                for prefix in candidates {
                    if let Some(leaves) = self.dynamic_keys.get(&prefix) {
                        for leaf in leaves {
                            record.add_key(format!("{}.{}", prefix, leaf));
                        }
                    }
                }
                record.add_note(
                    DynamicKeyKind::Template,
                    format!("{}.{}", namespace, template),
                );
            }
        }
    }
}

/// `t(var.prop)`: traced to a `var = { key: "..." }` literal in the same file,
/// or to a configured hint. Never guessed otherwise.
pub struct PropertyKeyHandler {
    hints: Vec<PropertyKeyHint>,
}

impl PropertyKeyHandler {
    pub fn new(hints: Vec<PropertyKeyHint>) -> Self {
        Self { hints }
    }
}

impl PatternHandler for PropertyKeyHandler {
    fn name(&self) -> &'static str {
        "property-key"
    }

    fn apply(&self, file: &SourceFile<'_>, record: &mut UsageRecord) {
        for caps in PROPERTY_CALL_REGEX.captures_iter(file.text) {
            let (Some(func), Some(var), Some(prop)) = (caps.get(1), caps.get(2), caps.get(3))
            else {
                continue;
            };
            let Some(namespace) = record.bindings.namespace_of(func.as_str()) else {
                continue;
            };
            let namespace = namespace.to_string();
            let (var, prop) = (var.as_str(), prop.as_str());
            let expression = format!("{}.{}.{}", namespace, var, prop);

            if let Some(key) = resolve_object_key(file.text, var) {
                record.add_key(format!("{}.{}", namespace, key));
                record.add_note(DynamicKeyKind::Resolved, expression);
                continue;
            }

            let matching: Vec<&PropertyKeyHint> = self
                .hints
                .iter()
                .filter(|hint| hint.markers.iter().any(|m| file.text.contains(m.as_str())))
                .collect();
            if matching.is_empty() {
                record.add_note(DynamicKeyKind::Unresolved, expression);
                continue;
            }
            for hint in matching {
                for key in &hint.keys {
                    record.add_key(format!("{}.{}", namespace, key));
                }
            }
            record.add_note(DynamicKeyKind::Fallback, expression);
        }
    }
}

/// The `key: "..."` field of an object literal assigned to `var`, if any.
fn resolve_object_key(text: &str, var: &str) -> Option<String> {
    let pattern = format!(
        r#"\b{}\s*=\s*\{{[^}}]*key:\s*['"]([^'"]+)['"]"#,
        regex::escape(var)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
