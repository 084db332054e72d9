//! Component-attribute keys like `<FormattedMessage id="title" />`.

use anyhow::{Context, Result};
use regex::Regex;

use super::{PatternHandler, SourceFile, is_plausible_key};
use crate::core::usage::{DynamicKeyKind, UsageRecord};

pub struct ComponentKeyHandler {
    components: Vec<(String, Regex)>,
    /// Captures the route directory after the locale marker, skipping one
    /// `(group)`. File names directly under the marker never match.
    route_namespace: Regex,
}

impl ComponentKeyHandler {
    pub fn new(components: &[String], locale_route_marker: &str) -> Result<Self> {
        let components = components
            .iter()
            .map(|name| {
                let pattern = format!(r#"<{}[^>]*id=['"]([^'"]+)['"]"#, regex::escape(name));
                Regex::new(&pattern)
                    .with_context(|| format!("Invalid key component: {}", name))
                    .map(|re| (name.clone(), re))
            })
            .collect::<Result<Vec<_>>>()?;

        let route_pattern = format!(
            r"{}/(?:\([^)]+\)/)?([^/()]+)/",
            regex::escape(locale_route_marker)
        );
        let route_namespace = Regex::new(&route_pattern)
            .with_context(|| format!("Invalid locale route marker: {}", locale_route_marker))?;

        Ok(Self {
            components,
            route_namespace,
        })
    }

    fn infer_namespace<'a>(&self, path: &'a str) -> Option<&'a str> {
        self.route_namespace
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl PatternHandler for ComponentKeyHandler {
    fn name(&self) -> &'static str {
        "component-key"
    }

    fn apply(&self, file: &SourceFile<'_>, record: &mut UsageRecord) {
        for (component, re) in &self.components {
            for caps in re.captures_iter(file.text) {
                let Some(key) = caps.get(1).map(|m| m.as_str()) else {
                    continue;
                };
                if !is_plausible_key(key) {
                    continue;
                }

                // Multiple bindings can't be told apart lexically; the first one wins.
                if let Some(namespace) = record.bindings.first_namespace() {
                    let full_key = format!("{}.{}", namespace, key);
                    record.add_key(full_key);
                } else if let Some(namespace) = self.infer_namespace(file.path) {
                    record.add_namespace(namespace);
                    record.add_key(format!("{}.{}", namespace, key));
                } else {
                    record.add_note(
                        DynamicKeyKind::Unresolved,
                        format!("<{} id=\"{}\">", component, key),
                    );
                }
            }
        }
    }
}
