//! Report rendering.
//!
//! Every renderer writes plain lines into a [`RunLog`], which mirrors them to
//! the console and keeps them for the log file. Separate from the rules so
//! transcheck can be used as a library.

use unicode_width::UnicodeWidthStr;

use super::{actions::PruneOutcome, run_log::RunLog};
use crate::{
    core::usage::{UsageRecord, UsageSet},
    rules::{unused::UnusedReport, validation::ValidationReport},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Mark for entries that exist but shouldn't.
pub const NOTICE_MARK: &str = "!";

const REPORT_END: &str = "=== End of Report ===";

/// Bindings, keys and dynamic-key notes found in one file. Files with no
/// findings print nothing.
pub fn render_file_usage(display_path: &str, record: &UsageRecord, log: &mut RunLog) {
    if record.is_empty() {
        return;
    }

    log.info(format!("In file {}:", display_path));

    if !record.bindings.is_empty() {
        let width = record
            .bindings
            .iter()
            .map(|(ident, _)| UnicodeWidthStr::width(ident))
            .max()
            .unwrap_or(0);
        log.info("  Translation functions:");
        for (ident, namespace) in record.bindings.iter() {
            let padding = width - UnicodeWidthStr::width(ident);
            log.info(format!(
                "    - {}{} => {}",
                ident,
                " ".repeat(padding),
                namespace
            ));
        }
    }

    if !record.keys.is_empty() {
        log.info("  Keys:");
        for key in &record.keys {
            log.info(format!("    - {}", key));
        }
    }

    for note in &record.notes {
        log.info(format!("  [dynamic key] {}: {}", note.kind, note.expression));
    }
}

/// One-line totals of what the source uses.
pub fn render_usage_summary(usage: &UsageSet, log: &mut RunLog) {
    log.info(format!(
        "Found {} {} used in code",
        usage.keys.len(),
        plural(usage.keys.len(), "key", "keys")
    ));
    log.info(format!(
        "Found {} {} used in code: {}",
        usage.namespaces.len(),
        plural(usage.namespaces.len(), "namespace", "namespaces"),
        usage
            .namespaces
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    ));
}

/// Missing namespaces per locale first, then missing keys, then keys that
/// exist in one locale but not another.
pub fn render_validation(report: &ValidationReport, log: &mut RunLog) {
    log.info("");
    log.info("=== Translation Check Report ===");
    log.info("");

    for locale in &report.locales {
        if locale.missing_namespaces.is_empty() {
            log.info(format!(
                "{} {} contains all used namespaces",
                SUCCESS_MARK, locale.locale
            ));
        } else {
            log.info(format!(
                "{} {} is missing namespaces:",
                FAILURE_MARK, locale.locale
            ));
            list(&locale.missing_namespaces, log);
        }
    }

    for locale in &report.locales {
        log.info("");
        if locale.missing_keys.is_empty() {
            log.info(format!("{} {} contains all used keys", SUCCESS_MARK, locale.locale));
        } else {
            log.info(format!("{} {} is missing keys:", FAILURE_MARK, locale.locale));
            list(&locale.missing_keys, log);
        }
    }

    for exclusive in report.exclusive.iter().filter(|e| !e.keys.is_empty()) {
        log.info("");
        log.info(format!(
            "{} Keys only in {} (not in {}):",
            NOTICE_MARK, exclusive.locale, exclusive.other
        ));
        list(&exclusive.keys, log);
    }

    log.info("");
    log.info(REPORT_END);
    log.info("");
}

/// Per-locale counts, then the removal step (or the hint to run it).
pub fn render_prune(
    report: &UnusedReport,
    outcomes: &[PruneOutcome],
    remove: bool,
    log: &mut RunLog,
) {
    for locale in &report.locales {
        log.info("");
        log.info(format!(
            "Found {} unused {} in {}",
            locale.keys.len(),
            plural(locale.keys.len(), "key", "keys"),
            locale.locale
        ));
        log.info(format!(
            "Found {} unused {} in {}",
            locale.namespaces.len(),
            plural(locale.namespaces.len(), "namespace", "namespaces"),
            locale.locale
        ));
    }

    log.info("");
    if remove {
        log.info("Removing unused translation keys...");
        for outcome in outcomes {
            if let Some(err) = &outcome.save_error {
                log.error(format!(
                    "Failed to save catalog for {}: {}",
                    outcome.locale, err
                ));
                continue;
            }
            for namespace in &outcome.removed_namespaces {
                log.info(format!(
                    "Removed unused namespace from {}: {}",
                    outcome.locale, namespace
                ));
            }
            if outcome.saved {
                log.info(format!(
                    "Removed {} unused {} from {}",
                    outcome.removed_keys.len(),
                    plural(outcome.removed_keys.len(), "key", "keys"),
                    outcome.locale
                ));
            }
        }
    } else {
        for outcome in outcomes.iter().filter(|o| !o.is_empty()) {
            log.info(format!(
                "Would remove {} {} and {} {} from {}",
                outcome.removed_keys.len(),
                plural(outcome.removed_keys.len(), "key", "keys"),
                outcome.removed_namespaces.len(),
                plural(outcome.removed_namespaces.len(), "namespace", "namespaces"),
                outcome.locale
            ));
        }
        log.info("To delete unused keys, run again with --remove");
    }
}

/// Unused namespaces and keys per locale, plus what was removed.
pub fn render_unused(
    report: &UnusedReport,
    outcomes: &[PruneOutcome],
    remove: bool,
    log: &mut RunLog,
) {
    log.info("");
    log.info("=== Unused Translation Keys Report ===");
    log.info("");

    for locale in &report.locales {
        if locale.namespaces.is_empty() {
            log.info(format!(
                "{} {} has no unused namespaces",
                SUCCESS_MARK, locale.locale
            ));
        } else {
            log.info(format!("{} Unused namespaces in {}:", NOTICE_MARK, locale.locale));
            list(&locale.namespaces, log);
        }

        log.info("");
        if locale.keys.is_empty() {
            log.info(format!("{} {} has no unused keys", SUCCESS_MARK, locale.locale));
        } else {
            log.info(format!("{} Unused keys in {}:", NOTICE_MARK, locale.locale));
            list(&locale.keys, log);
        }

        if remove
            && let Some(outcome) = outcomes.iter().find(|o| o.locale == locale.locale)
            && outcome.saved
            && !outcome.removed_keys.is_empty()
        {
            log.info("");
            log.info(format!("Keys removed from {}:", locale.locale));
            list(&outcome.removed_keys, log);
        }
    }

    log.info("");
    log.info(REPORT_END);
    log.info("");
}

fn list(items: &[String], log: &mut RunLog) {
    for item in items {
        log.info(format!("  - {}", item));
    }
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
