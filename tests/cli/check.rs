use anyhow::Result;

use crate::{CliTest, exit_code, section, stderr, stdout};

const COMMON_EN: &str = r#"{ "common": { "title": "Title" } }"#;
const COMMON_ZH: &str = r#"{ "common": { "title": "标题" } }"#;

#[test]
fn test_key_missing_in_one_locale() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, r#"{ "common": {} }"#)?;
    test.write_file(
        "src/app/page.tsx",
        r#"
export default function Page() {
  const t = useTranslations('common');
  return <h1>{t('title')}</h1>;
}
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(exit_code(&output), Some(1), "stderr: {}", stderr(&output));

    let log = test.read_log("check.log")?;
    assert_eq!(section(&log, "✘ zh is missing keys:"), vec!["  - common.title"]);
    assert!(log.contains(&"✓ en contains all used keys".to_string()));
    assert!(!log.iter().any(|l| l == "✘ en is missing keys:"));
    assert!(log.contains(&"✓ en contains all used namespaces".to_string()));
    assert!(log.contains(&"✓ zh contains all used namespaces".to_string()));
    assert_eq!(
        section(&log, "! Keys only in en (not in zh):"),
        vec!["  - common.title"]
    );

    Ok(())
}

#[test]
fn test_consistent_project_passes() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, COMMON_ZH)?;
    test.write_file(
        "src/components/header.tsx",
        r#"
export function Header() {
  const t = useTranslations('common');
  return <h1>{t('title')}</h1>;
}
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(exit_code(&output), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("=== Translation Check Report ==="));
    assert!(out.contains("Log saved to"));

    let log = test.read_log("check.log")?;
    assert_eq!(
        section(&log, "In file src/components/header.tsx:"),
        vec![
            "  Translation functions:",
            "    - t => common",
            "  Keys:",
            "    - common.title",
        ]
    );
    assert!(!log.iter().any(|l| l.starts_with("Log saved to")));

    Ok(())
}

#[test]
fn test_missing_namespace_is_reported_first() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, COMMON_ZH)?;
    test.write_file(
        "src/app/about/page.tsx",
        r#"
export default async function About() {
  const t = await getTranslations('about');
  const tc = await getTranslations('common');
  return <h1>{t('heading')} {tc('title')}</h1>;
}
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(exit_code(&output), Some(1));

    let log = test.read_log("check.log")?;
    let ns_pos = log
        .iter()
        .position(|l| l == "✘ en is missing namespaces:")
        .unwrap();
    let key_pos = log.iter().position(|l| l == "✘ en is missing keys:").unwrap();
    assert!(ns_pos < key_pos);
    assert_eq!(section(&log, "✘ en is missing namespaces:"), vec!["  - about"]);
    assert_eq!(section(&log, "✘ zh is missing keys:"), vec!["  - about.heading"]);

    Ok(())
}

#[test]
fn test_const_outside_lookback_window() -> Result<()> {
    let test = CliTest::with_catalogs(
        r#"{ "home": { "hero": "Hero" } }"#,
        r#"{ "home": { "hero": "英雄" } }"#,
    )?;
    test.write_file(
        "src/app/page.tsx",
        r#"
export default async function Home() {
  const t =
    // one
    // two
    // three
    // four
    // five
    await getTranslations('home');
  return <h1>{t('hero')}</h1>;
}
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(exit_code(&output), Some(0), "stderr: {}", stderr(&output));

    let log = test.read_log("check.log")?;
    assert!(log.contains(&"Found 1 namespace used in code: home".to_string()));
    assert!(log.contains(&"Found 0 keys used in code".to_string()));
    assert!(!log.iter().any(|l| l.contains("home.hero")));

    Ok(())
}

#[test]
fn test_dynamic_key_table() -> Result<()> {
    let test = CliTest::with_catalogs(
        r#"{ "tags": { "tags": "Tags", "a": "A", "b": "B" } }"#,
        r#"{ "tags": { "tags": "标签", "a": "甲", "b": "乙" } }"#,
    )?;
    test.write_file(".transcheckrc.json", r#"{ "dynamicKeys": { "tags": ["a", "b"] } }"#)?;
    test.write_file(
        "src/app/tags/[id]/page.tsx",
        r#"
export default async function Tag({ id }) {
  const t = await getTranslations("tags");
  return <h1>{t(`tags.${id}`)}</h1>;
}
"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(exit_code(&output), Some(0), "stderr: {}", stderr(&output));

    let log = test.read_log("check.log")?;
    assert_eq!(
        section(&log, "In file src/app/tags/[id]/page.tsx:"),
        vec![
            "  Translation functions:",
            "    - t => tags",
            "  Keys:",
            "    - tags.tags",
            "    - tags.a",
            "    - tags.b",
            "  [dynamic key] template: tags.tags.${id}",
        ]
    );

    Ok(())
}

#[test]
fn test_configured_locales_and_log_dir() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, COMMON_ZH)?;
    test.write_file("messages/fr.json", r#"{ "common": {} }"#)?;
    test.write_file(
        ".transcheckrc.json",
        r#"{ "locales": ["en", "zh"], "logDir": "logs" }"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(exit_code(&output), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("logs/check.log").exists());
    assert!(!test.root().join("scripts").exists());

    Ok(())
}

#[test]
fn test_unloadable_catalog_is_a_warning() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, "{ not json")?;

    let output = test.check_command().output()?;
    assert_eq!(exit_code(&output), Some(0));
    assert!(stderr(&output).contains("warning:"));

    let log = test.read_log("check.log")?;
    assert!(
        log.iter()
            .any(|l| l.starts_with("[WARN] cannot parse catalog for locale 'zh'"))
    );
    assert!(!log.iter().any(|l| l.contains("zh contains")));

    Ok(())
}

#[test]
fn test_no_catalogs_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.tsx", "export const x = 1;")?;

    let output = test.check_command().output()?;
    assert_eq!(exit_code(&output), Some(2));
    assert!(stderr(&output).starts_with("Error: No locales configured"));

    Ok(())
}

#[test]
fn test_unreadable_source_root_is_fatal() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, COMMON_ZH)?;
    test.write_file(".transcheckrc.json", r#"{ "sourceRoot": "./does-not-exist" }"#)?;

    let output = test.check_command().output()?;
    assert_eq!(exit_code(&output), Some(2));
    assert!(
        stderr(&output).starts_with("Error: Failed to scan source files: cannot read source root"),
        "stderr: {}",
        stderr(&output)
    );
    assert!(!test.root().join("scripts/check.log").exists());

    Ok(())
}

#[test]
fn test_locale_override_from_cli() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, r#"{ "common": {} }"#)?;

    let output = test
        .check_command()
        .args(["--locale", "en"])
        .output()?;
    assert_eq!(exit_code(&output), Some(0), "stderr: {}", stderr(&output));

    let log = test.read_log("check.log")?;
    assert!(!log.iter().any(|l| l.contains(" zh ")));

    Ok(())
}
