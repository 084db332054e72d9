use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::{CliTest, exit_code, section, stderr, stdout};

const COMMON_EN: &str = r#"{ "common": { "title": "Title" } }"#;
const COMMON_ZH: &str = r#"{ "common": { "title": "标题" } }"#;

fn parse(content: &str) -> Result<Value> {
    serde_json::from_str(content).context("Catalog should be valid JSON")
}

#[test]
fn test_dry_run_reports_everything_unused() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, COMMON_ZH)?;
    test.write_file("src/lib/math.ts", "export const add = (a, b) => a + b;\n")?;

    let output = test.clean_command().output()?;
    assert_eq!(exit_code(&output), Some(1), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("messages/en.json")?, COMMON_EN);
    assert_eq!(test.read_file("messages/zh.json")?, COMMON_ZH);

    let log = test.read_log("clean.log")?;
    for locale in ["en", "zh"] {
        assert_eq!(
            section(&log, &format!("! Unused namespaces in {}:", locale)),
            vec!["  - common"]
        );
        assert_eq!(
            section(&log, &format!("! Unused keys in {}:", locale)),
            vec!["  - common.title"]
        );
    }
    assert!(log.contains(&"To delete unused keys, run again with --remove".to_string()));
    assert!(!test.root().join("scripts/remove.log").exists());

    Ok(())
}

#[test]
fn test_remove_empties_catalogs() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, COMMON_ZH)?;
    test.write_file("src/lib/math.ts", "export const add = (a, b) => a + b;\n")?;

    let output = test.clean_command().arg("--remove").output()?;
    assert_eq!(exit_code(&output), Some(1), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("messages/en.json")?, "{}\n");
    assert_eq!(test.read_file("messages/zh.json")?, "{}\n");

    let log = test.read_log("remove.log")?;
    assert_eq!(section(&log, "Keys removed from en:"), vec!["  - common.title"]);
    assert!(log.contains(&"Removed unused namespace from zh: common".to_string()));
    assert!(!test.root().join("scripts/clean.log").exists());

    Ok(())
}

#[test]
fn test_remove_keeps_used_entries_and_order() -> Result<()> {
    let test = CliTest::with_catalogs(
        r#"{
  "home": { "title": "Home", "stale": "Old", "hero": "Hero" },
  "legacy": { "banner": "Banner" },
  "common": { "save": "Save" }
}"#,
        r#"{
  "home": { "title": "首页", "hero": "英雄" },
  "common": { "save": "保存", "nested": { "gone": "X" } }
}"#,
    )?;
    test.write_file(
        "src/app/page.tsx",
        r#"
export default function Page() {
  const t = useTranslations('home');
  const tc = useTranslations('common');
  return <main>{t('title')} {t('hero')} {tc('save')}</main>;
}
"#,
    )?;

    let output = test.clean_command().arg("--remove").output()?;
    assert_eq!(exit_code(&output), Some(1), "stderr: {}", stderr(&output));

    let en = test.read_file("messages/en.json")?;
    assert_eq!(
        parse(&en)?,
        json!({ "home": { "title": "Home", "hero": "Hero" }, "common": { "save": "Save" } })
    );
    assert!(en.find("\"home\"") < en.find("\"common\""));
    assert!(en.find("\"title\"") < en.find("\"hero\""));

    let zh = test.read_file("messages/zh.json")?;
    assert_eq!(
        parse(&zh)?,
        json!({ "home": { "title": "首页", "hero": "英雄" }, "common": { "save": "保存" } })
    );

    Ok(())
}

#[test]
fn test_minimal_catalogs_exit_zero_and_stay_untouched() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, COMMON_ZH)?;
    test.write_file(
        "src/components/title.tsx",
        r#"
export function Title() {
  const t = useTranslations('common');
  return <h1>{t('title')}</h1>;
}
"#,
    )?;

    let output = test.clean_command().arg("--remove").output()?;
    assert_eq!(exit_code(&output), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("✓ en has no unused keys"));

    assert_eq!(test.read_file("messages/en.json")?, COMMON_EN);
    assert_eq!(test.read_file("messages/zh.json")?, COMMON_ZH);

    Ok(())
}

#[test]
fn test_ignored_test_files_do_not_count_as_usage() -> Result<()> {
    let test = CliTest::with_catalogs(COMMON_EN, COMMON_ZH)?;
    test.write_file(
        "src/components/title.test.tsx",
        r#"
const t = useTranslations('common');
t('title');
"#,
    )?;

    let output = test.clean_command().output()?;
    assert_eq!(exit_code(&output), Some(1));

    let log = test.read_log("clean.log")?;
    assert!(log.contains(&"Found 0 files to scan".to_string()));

    Ok(())
}
