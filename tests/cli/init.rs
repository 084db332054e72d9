use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, exit_code, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], serde_json::json!(["src"]));
    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["defaultLocale"], "en");
    assert_eq!(parsed["logDir"], "scripts");
    assert_eq!(parsed["keyComponents"], serde_json::json!(["FormattedMessage"]));

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(exit_code(&output), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created .transcheckrc.json"));

    let content = test.read_file(".transcheckrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transcheckrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(exit_code(&output), Some(1));
    assert_eq!(
        stderr(&output).trim(),
        "Error: .transcheckrc.json already exists"
    );
    assert_eq!(test.read_file(".transcheckrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file("src/app.tsx", "export function App() { return <div>Test</div>; }")?;
    test.write_file("messages/en.json", "{}")?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert_eq!(exit_code(&output), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
