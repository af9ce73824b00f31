use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["primaryLocale"], "en");
    assert_eq!(parsed["sourceLanguages"], serde_json::json!(["en"]));
    for key in ["flags", "keyFlags", "ignoreKeys", "ignoreTexts"] {
        assert!(parsed.get(key).is_some(), "Config should have '{}' field", key);
    }

    assert!(
        content.contains("\n  \"primaryLocale\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .samecheckrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".samecheckrc.json").exists());

    let content = test.read_file(".samecheckrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".samecheckrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ .samecheckrc.json already exists
    ");

    assert_eq!(test.read_file(".samecheckrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("messages/en.json", r#"{ "title": "Dashboard" }"#)?;
    test.write_file("messages/fr.json", r#"{ "title": "Tableau de bord" }"#)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}
