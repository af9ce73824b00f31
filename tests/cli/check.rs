use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const EN: &str = r#"{
  "Common": {
    "title": "Dashboard",
    "save": "Save"
  }
}"#;

#[test]
fn test_untranslated_value() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", EN),
        (
            "fr",
            r#"{
  "Common": {
    "title": "Dashboard",
    "save": "Enregistrer"
  }
}"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    warning: "Dashboard"  same
      --> ./messages/fr.json:3:1
      = note: Common.title (fr) is identical to en

    ✘ 1 problem (0 errors, 1 warning)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_translated_locale() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", EN),
        (
            "de",
            r#"{
  "Common": {
    "title": "Übersicht",
    "save": "Speichern"
  }
}"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files (2 messages) - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_exempt_values_not_reported() -> Result<()> {
    let content = r#"{
  "ok": "OK",
  "year": "2013",
  "copyright": "© 2013 Acme",
  "site": "https://weblate.org/",
  "web": "Web"
}"#;
    let test = CliTest::with_locales(&[("en", content), ("pl", content)])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_format_flag_from_cli_and_config() -> Result<()> {
    let content = r#"{
  "count": "%(count)s"
}"#;
    let test = CliTest::with_locales(&[("en", content), ("fr", content)])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let output = test
        .check_command()
        .args(["--flag", "python-format"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    test.write_file(".samecheckrc.json", r#"{ "flags": ["python-format"] }"#)?;
    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let content = r#"{
  "Brand": { "name": "Acme Cloud" },
  "tool": "Kubernetes",
  "title": "Dashboard"
}"#;
    let test = CliTest::with_locales(&[("en", content), ("fr", content)])?;
    test.write_file(
        ".samecheckrc.json",
        r#"{
  "ignoreKeys": ["Brand.*"],
  "ignoreTexts": ["Kubernetes"],
  "keyFlags": { "title": ["ignore-same"] }
}"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files (2 messages) - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_plural_forms() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{ "files": ["One file", "Many files"] }"#),
        ("fr", r#"{ "files": ["Un fichier", "Many files"] }"#),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("warning: \"Un fichier\"  same"));
    assert!(stdout.contains("files (fr) is identical to en"));

    Ok(())
}

#[test]
fn test_invalid_locale_file() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("fr", "{ not json")])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("error: \"Failed to parse JSON file"));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("  --> ./messages/fr.json\n"));
    assert!(stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_missing_messages_dir() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Messages directory './messages' does not exist.
    Hint: Check your .samecheckrc.json 'messagesRoot' setting.
    ");

    Ok(())
}

#[test]
fn test_primary_locale_override() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{ "title": "Dashboard" }"#),
        ("de", r#"{ "title": "Dashboard" }"#),
    ])?;

    // English variants are never flagged, so swapping the primary locale
    // makes the English file the translation under check.
    let output = test
        .check_command()
        .args(["--primary-locale", "de"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let output = test
        .check_command()
        .args(["--primary-locale", "ja"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Primary locale 'ja' not found"));

    Ok(())
}

#[test]
fn test_custom_messages_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{ "title": "Dashboard" }"#)?;
    test.write_file("locales/fr.json", r#"{ "title": "Dashboard" }"#)?;

    let output = test
        .check_command()
        .args(["--messages-root", "locales"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("  --> locales/fr.json:1:1"));

    Ok(())
}

#[test]
fn test_unknown_format_flag() -> Result<()> {
    let content = r#"{ "count": "%(count)s" }"#;
    let test = CliTest::with_locales(&[("en", content), ("fr", content)])?;

    let output = test
        .check_command()
        .args(["--flag", "pyhton-format"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unknown format flag 'pyhton-format'"));

    test.write_file(
        ".samecheckrc.json",
        r#"{ "keyFlags": { "count": ["pyhton-format"] } }"#,
    )?;
    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Unknown format flag \"pyhton-format\""));

    Ok(())
}
