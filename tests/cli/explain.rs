use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_explain_untranslated() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.explain_command("Dashboard");
    cmd.args(["--language", "fr"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    source:   "Dashboard"
    target:   "Dashboard"
    language: fr
    format:   none
    residue:  "dashboard"
    ignored:  no
    ✘ Not translated: target is identical to source

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_explain_placeholders() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.explain_command("%d.%d.%d");
    cmd.args(["--language", "de", "--flag", "c-format"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    source:   "%d.%d.%d"
    target:   "%d.%d.%d"
    language: de
    format:   c-format
    residue:  ""
    ignored:  yes
    ✓ not flagged

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_explain_translated_target() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .explain_command("Save")
        .args(["--target", "Speichern", "-l", "de"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_explain_uses_config_words() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .explain_command("Kubernetes")
        .args(["-l", "fr"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    test.write_file(".samecheckrc.json", r#"{ "ignoreTexts": ["Kubernetes"] }"#)?;
    let output = test
        .explain_command("Kubernetes")
        .args(["-l", "fr"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("ignored:  yes"));

    Ok(())
}

#[test]
fn test_explain_rejects_flag_list() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .explain_command("Save")
        .args(["--flag", "c-format,fuzzy"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_explain_uses_config_flags() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .explain_command("%(count)s")
        .args(["-l", "fr"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    test.write_file(".samecheckrc.json", r#"{ "flags": ["python-format"] }"#)?;
    let output = test
        .explain_command("%(count)s")
        .args(["-l", "fr"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("format:   python-format"));

    Ok(())
}
