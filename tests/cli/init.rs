use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(
        parsed.get("path").and_then(Value::as_str),
        Some("locales/{{lang}}/{{ns}}.json")
    );
    assert!(
        parsed.get("output").is_some(),
        "Config should have 'output' field"
    );
    assert_eq!(parsed.get("delimiter").and_then(Value::as_str), Some(":"));

    // Verify formatting (2-space indentation)
    assert!(
        content.contains("\n  \"path\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @"✓ Created .i18ntypesrc.json");
    assert!(test.root().join(".i18ntypesrc.json").exists());

    let content = test.read_file(".i18ntypesrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18ntypesrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stderr(&output), @"error: .i18ntypesrc.json already exists");
    assert_eq!(test.read_file(".i18ntypesrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file("locales/en/common.json", r#"{"title": "Title"}"#)?;
    std::fs::create_dir_all(test.root().join("src"))?;

    let output = test.command().output()?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("src/i18n.generated.ts").exists());

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let help = stdout(&output);
    for flag in ["--path", "--output", "--lang", "--delimiter", "--check", "init"] {
        assert!(help.contains(flag), "help should mention {}", flag);
    }

    Ok(())
}
