use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

const TEMPLATE: &str = "locales/{{lang}}/{{ns}}.json";

fn project() -> Result<CliTest> {
    CliTest::with_files(&[(
        "locales/en/common.json",
        r#"{"title": "Title", "nav": {"home": "Home"}}"#,
    )])
}

#[test]
fn test_check_up_to_date() -> Result<()> {
    let test = project()?;
    test.generate_command(TEMPLATE, "i18n.ts").output()?;

    let output = test
        .generate_command(TEMPLATE, "i18n.ts")
        .arg("--check")
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @"✓ i18n.ts is up to date (1 namespace, 2 keys, 1 language)");

    Ok(())
}

#[test]
fn test_check_missing_output() -> Result<()> {
    let test = project()?;

    let output = test
        .generate_command(TEMPLATE, "i18n.ts")
        .arg("--check")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(
        stderr(&output),
        @"✘ i18n.ts is out of date (run without --check to regenerate)"
    );
    assert!(!test.root().join("i18n.ts").exists());

    Ok(())
}

#[test]
fn test_check_stale_output_is_not_rewritten() -> Result<()> {
    let test = project()?;
    test.write_file("i18n.ts", "// outdated\n")?;

    let output = test
        .generate_command(TEMPLATE, "i18n.ts")
        .arg("--check")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("i18n.ts")?, "// outdated\n");

    Ok(())
}

#[test]
fn test_check_fails_after_translation_change() -> Result<()> {
    let test = project()?;
    test.generate_command(TEMPLATE, "i18n.ts").output()?;
    test.write_file(
        "locales/en/common.json",
        r#"{"title": "Title", "nav": {"home": "Home", "about": "About"}}"#,
    )?;

    let output = test
        .generate_command(TEMPLATE, "i18n.ts")
        .arg("--check")
        .output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}
