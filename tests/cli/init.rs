use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["localeRoot"], "./config/locales");
    assert_eq!(parsed["skipPatterns"], Value::Array(Vec::new()));
    assert_eq!(parsed["skipDirectories"], Value::Array(Vec::new()));
    assert_eq!(parsed["searchDirectLocale"], true);
    assert_eq!(parsed["failurePolicy"], "lenient");

    assert!(
        content.contains("  \"localeRoot\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(output.stdout.trim_end(), @"✓ Created .missingtextrc.json");
    assert!(test.root().join(".missingtextrc.json").exists());

    let content = test.read_file(".missingtextrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".missingtextrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Error: .missingtextrc.json already exists"));
    assert_eq!(test.read_file(".missingtextrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run(test.command().arg("init"))?;

    test.write_file("config/locales/hash1/en.yml", "en:\n  title: Title\n")?;
    test.write_file("config/locales/hash1/fr.yml", "fr:\n  title: Titre\n")?;

    let output = run(&mut test.check_command())?;
    assert_eq!(
        output.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        output.stderr
    );

    Ok(())
}
