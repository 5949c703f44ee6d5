use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

const EN: &str = "\
en:
  obj1: gravy
  obj2: made often from the juices that run naturally from meat or vegetables during cooking
  obj3:
    obj31: sauce
    obj32: the term can refer to a wider variety of sauces
";

const FR: &str = "\
fr:
  obj1: sauce
  obj3:
    obj31: sauce
";

#[test]
fn test_missing_entries() -> Result<()> {
    let test = CliTest::with_locales(&[("hash1/en.yml", EN), ("hash1/fr.yml", FR)])?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    let stdout = output.stdout;
    assert!(stdout.contains("In ./config/locales/hash1 the following entries are missing:"));
    assert!(stdout.contains("error: \"obj2\"  missing-translation"));
    assert!(stdout.contains("error: \"obj3.obj32\"  missing-translation"));
    assert!(stdout.contains("  --> ./config/locales/hash1/en.yml"));
    assert!(stdout.contains(
        "  = note: (\"the term can refer to a wider variety of sauces\") missing in: fr"
    ));
    assert!(stdout.contains("\u{2718} 2 problems (2 errors, 0 warnings)"));
    // obj2 is reported before obj3.obj32, following the base file.
    assert!(stdout.find("\"obj2\"") < stdout.find("\"obj3.obj32\""));

    Ok(())
}

#[test]
fn test_no_missing_entries() -> Result<()> {
    let en = FR.replace("fr:", "en:");
    let test = CliTest::with_locales(&[("hash1/en.yml", en.as_str()), ("hash1/fr.yml", FR)])?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(
        output.stdout.trim_end(),
        @"✓ Checked 1 directory, 2 locale files - no missing translations"
    );

    Ok(())
}

#[test]
fn test_direct_locale_files_with_three_languages() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"a": "A", "b": "B", "c": {"d": "D"}}"#),
        ("fr.json", r#"{"a": "A", "c": {"d": "D"}}"#),
        ("es.json", r#"{"a": "A", "e": "E"}"#),
    ])?;

    let output = run(test.check_command().args(["--locale-root", "config/locales"]))?;

    assert_eq!(output.code, Some(1));
    let stdout = output.stdout;
    assert!(stdout.contains("In config/locales the following entries are missing:"));
    assert!(stdout.contains("  = note: (\"B\") missing in: es, fr"));
    assert!(stdout.contains("  = note: (\"D\") missing in: es"));
    assert!(stdout.contains("  = note: (\"E\") missing in: en, fr"));
    // fr has c.d, es does not.
    assert_eq!(stdout.matches("(\"D\") missing in: es").count(), 2);
    assert!(stdout.contains("\u{2718} 4 problems (4 errors, 0 warnings)"));

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_locales(&[("hash1/en.yml", EN), ("hash1/fr.yml", FR)])?;

    let output = run(test.check_command().args(["--format", "json"]))?;

    assert_eq!(output.code, Some(1));
    let json: Value = serde_json::from_str(&output.stdout)?;
    assert!(json["runId"].is_string());
    assert!(json["startedAt"].is_string());

    let batch = &json["batches"][0];
    assert_eq!(batch["directory"], "hash1");
    assert_eq!(batch["status"], "complete");
    let codes: Vec<&str> = batch["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["localeCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["obj2", "obj3.obj32"]);
    assert_eq!(
        batch["records"][0]["baseString"],
        "made often from the juices that run naturally from meat or vegetables during cooking"
    );

    Ok(())
}

#[test]
fn test_lenient_skips_malformed_file() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("hash1/en.yml", FR.replace("fr:", "en:").as_str()),
        ("hash1/fr.yml", FR),
        ("hash1/es.yml", "es:\n  obj1: [unclosed\n"),
    ])?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Failed to parse locale file\"  load-failure"));
    assert!(output.stdout.contains("  --> ./config/locales/hash1/es.yml"));
    assert!(output.stdout.contains("\u{2718} 1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_strict_aborts_on_malformed_file() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("hash1/en.yml", EN),
        ("hash1/es.yml", "es:\n  obj1: [unclosed\n"),
    ])?;

    let output = run(test.check_command().arg("--strict"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Failed to parse locale file"));
    assert!(output.stderr.contains("es.yml"));

    Ok(())
}

#[test]
fn test_unsupported_file_is_a_warning() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("hash1/en.yml", EN),
        ("hash1/fr.yml", FR),
        ("hash1/es.rb", "{ es: {} }"),
    ])?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("warning: \"Unsupported locale file\"  unsupported-format"));
    assert!(output.stdout.contains("\u{2718} 3 problems (2 errors, 1 warning)"));

    let strict = run(test.check_command().arg("--strict"))?;
    assert_eq!(strict.code, Some(2));
    assert!(strict.stderr.contains("Unsupported locale file"));

    Ok(())
}

#[test]
fn test_single_language_directory() -> Result<()> {
    let test = CliTest::with_locales(&[("hash1/en.yml", EN)])?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(
        "note: ./config/locales/hash1 has fewer than two locale files, nothing to compare"
    ));

    Ok(())
}

#[test]
fn test_skip_patterns_and_directories_from_config() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("hash1/en.yml", FR.replace("fr:", "en:").as_str()),
        ("hash1/fr.yml", FR),
        ("hash1/de.yml", "de:\n  other: value\n"),
        ("vendor/en.yml", EN),
        ("vendor/fr.yml", FR),
    ])?;
    test.write_file(
        ".missingtextrc.json",
        r#"{ "skipPatterns": ["^de\\."], "skipDirectories": ["vendor"] }"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(output.stdout.contains("Checked 1 directory, 2 locale files"));

    Ok(())
}

#[test]
fn test_all_files_skipped_by_pattern() -> Result<()> {
    let test = CliTest::with_locales(&[("hash1/en.yml", EN), ("hash1/fr.yml", FR)])?;
    test.write_file(".missingtextrc.json", r#"{ "skipPatterns": ["\\.yml$"] }"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"No files for parsing\"  no-files"));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_locales(&[("hash1/en.yml", EN)])?;
    test.write_file(".missingtextrc.json", r#"{ "skipPatterns": ["("] }"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("skipPatterns"));

    Ok(())
}

#[test]
fn test_missing_locale_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("does not exist"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("check"));

    Ok(())
}

#[test]
fn test_missing_entry_points_at_file_that_loaded() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("hash1/en.json", "{ broken"),
        ("hash1/en.yml", "en:\n  a: A\n  b: B\n"),
        ("hash1/fr.yml", "fr:\n  a: A\n"),
    ])?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    let lines: Vec<&str> = output.stdout.lines().collect();
    let error_at = lines
        .iter()
        .position(|line| line.starts_with("error: \"b\""))
        .expect("missing entry for b");
    assert_eq!(lines[error_at + 1], "  --> ./config/locales/hash1/en.yml");
    assert!(output.stdout.contains("  --> ./config/locales/hash1/en.json"));
    assert!(output.stdout.contains("\u{2718} 2 problems (1 error, 1 warning)"));

    Ok(())
}

#[test]
fn test_yaml_merge_keys_count_as_present() -> Result<()> {
    let test = CliTest::with_locales(&[
        (
            "hash1/en.yml",
            "en:\n  defaults: &defaults\n    save: Save\n  form:\n    <<: *defaults\n    title: Title\n",
        ),
        (
            "hash1/fr.yml",
            "fr:\n  defaults:\n    save: Enregistrer\n  form:\n    save: Enregistrer\n    title: Titre\n",
        ),
    ])?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(!output.stdout.contains("<<"));

    Ok(())
}

#[test]
fn test_key_containing_separator_is_not_compared() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("hash1/en.json", r#"{"a.b": "flat"}"#),
        ("hash1/fr.json", r#"{"a": {"b": "nested"}}"#),
    ])?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Failed to parse locale file\"  load-failure"));
    assert!(output.stdout.contains("key 'a.b'"));
    assert!(!output.stdout.contains("missing in:"));

    let strict = run(test.check_command().arg("--strict"))?;
    assert_eq!(strict.code, Some(2));
    assert!(strict.stderr.contains("key 'a.b'"));

    Ok(())
}
