use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .csweeprc.json"));

    let content = test.read_file(".csweeprc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for key in ["extensions", "ignores", "patterns", "recursive", "force", "language"] {
        assert!(parsed.get(key).is_some(), "Config should have '{key}' field");
    }
    assert_eq!(parsed["language"]["macroMark"], "#");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".csweeprc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: .csweeprc.json already exists"));
    assert_eq!(test.read_file(".csweeprc.json")?, "{}");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
