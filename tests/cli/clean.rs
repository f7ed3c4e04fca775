use anyhow::Result;

use crate::{CliTest, run_with_stdin, stdout};

fn project_with_leftovers() -> Result<CliTest> {
    let test = CliTest::with_file("main.c", "int main() { return 0; }\n")?;
    test.write_file("build/main.o", "object")?;
    test.write_file("build/main.d", "deps")?;
    test.write_file("libfoo.a", "archive")?;
    Ok(test)
}

#[test]
fn test_clean_dry_run_by_default() -> Result<()> {
    let test = project_with_leftovers()?;

    let output = test.clean_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("Would remove:"));
    assert!(out.contains("main.o"));
    assert!(out.contains("Would remove 3 file(s)"));
    assert!(out.contains("Run with --apply"));
    assert!(test.exists("build/main.o"));
    assert!(test.exists("libfoo.a"));

    Ok(())
}

#[test]
fn test_clean_apply_declined_without_input() -> Result<()> {
    let test = project_with_leftovers()?;

    let output = test.clean_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Aborted, no files removed."));
    assert!(test.exists("build/main.o"));

    Ok(())
}

#[test]
fn test_clean_apply_confirmed() -> Result<()> {
    let test = project_with_leftovers()?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = run_with_stdin(cmd, "y\n")?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Removed 3 file(s), freed 17 B"));
    assert!(!test.exists("build/main.o"));
    assert!(!test.exists("build/main.d"));
    assert!(!test.exists("libfoo.a"));
    assert!(test.exists("main.c"));

    Ok(())
}

#[test]
fn test_clean_apply_force_skips_prompt() -> Result<()> {
    let test = project_with_leftovers()?;

    let output = test.clean_command().args(["--apply", "--force"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Removed 3 file(s)"));
    assert!(!test.exists("libfoo.a"));

    Ok(())
}

#[test]
fn test_clean_force_from_config() -> Result<()> {
    let test = project_with_leftovers()?;
    test.write_file(".csweeprc.json", r#"{ "force": true }"#)?;

    let output = test.clean_command().arg("--apply").output()?;

    assert!(stdout(&output).contains("Removed 3 file(s)"));
    assert!(!test.exists("build/main.o"));

    Ok(())
}

#[test]
fn test_clean_pattern_overrides_config() -> Result<()> {
    let test = project_with_leftovers()?;

    let output = test
        .clean_command()
        .args(["--apply", "--force", "--pattern", "*.d"])
        .output()?;

    assert!(stdout(&output).contains("Removed 1 file(s)"));
    assert!(!test.exists("build/main.d"));
    assert!(test.exists("build/main.o"));

    Ok(())
}

#[test]
fn test_clean_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file("main.c", "int main;\n")?;

    let output = test.clean_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No files to clean"));

    Ok(())
}
