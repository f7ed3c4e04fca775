use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const MAIN_CPP: &str = r##"#include <vector>
#include "util.h"
using namespace std;

// entry point
typedef std::vector<int> IntList;

int main() {
    const char* s = "#include <not_real.h>";
    return 0;
}
"##;

#[test]
fn test_scan_lists_declarations() -> Result<()> {
    let test = CliTest::with_file("src/main.cpp", MAIN_CPP)?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("src/main.cpp\n  includes: vector, util.h\n  namespaces: std\n"));
    assert!(out.contains("  typedef: IntList = std::vector<int>\n"));
    assert!(!out.contains("not_real.h"));
    assert!(out.ends_with("Scanned 1 source file\n"));

    Ok(())
}

#[test]
fn test_scan_ignores_non_source_files() -> Result<()> {
    let test = CliTest::with_file("a.c", "#include <stdio.h>\n")?;
    test.write_file("notes.txt", "#include <nope.h>\n")?;

    let output = test.scan_command().output()?;

    assert!(stdout(&output).contains("Scanned 1 source file"));
    assert!(!stdout(&output).contains("nope.h"));

    Ok(())
}

#[test]
fn test_scan_aborts_on_malformed_file() -> Result<()> {
    let test = CliTest::with_file("bad.c", "int x;\n/* never closed\n")?;
    test.write_file("good.c", "#include <ok.h>\n")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("bad.c"));
    assert!(err.contains("unterminated block comment starting at offset 7"));

    Ok(())
}

#[test]
fn test_scan_keep_going_reports_and_fails() -> Result<()> {
    let test = CliTest::with_file("bad.c", "int x;\n/* never closed\n")?;
    test.write_file("good.c", "#include <ok.h>\n")?;

    let output = test.scan_command().arg("--keep-going").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: unterminated block comment starting at offset 7\n  --> "));
    assert!(out.contains("bad.c:2:1"));
    assert!(out.contains("good.c\n  includes: ok.h\n"));
    assert!(out.contains("Scanned 2 source files, 1 malformed"));

    Ok(())
}

#[test]
fn test_scan_json_format() -> Result<()> {
    let test = CliTest::with_file("lib.h", "#include <map>\nusing namespace std;\n")?;

    let output = test.scan_command().args(["--format", "json"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let value: Value = serde_json::from_str(&stdout(&output))?;
    let files = value.as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0]["path"].as_str().unwrap().ends_with("lib.h"));
    assert_eq!(files[0]["dependencies"], serde_json::json!(["map"]));
    assert_eq!(files[0]["namespaces"], serde_json::json!(["std"]));

    Ok(())
}

#[test]
fn test_scan_no_recursive() -> Result<()> {
    let test = CliTest::with_file("top.c", "#include <top.h>\n")?;
    test.write_file("sub/deep.c", "#include <deep.h>\n")?;

    let output = test.scan_command().arg("--no-recursive").output()?;
    let out = stdout(&output);

    assert!(out.contains("top.h"));
    assert!(!out.contains("deep.h"));

    Ok(())
}

#[test]
fn test_scan_respects_config_ignores_and_language() -> Result<()> {
    let test = CliTest::with_file(
        ".csweeprc.json",
        r#"{ "ignores": ["vendor"], "extensions": ["pp"], "language": { "macroMark": "%" } }"#,
    )?;
    test.write_file("vendor/x.pp", "%include <vendored.h>\n")?;
    test.write_file("main.pp", "%include <mine.h>\n")?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("includes: mine.h"));
    assert!(!out.contains("vendored.h"));

    Ok(())
}

#[test]
fn test_scan_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".csweeprc.json", r#"{ "patterns": ["[oops"] }"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern"));

    Ok(())
}

#[test]
fn test_scan_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("missing").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Not a directory"));

    Ok(())
}
