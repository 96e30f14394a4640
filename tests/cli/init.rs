use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const CONFIG_FILE: &str = ".glotextractrc.json";

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["functionName"], "_");
    assert_eq!(parsed["captureIndex"], 1);
    assert!(
        parsed.get("pattern").is_none(),
        "Config should not pin a custom pattern"
    );
    assert_eq!(
        parsed["ignoreDirs"],
        serde_json::json!([".*", "node_modules", "coverage"])
    );

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .glotextractrc.json\n");
    assert_eq!(stderr(&output), "");
    assert!(test.root().join(CONFIG_FILE).exists());

    let content = test.read_file(CONFIG_FILE)?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(CONFIG_FILE, "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "error: .glotextractrc.json already exists\n");
    assert_eq!(test.read_file(CONFIG_FILE)?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.js", "_('Hello')\n")?;

    let output = test.extract_command().arg("-v").output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("#: src/app.js:1\nmsgid \"Hello\"\n"));
    assert!(stderr(&output).contains("note: using .glotextractrc.json"));

    Ok(())
}
