use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, WIDGET_SOURCE, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["iconsRoot", "outputDir", "marker", "sourceCandidates", "mode", "legacyDir"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["mode"], "scan");

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output).trim_end(), @"✓ Created .glyphsrc.json");
    assert!(test.root().join(".glyphsrc.json").exists());

    let content = test.read_file(".glyphsrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glyphsrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(stderr(&output).trim_end(), @"Error: .glyphsrc.json already exists");
    assert_eq!(test.read_file(".glyphsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file("src/Widget.jsx", WIDGET_SOURCE)?;
    test.write_file("icons/azure/vm.svg", "x")?;

    let output = test
        .build_command()
        .args(["--source", "src/Widget.jsx"])
        .output()?;
    assert!(
        output.status.success(),
        "Build should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("metadata/catalog.json").exists());

    Ok(())
}
