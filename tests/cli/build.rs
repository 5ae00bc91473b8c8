use std::collections::HashSet;

use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, WIDGET_SOURCE, stderr, stdout};

fn icon<'a>(catalog: &'a Value, file_name: &str) -> &'a Value {
    catalog["icons"]
        .as_array()
        .and_then(|icons| icons.iter().find(|i| i["fileName"] == file_name))
        .unwrap_or_else(|| panic!("{} missing from catalog", file_name))
}

#[test]
fn test_build_generates_catalog() -> Result<()> {
    let test = CliTest::with_icons()?;

    let output = test.build_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output).trim_end(), @"Generated 2 icon entries across 2 categories.");

    let catalog = test.read_json("metadata/catalog.json")?;
    assert_eq!(catalog["version"], 2);
    assert_eq!(catalog["source"], "Widget.jsx");
    assert_eq!(catalog["totalIcons"], 2);

    let vm = icon(&catalog, "vm.svg");
    assert_eq!(vm["id"], "microsoft-365/vm.svg");
    assert_eq!(vm["category"], "Cloud");
    assert_eq!(vm["library"], "Azure");
    assert_eq!(vm["description"], "Compute and hosting");
    assert_eq!(vm["sizeBytes"], 10);
    assert_eq!(vm["style"], "flat");

    let home = icon(&catalog, "home.svg");
    assert_eq!(home["collection"], "ui");
    assert_eq!(home["uiSet"], "tabler");
    assert_eq!(home["style"], "line");
    assert_eq!(home["sizeBytes"], 20);

    let categories = test.read_json("metadata/categories.json")?;
    assert_eq!(categories["totalCategories"], 2);
    let counts: Vec<(String, u64)> = categories["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["id"].as_str().unwrap().to_string(), c["iconCount"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("microsoft-365-cloud".to_string(), 1),
            ("ui-tabler".to_string(), 1)
        ]
    );

    Ok(())
}

#[test]
fn test_build_output_is_pretty_json_with_newline() -> Result<()> {
    let test = CliTest::with_icons()?;
    test.build_command().output()?;

    let content = test.read_file("metadata/catalog.json")?;
    assert!(content.starts_with("{\n  \"version\": 2,"));
    assert!(content.ends_with("}\n"));
    Ok(())
}

#[test]
fn test_rebuild_only_changes_timestamp() -> Result<()> {
    let test = CliTest::with_icons()?;

    test.build_command().output()?;
    let mut first = test.read_json("metadata/catalog.json")?;
    test.build_command().output()?;
    let mut second = test.read_json("metadata/catalog.json")?;

    first["generatedAt"] = Value::Null;
    second["generatedAt"] = Value::Null;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_catalog_paths_are_unique_and_sorted() -> Result<()> {
    let test = CliTest::with_icons()?;
    test.write_file("icons/ui/tabler/Arrow_Filled.SVG", "x")?;
    test.write_file("icons/azure/compute/disk.png", "x")?;
    test.write_file("icons/.DS_Store", "x")?;

    let output = test.build_command().output()?;
    assert!(output.status.success());

    let catalog = test.read_json("metadata/catalog.json")?;
    let paths: Vec<&str> = catalog["icons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["path"].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec![
            "azure/compute/disk.png",
            "microsoft-365/vm.svg",
            "ui/tabler/Arrow_Filled.SVG",
            "ui/tabler/home.svg",
        ]
    );
    let unique: HashSet<&&str> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len());

    let arrow = icon(&catalog, "Arrow_Filled.SVG");
    assert_eq!(arrow["extension"], "svg");
    assert_eq!(arrow["style"], "filled");
    Ok(())
}

#[test]
fn test_collisions_reported_in_verbose_mode() -> Result<()> {
    let test = CliTest::with_icons()?;

    let quiet = test.build_command().output()?;
    assert!(stderr(&quiet).contains("1 file name listed by more than one category"));

    let verbose = test.build_command().arg("-v").output()?;
    assert!(
        stderr(&verbose).contains(
            "warning: \"vm.svg\" is listed by \"Cloud\" and \"Identity & Access\"; keeping \"Cloud\""
        ),
        "stderr: {}",
        stderr(&verbose)
    );
    Ok(())
}

#[test]
fn test_declared_mode() -> Result<()> {
    let test = CliTest::with_icons()?;
    test.write_file("icons/azure/cloud/vm.svg", "0123456789")?;

    let output = test.build_command().args(["--mode", "declared"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Generated 3 icon entries across 2 categories."));
    assert!(stderr(&output).contains("2 icons declared but not found on disk"));

    let catalog = test.read_json("metadata/catalog.json")?;
    let vm = &catalog["icons"][0];
    assert_eq!(vm["path"], "azure/cloud/vm.svg");
    assert_eq!(vm["exists"], true);
    assert_eq!(vm["folder"], "azure/cloud");

    let categories = test.read_json("metadata/categories.json")?;
    let identity = categories["categories"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Identity & Access")
        .unwrap();
    assert_eq!(identity["isNew"], true);
    assert_eq!(identity["iconCount"], 2);
    assert_eq!(identity["existingCount"], 0);
    Ok(())
}

#[test]
fn test_source_from_environment() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("elsewhere/Widget.jsx", WIDGET_SOURCE)?;
    test.write_file("icons/microsoft-365/vm.svg", "x")?;

    let output = test
        .build_command()
        .env("GLYPHS_SOURCE", test.root().join("elsewhere/Widget.jsx"))
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Generated 1 icon entries across 1 categories."));
    Ok(())
}

#[test]
fn test_source_flag_and_output_dir() -> Result<()> {
    let test = CliTest::with_icons()?;
    test.write_file("other/Alt.jsx", WIDGET_SOURCE)?;

    let output = test
        .build_command()
        .args(["--source", "other/Alt.jsx", "--output-dir", "dist/meta"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let catalog = test.read_json("dist/meta/catalog.json")?;
    assert_eq!(catalog["source"], "Alt.jsx");
    assert!(!test.root().join("metadata").exists());
    Ok(())
}

#[test]
fn test_missing_source_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glyphsrc.json",
        r#"{ "sourceCandidates": ["missing/Widget.jsx"] }"#,
    )?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error: "));
    assert!(err.contains("missing/Widget.jsx"));
    assert!(err.contains("GLYPHS_SOURCE"));
    Ok(())
}

#[test]
fn test_missing_marker_is_an_error() -> Result<()> {
    let test = CliTest::with_icons()?;
    test.write_file("src/Widget.jsx", "export const OTHER = {};")?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Could not find `const ALL_ICON_CATEGORIES`"));
    assert!(!test.root().join("metadata/catalog.json").exists());
    Ok(())
}

#[test]
fn test_unbalanced_literal_is_an_error() -> Result<()> {
    let test = CliTest::with_icons()?;
    test.write_file(
        "src/Widget.jsx",
        "const ALL_ICON_CATEGORIES = { \"Cloud\": { icons: [] }",
    )?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Malformed literal"));
    Ok(())
}

#[test]
fn test_missing_icons_root_keeps_previous_outputs() -> Result<()> {
    let test = CliTest::with_icons()?;
    test.write_file("metadata/catalog.json", r#"{"icons":["previous"]}"#)?;
    test.write_file("metadata/categories.json", r#"{"categories":["previous"]}"#)?;

    let output = test
        .build_command()
        .args(["--icons-root", "typo"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Icon root not found"), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert_eq!(test.read_file("metadata/catalog.json")?, r#"{"icons":["previous"]}"#);
    assert_eq!(
        test.read_file("metadata/categories.json")?,
        r#"{"categories":["previous"]}"#
    );
    Ok(())
}

#[test]
fn test_missing_icons_root_fails_in_declared_mode() -> Result<()> {
    let test = CliTest::with_icons()?;

    let output = test
        .build_command()
        .args(["--mode", "declared", "--icons-root", "typo"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("metadata/catalog.json").exists());
    Ok(())
}
