use anyhow::Result;

use crate::{CliTest, stderr, stdout};

fn built() -> Result<CliTest> {
    let test = CliTest::with_icons()?;
    test.write_file("icons/microsoft-365/Teams_24.svg", "x")?;
    test.write_file("icons/microsoft-365/Teams_48.svg", "x")?;
    test.write_file("icons/azure/photo.webp", "x")?;
    let output = test.build_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    Ok(test)
}

#[test]
fn test_search_without_catalog_fails_with_hint() -> Result<()> {
    let test = CliTest::with_icons()?;

    let output = test.search_command().arg("vm").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Run `glyphs build` first"));
    Ok(())
}

#[test]
fn test_search_matches_every_term() -> Result<()> {
    let test = built()?;

    let output = test.search_command().args(["azure", "vm"]).output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("microsoft-365/vm.svg"), "stdout: {}", out);
    assert!(out.contains("Microsoft 365 / Cloud"));
    assert!(out.contains("Showing 1-1 of 1 matching icons (5 in catalog)"));
    Ok(())
}

#[test]
fn test_search_no_match_is_not_a_failure() -> Result<()> {
    let test = built()?;

    let output = test.search_command().arg("nonexistent").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No icons match the current filters."));
    Ok(())
}

#[test]
fn test_search_shows_size_family() -> Result<()> {
    let test = built()?;

    let output = test.search_command().arg("teams").output()?;

    let out = stdout(&output);
    assert!(out.contains("Sizes: 24 / 48"), "stdout: {}", out);
    assert!(out.contains("Variants: 2"));
    Ok(())
}

#[test]
fn test_search_extension_and_collection_filters() -> Result<()> {
    let test = built()?;

    let default_ext = test.search_command().arg("photo").output()?;
    assert!(stdout(&default_ext).contains("No icons match"));

    let webp = test
        .search_command()
        .args(["--ext", "webp", "--collection", "azure"])
        .output()?;
    let out = stdout(&webp);
    assert!(out.contains("azure/photo.webp"), "stdout: {}", out);
    assert!(out.contains("of 1 matching icons"));
    Ok(())
}

#[test]
fn test_search_page_past_end() -> Result<()> {
    let test = built()?;

    let output = test.search_command().args(["--page", "3"]).output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Page 3 is past the end"));
    Ok(())
}
