use anyhow::Result;

use crate::{CliTest, stderr, stdout};

fn legacy_project() -> Result<CliTest> {
    let test = CliTest::with_icons()?;
    for file in ["Entra.svg", "SAP_Fiori.svg", "tabler_home.svg", "Widget.svg"] {
        test.write_file(&format!("icons/m365/{}", file), file)?;
    }
    Ok(test)
}

#[test]
fn test_reorg_dry_run_prints_moves_only() -> Result<()> {
    let test = legacy_project()?;

    let output = test.reorg_command().arg("--dry-run").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "[dry-run] icons/m365/Entra.svg -> icons/microsoft-365/identity-and-access/Entra.svg\n\
         [dry-run] icons/m365/SAP_Fiori.svg -> icons/sap/legacy/SAP_Fiori.svg\n\
         [dry-run] icons/m365/Widget.svg -> icons/uncategorized/w/wi/Widget.svg\n\
         [dry-run] icons/m365/tabler_home.svg -> icons/ui/tabler/h/tabler_home.svg\n\
         Would move 4 files from icons/m365.\n\
         Run without --dry-run to move these files.\n"
    );
    assert!(test.root().join("icons/m365/Entra.svg").is_file());
    assert!(!test.root().join("icons/sap").exists());
    Ok(())
}

#[test]
fn test_reorg_moves_and_removes_legacy_folder() -> Result<()> {
    let test = legacy_project()?;

    let output = test.reorg_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Moved 4 files (0 skipped). Remaining legacy files: 0"));
    assert!(out.contains("Removed empty legacy folder icons/m365"));
    assert!(!test.root().join("icons/m365").exists());
    assert_eq!(
        test.read_file("icons/sap/legacy/SAP_Fiori.svg")?,
        "SAP_Fiori.svg"
    );
    assert!(test.root().join("icons/ui/tabler/h/tabler_home.svg").is_file());
    Ok(())
}

#[test]
fn test_reorg_never_overwrites() -> Result<()> {
    let test = legacy_project()?;
    test.write_file("icons/sap/legacy/SAP_Fiori.svg", "already here")?;

    let output = test.reorg_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Moved 3 files (1 skipped). Remaining legacy files: 1"));
    assert!(stderr(&output).contains("1 file skipped because the destination exists"));
    assert_eq!(
        test.read_file("icons/sap/legacy/SAP_Fiori.svg")?,
        "already here"
    );
    assert!(test.root().join("icons/m365/SAP_Fiori.svg").is_file());
    Ok(())
}

#[test]
fn test_reorg_without_legacy_folder_is_an_error() -> Result<()> {
    let test = CliTest::with_icons()?;

    let output = test.reorg_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Legacy folder not found"));
    Ok(())
}
