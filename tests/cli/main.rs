use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod build;
mod init;
mod reorg;
mod search;

const BIN_NAME: &str = "glyphs";

pub const WIDGET_SOURCE: &str = r#"import React from 'react';

const ALL_ICON_CATEGORIES = {
  "Cloud": {
    description: "Compute and hosting",
    library: "Azure",
    icons: ["vm.svg"]
  },
  'Identity & Access': {
    library: 'Microsoft 365',
    isNew: true,
    icons: ['Entra.svg', 'vm.svg'],
  },
};

export default function ProLogoManagerWidget() {
  return <div>{Object.keys(ALL_ICON_CATEGORIES).length}</div>;
}
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir_all(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with a config, the widget source and two icons.
    pub fn with_icons() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            ".glyphsrc.json",
            r#"{ "sourceCandidates": ["src/Widget.jsx"] }"#,
        )?;
        test.write_file("src/Widget.jsx", WIDGET_SOURCE)?;
        test.write_file("icons/microsoft-365/vm.svg", "0123456789")?;
        test.write_file("icons/ui/tabler/home.svg", "01234567890123456789")?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn build_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("build");
        cmd
    }

    pub fn reorg_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("reorg");
        cmd
    }

    pub fn search_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("search");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_json(&self, path: &str) -> Result<serde_json::Value> {
        let content = self.read_file(path)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
    Ok(())
}
