use super::tool_runner::run_tool;
use crate::application::dto::DiffColor;
use crate::ports::outbound::DerivationDiffer;
use crate::shared::Result;
use std::ffi::OsStr;
use std::path::Path;

pub const DEFAULT_NIX_DIFF_PROGRAM: &str = "nix-diff";

/// NixDiffCli adapter comparing derivations with `nix-diff --color <mode> <from> <to>`
pub struct NixDiffCli {
    program: String,
    color: DiffColor,
}

impl NixDiffCli {
    pub fn new(program: impl Into<String>, color: DiffColor) -> Self {
        Self {
            program: program.into(),
            color,
        }
    }
}

impl Default for NixDiffCli {
    fn default() -> Self {
        Self::new(DEFAULT_NIX_DIFF_PROGRAM, DiffColor::default())
    }
}

impl DerivationDiffer for NixDiffCli {
    fn diff(&self, from: &Path, to: &Path) -> Result<Vec<String>> {
        let args: [&OsStr; 4] = [
            OsStr::new("--color"),
            OsStr::new(self.color.as_arg()),
            from.as_os_str(),
            to.as_os_str(),
        ];
        let stdout = run_tool(&self.program, args)?;
        Ok(stdout.lines().map(str::to_string).collect())
    }
}
