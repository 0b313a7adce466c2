use super::tool_runner::run_tool;
use crate::fleet::domain::StorePath;
use crate::ports::outbound::DeriverQuery;
use crate::shared::error::HostOverviewError;
use crate::shared::Result;
use std::path::PathBuf;

pub const DEFAULT_NIX_STORE_PROGRAM: &str = "nix-store";

/// Printed by nix-store for paths it has no deriver recorded for
const UNKNOWN_DERIVER: &str = "unknown-deriver";

/// NixStoreCli adapter answering deriver queries with `nix-store --query --deriver`
pub struct NixStoreCli {
    program: String,
}

impl NixStoreCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NixStoreCli {
    fn default() -> Self {
        Self::new(DEFAULT_NIX_STORE_PROGRAM)
    }
}

impl DeriverQuery for NixStoreCli {
    fn query_deriver(&self, system: &StorePath) -> Result<PathBuf> {
        let stdout = run_tool(
            &self.program,
            ["--query", "--deriver", system.as_str()],
        )?;

        // the answer is the last line printed
        match stdout.lines().map(str::trim).rev().find(|l| !l.is_empty()) {
            Some(deriver) if deriver != UNKNOWN_DERIVER => Ok(PathBuf::from(deriver)),
            _ => Err(HostOverviewError::ExternalToolFailure {
                tool: self.program.clone(),
                exit_code: Some(0),
                output: format!("no deriver known for {}", system.as_str()),
            }
            .into()),
        }
    }
}
