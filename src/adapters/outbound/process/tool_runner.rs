use crate::shared::error::HostOverviewError;
use crate::shared::Result;
use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// Runs an external tool to completion and returns its stdout
///
/// A tool that cannot be spawned or exits unsuccessfully becomes
/// `HostOverviewError::ExternalToolFailure` carrying the exit code (none
/// when killed by a signal or never started) and the captured output.
pub fn run_tool<I, S>(program: &str, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::null());
    tracing::debug!(command = ?command, "running external tool");

    let output = command
        .output()
        .map_err(|e| HostOverviewError::ExternalToolFailure {
            tool: program.to_string(),
            exit_code: None,
            output: format!("failed to start: {}", e),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let captured = [stdout.trim(), stderr.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        return Err(HostOverviewError::ExternalToolFailure {
            tool: program.to_string(),
            exit_code: output.status.code(),
            output: captured,
        }
        .into());
    }

    Ok(stdout)
}
