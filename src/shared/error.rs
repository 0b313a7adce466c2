use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let wrapper scripts tell a bad invocation apart from a
/// failing external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad input, unreadable root directory, I/O error, etc.)
    ApplicationError = 3,
    /// An external tool (nix-store, nix-diff) exited with a failure
    ExternalToolFailed = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an application error
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<HostOverviewError>() {
            Some(HostOverviewError::ExternalToolFailure { .. }) => ExitCode::ExternalToolFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::ExternalToolFailed => write!(f, "External Tool Failed (4)"),
        }
    }
}

/// Application-specific errors.
///
/// Only hard failures live here. Malformed per-record input (a broken fact
/// file, a garbled history line) is skipped and logged, never raised.
#[derive(Debug, Error)]
pub enum HostOverviewError {
    #[error("Invalid input: {input}\nReason: {reason}\n\n💡 Hint: Pass a path of the form /nix/store/<hash>-<name> (or <name>.drv for derivations) that exists on this machine")]
    InvalidInput { input: String, reason: String },

    #[error("External tool '{tool}' failed (exit code: {})\nOutput: {output}\n\n💡 Hint: Run the tool by hand to inspect the failure", exit_code_text(.exit_code))]
    ExternalToolFailure {
        tool: String,
        exit_code: Option<i32>,
        output: String,
    },

    #[error("Invalid root path: {path}\nReason: {reason}\n\n💡 Hint: Check --systems-path/--facts-path, the HO_* environment variables or the config file")]
    InvalidRootPath { path: PathBuf, reason: String },

    #[error("No history data for host: {host} ({path})\n\n💡 Hint: History logs live in <systems>/history/<hostname>")]
    HistoryNotFound { host: String, path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

fn exit_code_text(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}
