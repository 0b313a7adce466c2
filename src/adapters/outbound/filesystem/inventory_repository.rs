use super::directory_scan::sorted_files;
use crate::ports::outbound::{GroupSource, InventorySource};
use crate::shared::error::HostOverviewError;
use crate::shared::security::{read_text_file, validate_directory};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// File name of the deployment ledger inside the systems root
pub const LEDGER_FILE: &str = "db.csv";

/// Directory holding one history log per host
pub const HISTORY_DIR: &str = "history";

/// FileSystemInventory adapter reading the systems repository
///
/// Every regular file in the systems root other than the ledger is a
/// candidate host-group file, named after the file.
pub struct FileSystemInventory {
    systems_root: PathBuf,
}

impl FileSystemInventory {
    pub fn new(systems_root: PathBuf) -> Self {
        Self { systems_root }
    }

    fn validate_root(&self) -> Result<()> {
        validate_directory(&self.systems_root, "Systems root").map_err(|e| {
            HostOverviewError::InvalidRootPath {
                path: self.systems_root.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn read_lines(path: &Path, description: &str) -> Result<Vec<String>> {
    let content = read_text_file(path, description).map_err(|e| HostOverviewError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// A host name is joined onto the history directory, so it must be a plain
/// file name
fn validate_host_name(host_name: &str) -> Result<()> {
    let is_plain = !host_name.is_empty()
        && host_name != "."
        && host_name != ".."
        && !host_name.contains(['/', '\\', '\0']);
    if !is_plain {
        return Err(HostOverviewError::InvalidInput {
            input: host_name.to_string(),
            reason: "invalid host name".to_string(),
        }
        .into());
    }
    Ok(())
}

impl InventorySource for FileSystemInventory {
    fn ledger_lines(&self) -> Result<Vec<String>> {
        self.validate_root()?;

        let ledger = self.systems_root.join(LEDGER_FILE);
        if !ledger.is_file() {
            tracing::warn!(path = %ledger.display(), "no deployment ledger, revisions will show as unknown");
            return Ok(Vec::new());
        }
        match read_lines(&ledger, "deployment ledger") {
            Ok(lines) => Ok(lines),
            Err(e) => {
                tracing::warn!(path = %ledger.display(), error = %e, "unreadable deployment ledger, revisions will show as unknown");
                Ok(Vec::new())
            }
        }
    }

    fn group_sources(&self) -> Result<Vec<GroupSource>> {
        self.validate_root()?;

        let files = sorted_files(&self.systems_root).map_err(|e| HostOverviewError::FileReadError {
            path: self.systems_root.clone(),
            details: e.to_string(),
        })?;

        let sources = files
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?.to_string();
                if name == LEDGER_FILE {
                    return None;
                }
                match read_lines(&path, "host group file") {
                    Ok(lines) => Some(GroupSource::new(name, lines)),
                    Err(e) => {
                        tracing::warn!(file = %path.display(), error = %e, "skipping unreadable host group file");
                        None
                    }
                }
            })
            .collect();
        Ok(sources)
    }

    fn history_lines(&self, host_name: &str) -> Result<Vec<String>> {
        validate_host_name(host_name)?;
        self.validate_root()?;

        let path = self.systems_root.join(HISTORY_DIR).join(host_name);
        if !path.is_file() {
            return Err(HostOverviewError::HistoryNotFound {
                host: host_name.to_string(),
                path,
            }
            .into());
        }
        read_lines(&path, "history log")
    }
}
