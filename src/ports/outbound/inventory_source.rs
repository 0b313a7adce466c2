use crate::shared::Result;

/// Raw lines of one host-group file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSource {
    pub name: String,
    pub lines: Vec<String>,
}

impl GroupSource {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }
}

/// InventorySource port for the systems repository
///
/// The systems repository holds the deployment ledger, the host-group
/// files and one history log per host. This port hands out their raw
/// lines; parsing belongs to the fleet services.
pub trait InventorySource {
    /// Reads the deployment ledger lines in file order
    ///
    /// A missing ledger reads as empty.
    fn ledger_lines(&self) -> Result<Vec<String>>;

    /// Reads every candidate host-group file, sorted by file name
    fn group_sources(&self) -> Result<Vec<GroupSource>>;

    /// Reads the history log of one host
    ///
    /// # Errors
    /// Returns `HostOverviewError::HistoryNotFound` when the host has no
    /// readable history log.
    fn history_lines(&self, host_name: &str) -> Result<Vec<String>>;
}
