use crate::shared::Result;
use std::path::Path;

/// DerivationDiffer port comparing two derivations
pub trait DerivationDiffer {
    /// Runs the diff tool once and returns its output lines
    ///
    /// # Errors
    /// Returns `HostOverviewError::ExternalToolFailure` carrying the exit
    /// code and captured output when the tool fails.
    fn diff(&self, from: &Path, to: &Path) -> Result<Vec<String>>;
}
