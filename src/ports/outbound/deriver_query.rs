use crate::fleet::domain::StorePath;
use crate::shared::Result;
use std::path::PathBuf;

/// DeriverQuery port mapping a system path to the derivation that built it
pub trait DeriverQuery {
    /// Resolves the `.drv` file that produced `system`
    ///
    /// # Errors
    /// Returns `HostOverviewError::ExternalToolFailure` when the query tool
    /// cannot be run or exits unsuccessfully.
    fn query_deriver(&self, system: &StorePath) -> Result<PathBuf>;
}
