use crate::fleet::domain::{HostFact, LinkDiscoveryRecord, SwitchTable};
use crate::shared::Result;

/// FactStoreReader port for the collected host, LLDP and switch facts
///
/// Implementations scan one collection per call and skip any record that
/// cannot be read or parsed. Only failures that make the whole collection
/// unusable are returned as errors.
pub trait FactStoreReader {
    /// Loads every host inventory record, in scan order
    ///
    /// Records with an empty host name are discarded.
    fn load_hosts(&self) -> Result<Vec<HostFact>>;

    /// Loads the link-layer discovery record observed for a host uuid
    ///
    /// # Returns
    /// `None` when no readable record exists for the uuid
    fn load_discovery(&self, uuid: &str) -> Result<Option<LinkDiscoveryRecord>>;

    /// Loads all switch records and indexes them by MAC address
    ///
    /// When two switches claim one MAC, the one scanned last owns it.
    fn load_switches(&self) -> Result<SwitchTable>;
}
