use crate::shared::Result;

/// Vendor substring (compared case-insensitively) that marks a virtual machine
const VIRTUAL_VENDOR_MARKER: &str = "vmware";

/// Inventory facts reported by one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFact {
    host_name: String,
    uuid: String,
    vendor: String,
}

impl HostFact {
    /// Creates a host fact. A record without a host name is not a host.
    pub fn new(host_name: String, uuid: String, vendor: String) -> Result<Self> {
        if host_name.is_empty() {
            anyhow::bail!("Host fact has an empty hostName");
        }

        Ok(Self {
            host_name,
            uuid,
            vendor,
        })
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// True when the vendor string names VMware in any letter case
    pub fn is_virtual(&self) -> bool {
        self.vendor.to_lowercase().contains(VIRTUAL_VENDOR_MARKER)
    }
}
