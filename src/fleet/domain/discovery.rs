/// Identifier type tag naming a chassis MAC address
pub const MAC_IDENTIFIER: &str = "mac";

/// Identifier type tag naming a port interface name
pub const IFNAME_IDENTIFIER: &str = "ifname";

/// One `{type, value}` identifier from a link-layer discovery record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    kind: String,
    value: String,
}

impl Identifier {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The nearest-neighbour LLDP observation for a host's uplink
///
/// Either identifier set may be absent. When a set holds several identifiers
/// of the wanted type, the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDiscoveryRecord {
    chassis_ids: Option<Vec<Identifier>>,
    port_ids: Option<Vec<Identifier>>,
}

impl LinkDiscoveryRecord {
    pub fn new(chassis_ids: Option<Vec<Identifier>>, port_ids: Option<Vec<Identifier>>) -> Self {
        Self {
            chassis_ids,
            port_ids,
        }
    }

    /// MAC address of the neighbouring switch chassis
    pub fn chassis_mac(&self) -> Option<&str> {
        Self::last_of_kind(self.chassis_ids.as_deref(), MAC_IDENTIFIER)
    }

    /// Interface name of the switch port the host is plugged into
    pub fn port_name(&self) -> Option<&str> {
        Self::last_of_kind(self.port_ids.as_deref(), IFNAME_IDENTIFIER)
    }

    fn last_of_kind<'a>(ids: Option<&'a [Identifier]>, kind: &str) -> Option<&'a str> {
        ids?.iter()
            .filter(|id| id.kind == kind)
            .last()
            .map(|id| id.value.as_str())
    }
}
