use crate::fleet::domain::{HostFact, LinkDiscoveryRecord, LocationLabel, SwitchTable};

/// LocationResolver service for placing a host in the datacenter
///
/// A switch usually pins down the location on its own. Aggregation switches
/// that serve several locations carry port-name rules instead.
pub struct LocationResolver;

impl LocationResolver {
    /// Resolves the location label of one host
    ///
    /// # Arguments
    /// * `host` - Inventory facts of the host
    /// * `discovery` - The host's LLDP record, if one was found
    /// * `switches` - MAC-indexed switch table
    ///
    /// # Returns
    /// `Virtual` for VMware guests, `Known` when the switch (or one of its port
    /// rules) names a location, `Unknown` otherwise
    pub fn resolve(
        host: &HostFact,
        discovery: Option<&LinkDiscoveryRecord>,
        switches: &SwitchTable,
    ) -> LocationLabel {
        if host.is_virtual() {
            return LocationLabel::Virtual;
        }

        let Some(discovery) = discovery else {
            return LocationLabel::Unknown;
        };
        let Some(switch) = discovery.chassis_mac().and_then(|mac| switches.lookup(mac)) else {
            return LocationLabel::Unknown;
        };

        if let Some(location) = switch.location() {
            return LocationLabel::Known(location.clone());
        }

        let Some(port) = discovery.port_name() else {
            return LocationLabel::Unknown;
        };

        // every matching rule overwrites the previous pick
        switch
            .port_match()
            .iter()
            .filter(|rule| rule.matches(port))
            .filter_map(|rule| rule.location())
            .last()
            .map_or(LocationLabel::Unknown, |location| {
                LocationLabel::Known(location.clone())
            })
    }
}
