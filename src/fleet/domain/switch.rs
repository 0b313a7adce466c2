use super::location::Location;
use std::collections::HashMap;

/// A port-name substring rule on a shared switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRule {
    pattern: String,
    location: Option<Location>,
}

impl PortRule {
    pub fn new(pattern: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            pattern: pattern.into(),
            location,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Case-insensitive substring test against a port name
    pub fn matches(&self, port_name: &str) -> bool {
        port_name
            .to_lowercase()
            .contains(&self.pattern.to_lowercase())
    }
}

/// A switch and the ways it can answer location queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRecord {
    name: String,
    macs: Vec<String>,
    location: Option<Location>,
    port_match: Vec<PortRule>,
}

impl SwitchRecord {
    /// `port_match` keeps the order the rules were written in.
    pub fn new(
        name: impl Into<String>,
        macs: Vec<String>,
        location: Option<Location>,
        port_match: Vec<PortRule>,
    ) -> Self {
        Self {
            name: name.into(),
            macs,
            location,
            port_match,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn macs(&self) -> &[String] {
        &self.macs
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn port_match(&self) -> &[PortRule] {
        &self.port_match
    }
}

/// Immutable MAC -> switch index
///
/// Built in one pass over the switches in scan order. When two switches
/// claim the same MAC, the one scanned later owns it.
#[derive(Debug, Clone, Default)]
pub struct SwitchTable {
    switches: Vec<SwitchRecord>,
    by_mac: HashMap<String, usize>,
}

impl SwitchTable {
    pub fn build(switches: Vec<SwitchRecord>) -> Self {
        let by_mac = switches
            .iter()
            .enumerate()
            .flat_map(|(idx, switch)| switch.macs.iter().map(move |mac| (mac.clone(), idx)))
            .fold(HashMap::new(), |mut index, (mac, idx)| {
                index.insert(mac, idx);
                index
            });

        Self { switches, by_mac }
    }

    pub fn lookup(&self, mac: &str) -> Option<&SwitchRecord> {
        self.by_mac.get(mac).map(|&idx| &self.switches[idx])
    }

    /// Number of switch records scanned
    pub fn switch_count(&self) -> usize {
        self.switches.len()
    }

    /// Number of distinct MAC addresses indexed
    pub fn mac_count(&self) -> usize {
        self.by_mac.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_mac.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch(name: &str, macs: &[&str]) -> SwitchRecord {
        SwitchRecord::new(
            name,
            macs.iter().map(|m| m.to_string()).collect(),
            Some(Location::new(name, "1")),
            vec![],
        )
    }

    #[test]
    fn test_every_mac_is_indexed() {
        let table = SwitchTable::build(vec![switch("sw1", &["aa", "bb"]), switch("sw2", &["cc"])]);
        assert_eq!(table.lookup("aa").map(SwitchRecord::name), Some("sw1"));
        assert_eq!(table.lookup("bb").map(SwitchRecord::name), Some("sw1"));
        assert_eq!(table.lookup("cc").map(SwitchRecord::name), Some("sw2"));
        assert!(table.lookup("dd").is_none());
        assert_eq!(table.switch_count(), 2);
        assert_eq!(table.mac_count(), 3);
    }

    #[test]
    fn test_shared_mac_resolves_to_last_scanned() {
        let table = SwitchTable::build(vec![switch("sw1", &["aa"]), switch("sw2", &["aa"])]);
        assert_eq!(table.lookup("aa").map(SwitchRecord::name), Some("sw2"));

        let reversed = SwitchTable::build(vec![switch("sw2", &["aa"]), switch("sw1", &["aa"])]);
        assert_eq!(reversed.lookup("aa").map(SwitchRecord::name), Some("sw1"));
    }

    #[test]
    fn test_port_rule_matches_case_insensitive_substring() {
        let rule = PortRule::new("eth1/", None);
        assert!(rule.matches("Eth1/17"));
        assert!(rule.matches("ETH1/2"));
        assert!(!rule.matches("Eth2/1"));
    }

    #[test]
    fn test_empty_table() {
        let table = SwitchTable::build(vec![]);
        assert!(table.is_empty());
        assert!(table.lookup("aa").is_none());
    }
}
