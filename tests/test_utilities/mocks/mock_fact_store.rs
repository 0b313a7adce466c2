use hostoverview::fleet::domain::SwitchRecord;
use hostoverview::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory FactStoreReader that records which uuids were looked up
#[derive(Default, Clone)]
pub struct MockFactStore {
    hosts: Vec<HostFact>,
    discovery: HashMap<String, LinkDiscoveryRecord>,
    switches: Vec<SwitchRecord>,
    pub discovery_lookups: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockFactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, name: &str, uuid: &str, vendor: &str) -> Self {
        self.hosts.push(
            HostFact::new(name.to_string(), uuid.to_string(), vendor.to_string()).unwrap(),
        );
        self
    }

    pub fn with_discovery(mut self, uuid: &str, record: LinkDiscoveryRecord) -> Self {
        self.discovery.insert(uuid.to_string(), record);
        self
    }

    pub fn with_switch(mut self, switch: SwitchRecord) -> Self {
        self.switches.push(switch);
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.discovery_lookups.lock().unwrap().clone()
    }
}

impl FactStoreReader for MockFactStore {
    fn load_hosts(&self) -> Result<Vec<HostFact>> {
        Ok(self.hosts.clone())
    }

    fn load_discovery(&self, uuid: &str) -> Result<Option<LinkDiscoveryRecord>> {
        self.discovery_lookups.lock().unwrap().push(uuid.to_string());
        Ok(self.discovery.get(uuid).cloned())
    }

    fn load_switches(&self) -> Result<SwitchTable> {
        Ok(SwitchTable::build(self.switches.clone()))
    }
}
