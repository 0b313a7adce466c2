use hostoverview::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory InventorySource
#[derive(Default, Clone)]
pub struct MockInventorySource {
    ledger: Vec<String>,
    groups: Vec<GroupSource>,
    histories: HashMap<String, Vec<String>>,
}

#[allow(dead_code)]
impl MockInventorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(mut self, lines: &[&str]) -> Self {
        self.ledger = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn with_group(mut self, name: &str, content: &str) -> Self {
        self.groups.push(GroupSource::new(
            name,
            content.lines().map(str::to_string).collect(),
        ));
        self
    }

    pub fn with_history(mut self, host: &str, lines: &[&str]) -> Self {
        self.histories.insert(
            host.to_string(),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        self
    }
}

impl InventorySource for MockInventorySource {
    fn ledger_lines(&self) -> Result<Vec<String>> {
        Ok(self.ledger.clone())
    }

    fn group_sources(&self) -> Result<Vec<GroupSource>> {
        Ok(self.groups.clone())
    }

    fn history_lines(&self, host_name: &str) -> Result<Vec<String>> {
        self.histories.get(host_name).cloned().ok_or_else(|| {
            HostOverviewError::HistoryNotFound {
                host: host_name.to_string(),
                path: PathBuf::from("history").join(host_name),
            }
            .into()
        })
    }
}
