/// Parameters of an inventory query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryRequest {
    /// Restrict to these host groups; empty means all groups
    pub groups: Vec<String>,
    /// Case-insensitive text matched against group, host, system and revision
    pub search: Option<String>,
}

impl InventoryRequest {
    pub fn new(groups: Vec<String>, search: Option<String>) -> Self {
        Self {
            groups,
            search: search.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Lowercased search needle, if any
    pub fn needle(&self) -> Option<String> {
        self.search.as_deref().map(|s| s.trim().to_lowercase())
    }
}

/// Parameters of a history query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub host_name: String,
}

impl HistoryRequest {
    pub fn new(host_name: impl Into<String>) -> Self {
        Self {
            host_name: host_name.into(),
        }
    }
}

/// The two things to compare, as system paths or as derivations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffRequest {
    Systems { from: String, to: String },
    Derivations { from: String, to: String },
}
