//! Inventory read model
//!
//! One table per host group, joined from the group files, the resolved
//! locations and the deployment ledger.

use super::provenance_view::ProvenanceView;
use crate::fleet::domain::LocationLabel;
use serde::Serialize;

/// Where a host is, as shown in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationView {
    Virtual,
    Known { datacenter: String, kube: String },
    Unknown,
    /// The fact store has no record for the host
    NotCollected,
}

impl LocationView {
    pub fn label(&self) -> String {
        match self {
            LocationView::Virtual => LocationLabel::Virtual.to_string(),
            LocationView::Known { datacenter, kube } => format!("M{} K{}", datacenter, kube),
            LocationView::Unknown => LocationLabel::Unknown.to_string(),
            LocationView::NotCollected => "n/a".to_string(),
        }
    }
}

impl From<&LocationLabel> for LocationView {
    fn from(label: &LocationLabel) -> Self {
        match label {
            LocationLabel::Virtual => LocationView::Virtual,
            LocationLabel::Known(location) => LocationView::Known {
                datacenter: location.datacenter().to_string(),
                kube: location.kube().to_string(),
            },
            LocationLabel::Unknown => LocationView::Unknown,
        }
    }
}

/// One host of a host group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub host: String,
    pub location: LocationView,
    pub system: String,
    /// Shortened system name for display
    pub system_short: String,
    #[serde(flatten)]
    pub provenance: ProvenanceView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub name: String,
    pub hosts: Vec<InventoryRow>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventoryTotals {
    pub groups: usize,
    pub hosts: usize,
}

/// Inventory of all non-empty host groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub groups: Vec<GroupView>,
    pub totals: InventoryTotals,
}

impl InventoryView {
    /// Builds the view, dropping empty groups and counting what is left
    pub fn new(groups: Vec<GroupView>) -> Self {
        let groups: Vec<GroupView> = groups.into_iter().filter(|g| !g.hosts.is_empty()).collect();
        let totals = InventoryTotals {
            groups: groups.len(),
            hosts: groups.iter().map(|g| g.hosts.len()).sum(),
        };
        Self { groups, totals }
    }
}
