pub mod deployment;
pub mod discovery;
pub mod history;
pub mod host_fact;
pub mod host_group;
pub mod location;
pub mod store_path;
pub mod switch;

pub use deployment::{DeploymentRecord, Provenance, ResolvedProvenance};
pub use discovery::{Identifier, LinkDiscoveryRecord};
pub use history::{HistoryDay, HistoryEntry, HistoryRow, HistoryTimeline, SkippedLine, Transition};
pub use host_fact::HostFact;
pub use host_group::{HostAssignment, HostGroup};
pub use location::{Location, LocationLabel};
pub use store_path::{minimize_system_name, DerivationPath, StoreDir, StorePath};
pub use switch::{PortRule, SwitchRecord, SwitchTable};
