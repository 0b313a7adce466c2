//! Fleet domain - pure resolution logic over host facts, discovery records,
//! switch topology, the deployment ledger, host groups and action logs.
//!
//! Nothing in here touches the filesystem or spawns processes.

pub mod domain;
pub mod policies;
pub mod services;
