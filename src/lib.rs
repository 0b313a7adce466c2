//! hostoverview - fleet inventory for NixOS hosts
//!
//! Fuses the collected host facts, LLDP neighbour records, switch topology,
//! the deployment ledger and per-host action logs into one view: where each
//! host is, which system it runs, which revision built that system and how
//! the host changed over time.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`fleet`): Pure resolution logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem, external process, console and formatter implementations
//! - **Shared** (`shared`): Error types, the result alias and file-safety helpers
//!
//! # Example
//!
//! ```no_run
//! use hostoverview::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let use_case = BuildInventoryUseCase::new(
//!     FileSystemFactStore::new(Path::new("/srv/deployments/facts")),
//!     FileSystemInventory::new(PathBuf::from("/srv/systems")),
//!     StderrProgressReporter::new(),
//!     None,
//! );
//!
//! let view = use_case.execute(&InventoryRequest::default())?;
//! let output = MarkdownFormatter::new().format_inventory(&view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod fleet;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemFactStore, FileSystemInventory, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::process::{NixDiffCli, NixStoreCli};
    pub use crate::application::dto::{
        DiffColor, DiffRequest, DisplayTimeZone, HistoryRequest, InventoryRequest, OutputFormat,
    };
    pub use crate::application::read_models::{DiffView, HistoryView, InventoryView, RepoLinks};
    pub use crate::application::use_cases::{
        BuildInventoryUseCase, DiffSystemsUseCase, ShowHistoryUseCase,
    };
    pub use crate::fleet::domain::{
        HostFact, HostGroup, LinkDiscoveryRecord, Location, LocationLabel, ResolvedProvenance,
        StoreDir, SwitchTable,
    };
    pub use crate::fleet::services::{
        HistoryAggregator, HostGroupParser, LocationResolver, ProvenanceLedger,
    };
    pub use crate::ports::outbound::{
        DerivationDiffer, DeriverQuery, FactStoreReader, GroupSource, InventorySource,
        OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, HostOverviewError};
    pub use crate::shared::Result;
}
