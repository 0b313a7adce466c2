//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that present the resolved fleet data
//! to the formatters.

mod diff_view;
mod history_view;
mod inventory_view;
mod provenance_view;
mod repo_links;

pub use diff_view::DiffView;
pub use history_view::{
    HistoryDayView, HistoryEntryView, HistoryView, SkippedLineView, TransitionView,
};
pub use inventory_view::{GroupView, InventoryRow, InventoryTotals, InventoryView, LocationView};
pub use provenance_view::ProvenanceView;
pub use repo_links::RepoLinks;
