use crate::application::read_models::{DiffView, HistoryView, InventoryView};
use crate::shared::Result;

/// ReportFormatter port rendering read models into an output format
pub trait ReportFormatter {
    /// Formats the host-group inventory
    fn format_inventory(&self, view: &InventoryView) -> Result<String>;

    /// Formats the history of one host
    fn format_history(&self, view: &HistoryView) -> Result<String>;

    /// Formats the output of a derivation diff
    fn format_diff(&self, view: &DiffView) -> Result<String>;
}
