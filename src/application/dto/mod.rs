/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the fleet domain isolated.
mod display_options;
mod output_format;
mod requests;

pub use display_options::{DiffColor, DisplayTimeZone};
pub use output_format::OutputFormat;
pub use requests::{DiffRequest, HistoryRequest, InventoryRequest};
