/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, external tools, console, etc.).
pub mod derivation_differ;
pub mod deriver_query;
pub mod fact_store_reader;
pub mod inventory_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use derivation_differ::DerivationDiffer;
pub use deriver_query::DeriverQuery;
pub use fact_store_reader::FactStoreReader;
pub use inventory_source::{GroupSource, InventorySource};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
