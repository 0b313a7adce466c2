/// Filesystem adapters for the fact store, the systems repository and report output
mod directory_scan;
mod fact_documents;
mod fact_store;
mod file_writer;
mod inventory_repository;

pub use fact_store::FileSystemFactStore;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use inventory_repository::{FileSystemInventory, HISTORY_DIR, LEDGER_FILE};
