/// Mock implementations for testing
mod mock_external_tools;
mod mock_fact_store;
mod mock_inventory_source;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_external_tools::{FailingDiffer, SpyDeriverQuery, SpyDiffer};
#[allow(unused_imports)]
pub use mock_fact_store::MockFactStore;
#[allow(unused_imports)]
pub use mock_inventory_source::MockInventorySource;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
