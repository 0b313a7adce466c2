/// Use cases module containing application business logic orchestration
mod build_inventory;
mod diff_systems;
mod show_history;

pub use build_inventory::BuildInventoryUseCase;
pub use diff_systems::DiffSystemsUseCase;
pub use show_history::ShowHistoryUseCase;
