mod history_aggregator;
mod host_group_parser;
mod location_resolver;
mod provenance_ledger;

pub use history_aggregator::HistoryAggregator;
pub use host_group_parser::HostGroupParser;
pub use location_resolver::LocationResolver;
pub use provenance_ledger::ProvenanceLedger;
