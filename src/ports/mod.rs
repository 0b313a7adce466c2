/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe the infrastructure the
/// application core depends on. The CLI drives the use cases directly.
pub mod outbound;
