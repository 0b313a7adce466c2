/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// fleet services and coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
