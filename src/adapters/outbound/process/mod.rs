/// External process adapters for the Nix tooling
mod nix_diff;
mod nix_store;
mod tool_runner;

pub use nix_diff::{NixDiffCli, DEFAULT_NIX_DIFF_PROGRAM};
pub use nix_store::{NixStoreCli, DEFAULT_NIX_STORE_PROGRAM};
