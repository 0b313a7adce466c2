use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{DiffRequest, OutputFormat};

/// Fleet inventory for NixOS hosts
#[derive(Parser, Debug)]
#[command(name = "hostoverview")]
#[command(version)]
#[command(
    about = "Show where each NixOS host lives, which system it runs and how it got there",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./hostoverview.config.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Systems repository: db.csv, host-group files and history/ [env: HO_SYSTEMS_PATH]
    #[arg(long, global = true, value_name = "DIR")]
    pub systems_path: Option<PathBuf>,

    /// Fact store: hosts/, lldp/ and switches/ [env: HO_FACTS_PATH]
    #[arg(long, global = true, value_name = "DIR")]
    pub facts_path: Option<PathBuf>,

    /// Output format: markdown or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every host group with location, system and revision per host
    Inventory {
        /// Only show this host group; can be given multiple times
        #[arg(short, long = "group", value_name = "GROUP")]
        groups: Vec<String>,

        /// Case-insensitive filter over group, host, system and revision
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the deployment history of one host, newest first
    History {
        /// Host name as used in the host-group files
        #[arg(long)]
        host: String,
    },

    /// Compare the derivations behind two systems with nix-diff
    Diff(DiffArgs),
}

#[derive(ClapArgs, Debug)]
#[group(required = true, multiple = true)]
pub struct DiffArgs {
    /// System path on the left
    #[arg(long, requires = "path_to", conflicts_with_all = ["drv_from", "drv_to"])]
    pub path_from: Option<String>,

    /// System path on the right
    #[arg(long, requires = "path_from")]
    pub path_to: Option<String>,

    /// Derivation on the left
    #[arg(long, requires = "drv_to", conflicts_with_all = ["path_from", "path_to"])]
    pub drv_from: Option<String>,

    /// Derivation on the right
    #[arg(long, requires = "drv_from")]
    pub drv_to: Option<String>,
}

impl DiffArgs {
    pub fn into_request(self) -> Option<DiffRequest> {
        match self {
            DiffArgs {
                path_from: Some(from),
                path_to: Some(to),
                ..
            } => Some(DiffRequest::Systems { from, to }),
            DiffArgs {
                drv_from: Some(from),
                drv_to: Some(to),
                ..
            } => Some(DiffRequest::Derivations { from, to }),
            _ => None,
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
