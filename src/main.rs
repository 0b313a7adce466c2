mod adapters;
mod application;
mod cli;
mod config;
mod fleet;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemFactStore, FileSystemInventory};
use adapters::outbound::process::{NixDiffCli, NixStoreCli};
use application::dto::{HistoryRequest, InventoryRequest};
use application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use application::read_models::RepoLinks;
use application::use_cases::{BuildInventoryUseCase, DiffSystemsUseCase, ShowHistoryUseCase};
use cli::{Args, Command};
use config::{CliOverrides, ConfigFile, Settings};
use shared::error::ExitCode;
use shared::Result;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `hostoverview=trace`)
const LOG_ENV: &str = "HOSTOVERVIEW_LOG";

fn main() {
    setup_logging();

    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let settings = Settings::merge(
        CliOverrides {
            systems_path: args.systems_path.clone(),
            facts_path: args.facts_path.clone(),
            format: args.format,
        },
        config,
    )?;
    tracing::debug!(
        systems = %settings.paths.systems.display(),
        facts = %settings.paths.facts.display(),
        "resolved data locations"
    );

    let formatter = FormatterFactory::create(settings.format);
    let repo_links = settings.repo_url.as_deref().map(RepoLinks::new);

    let content = match args.command {
        Command::Inventory { groups, search } => {
            let use_case = BuildInventoryUseCase::new(
                FileSystemFactStore::new(&settings.paths.facts),
                FileSystemInventory::new(settings.paths.systems.clone()),
                StderrProgressReporter::new(),
                repo_links,
            )
            .with_store_dir(settings.store_dir.clone());
            let view = use_case.execute(&InventoryRequest::new(groups, search))?;
            eprintln!("{}", FormatterFactory::progress_message(settings.format));
            formatter.format_inventory(&view)?
        }
        Command::History { host } => {
            let use_case = ShowHistoryUseCase::new(
                FileSystemInventory::new(settings.paths.systems.clone()),
                StderrProgressReporter::new(),
                repo_links,
                settings.timezone,
            )
            .with_store_dir(settings.store_dir.clone());
            let view = use_case.execute(&HistoryRequest::new(host))?;
            eprintln!("{}", FormatterFactory::progress_message(settings.format));
            formatter.format_history(&view)?
        }
        Command::Diff(diff) => {
            let Some(request) = diff.into_request() else {
                anyhow::bail!("diff needs --path-from/--path-to or --drv-from/--drv-to");
            };
            let use_case = DiffSystemsUseCase::new(
                NixStoreCli::new(settings.nix_store_program.clone()),
                NixDiffCli::new(settings.nix_diff_program.clone(), settings.diff_color),
                settings.store_dir.clone(),
            );
            let view = use_case.execute(&request)?;
            formatter.format_diff(&view)?
        }
    };

    let presenter = PresenterFactory::create(PresenterType::for_output(args.output));
    presenter.present(&content)?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise the working directory is searched
fn load_config(explicit: Option<&std::path::Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        let config = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(config);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(config::discover_config(&cwd)?.unwrap_or_default())
}
