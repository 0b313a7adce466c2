//! Configuration for hostoverview.
//!
//! Provides YAML-based configuration through `hostoverview.config.yml`
//! files and resolves where the fleet data lives, combining command-line
//! flags, `HO_*` environment variables, the config file and defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::process::{DEFAULT_NIX_DIFF_PROGRAM, DEFAULT_NIX_STORE_PROGRAM};
use crate::application::dto::{DiffColor, DisplayTimeZone, OutputFormat};
use crate::fleet::domain::StoreDir;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "hostoverview.config.yml";

/// Root every default data location hangs off
const BARE_ROOT: &str = "/var/lib/gitlab-runner";

pub const SYSTEMS_PATH_ENV: &str = "HO_SYSTEMS_PATH";
pub const DEPLOYMENTS_PATH_ENV: &str = "HO_DEPLOYMENTS_PATH";
pub const FACTS_PATH_ENV: &str = "HO_FACTS_PATH";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub systems_path: Option<PathBuf>,
    pub deployments_path: Option<PathBuf>,
    pub facts_path: Option<PathBuf>,
    pub format: Option<String>,
    /// Web URL of the deployments repository, used for commit/compare links.
    pub repo_url: Option<String>,
    pub timezone: Option<String>,
    pub store_dir: Option<String>,
    pub nix_store_program: Option<String>,
    pub nix_diff_program: Option<String>,
    pub diff_color: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    eprintln!("📄 Auto-discovered config file: {}", config_path.display());
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    if let Some(ref timezone) = config.timezone {
        timezone
            .parse::<DisplayTimeZone>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    if let Some(ref color) = config.diff_color {
        color
            .parse::<DiffColor>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    if let Some(ref url) = config.repo_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(
                "Invalid config: repo_url must be an http(s) URL, got '{}'.\n\n\
                 💡 Hint: Use the web address of the deployments repository (e.g., \"https://gitlab.example.org/platform/deployments\").",
                url
            );
        }
    }
    for (key, program) in [
        ("nix_store_program", &config.nix_store_program),
        ("nix_diff_program", &config.nix_diff_program),
    ] {
        if program.as_deref().is_some_and(|p| p.trim().is_empty()) {
            bail!("Invalid config: {} must not be empty.", key);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Where the fleet data lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetPaths {
    /// Ledger, host-group files and `history/`
    pub systems: PathBuf,
    pub deployments: PathBuf,
    /// `hosts/`, `lldp/` and `switches/`
    pub facts: PathBuf,
}

impl FleetPaths {
    /// Resolves each path from the first source that sets it: command-line
    /// flag, environment, config file, default.
    pub fn resolve(
        cli_systems: Option<PathBuf>,
        cli_facts: Option<PathBuf>,
        config: &ConfigFile,
    ) -> Self {
        Self::resolve_with(cli_systems, cli_facts, config, |name| {
            std::env::var(name).ok()
        })
    }

    /// Same as [`FleetPaths::resolve`] with an explicit environment lookup
    pub fn resolve_with<F>(
        cli_systems: Option<PathBuf>,
        cli_facts: Option<PathBuf>,
        config: &ConfigFile,
        env: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |name: &str| env(name).filter(|v| !v.is_empty()).map(PathBuf::from);

        let systems = cli_systems
            .or_else(|| from_env(SYSTEMS_PATH_ENV))
            .or_else(|| config.systems_path.clone())
            .unwrap_or_else(|| Path::new(BARE_ROOT).join("systems"));
        let deployments = from_env(DEPLOYMENTS_PATH_ENV)
            .or_else(|| config.deployments_path.clone())
            .unwrap_or_else(|| Path::new(BARE_ROOT).join("hostoverview-repos/deployments"));
        let facts = cli_facts
            .or_else(|| from_env(FACTS_PATH_ENV))
            .or_else(|| config.facts_path.clone())
            .unwrap_or_else(|| deployments.join("facts"));

        Self {
            systems,
            deployments,
            facts,
        }
    }
}

/// Effective settings after merging the command line into the config file
#[derive(Debug, Clone)]
pub struct Settings {
    pub paths: FleetPaths,
    pub format: OutputFormat,
    pub repo_url: Option<String>,
    pub timezone: DisplayTimeZone,
    pub store_dir: StoreDir,
    pub nix_store_program: String,
    pub nix_diff_program: String,
    pub diff_color: DiffColor,
}

/// Values given on the command line, which win over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub systems_path: Option<PathBuf>,
    pub facts_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl Settings {
    pub fn merge(overrides: CliOverrides, config: ConfigFile) -> Result<Self> {
        let paths = FleetPaths::resolve(overrides.systems_path, overrides.facts_path, &config);
        Self::build(paths, overrides.format, config)
    }

    fn build(paths: FleetPaths, format: Option<OutputFormat>, config: ConfigFile) -> Result<Self> {
        let format = match format {
            Some(format) => format,
            None => parse_or_default(config.format.as_deref())?,
        };

        Ok(Self {
            paths,
            format,
            repo_url: config.repo_url,
            timezone: parse_or_default(config.timezone.as_deref())?,
            store_dir: config.store_dir.map(StoreDir::new).unwrap_or_default(),
            nix_store_program: config
                .nix_store_program
                .unwrap_or_else(|| DEFAULT_NIX_STORE_PROGRAM.to_string()),
            nix_diff_program: config
                .nix_diff_program
                .unwrap_or_else(|| DEFAULT_NIX_DIFF_PROGRAM.to_string()),
            diff_color: parse_or_default(config.diff_color.as_deref())?,
        })
    }
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T>
where
    T: std::str::FromStr<Err = String> + Default,
{
    match value {
        Some(text) => text.parse().map_err(|e: String| anyhow::anyhow!(e)),
        None => Ok(T::default()),
    }
}
