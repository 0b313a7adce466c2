use crate::shared::error::HostOverviewError;
use crate::shared::Result;
use std::path::Path;

/// Default Nix store location
pub const DEFAULT_STORE_DIR: &str = "/nix/store";

/// File extension of a build recipe (derivation)
const DERIVATION_EXTENSION: &str = ".drv";

/// Number of leading hash characters kept by [`minimize_system_name`]
const SHORT_HASH_LENGTH: usize = 10;

/// Marker between the store hash and the host label of a NixOS system
const SYSTEM_NAME_MARKER: &str = "nixos-system-";

const RELEASE_SUFFIXES: [&str; 2] = ["pre-git", "post-git"];

/// The store directory every artifact and recipe path must live directly under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDir(String);

impl StoreDir {
    pub fn new(dir: impl Into<String>) -> Self {
        let dir = dir.into();
        let trimmed = dir.trim_end_matches('/');
        Self(if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the store entry name when `raw` is `<store>/<name>`
    fn entry_name<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let rest = raw.strip_prefix(self.0.as_str())?;
        if self.0 == "/" {
            Some(rest)
        } else {
            rest.strip_prefix('/')
        }
    }
}

impl Default for StoreDir {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_DIR)
    }
}

fn is_store_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-'
}

fn is_store_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && name.chars().all(is_store_name_char)
}

fn invalid(raw: &str, reason: &str) -> anyhow::Error {
    HostOverviewError::InvalidInput {
        input: raw.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// A build artifact (system closure) path: `<store>/<lowercase name>`
///
/// Only the shape is checked here; whether it exists is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePath(String);

impl StorePath {
    pub fn parse(store: &StoreDir, raw: &str) -> Result<Self> {
        match store.entry_name(raw) {
            Some(name) if is_store_name(name) => Ok(Self(raw.to_string())),
            _ => Err(invalid(raw, "invalid system path")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// A build recipe path: `<store>/<lowercase name>.drv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath(String);

impl DerivationPath {
    pub fn parse(store: &StoreDir, raw: &str) -> Result<Self> {
        match store.entry_name(raw) {
            Some(name)
                if is_store_name(name)
                    && name.len() > DERIVATION_EXTENSION.len()
                    && name.ends_with(DERIVATION_EXTENSION) =>
            {
                Ok(Self(raw.to_string()))
            }
            _ => Err(invalid(raw, "invalid system derivation")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Shortens a NixOS system path for display
///
/// `/nix/store/qf2k7wgdassswwacaixwmgn75m03ngyv-nixos-system-hydra-p01-19.09pre-git`
/// becomes `qf2k7wgdas-hydra-p01-19.09`. Anything else, including paths
/// outside `store`, comes back unchanged.
pub fn minimize_system_name(store: &StoreDir, system: &str) -> String {
    try_minimize(store, system).unwrap_or_else(|| system.to_string())
}

fn try_minimize(store: &StoreDir, system: &str) -> Option<String> {
    let name = store.entry_name(system)?;
    let (hash, rest) = name.split_once('-')?;
    if hash.len() <= SHORT_HASH_LENGTH
        || !hash.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return None;
    }

    let rest = rest.strip_prefix(SYSTEM_NAME_MARKER)?;
    let label = RELEASE_SUFFIXES
        .iter()
        .find_map(|suffix| rest.strip_suffix(suffix))?;
    if label.is_empty()
        || !label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
    {
        return None;
    }

    Some(format!("{}-{}", &hash[..SHORT_HASH_LENGTH], label))
}
