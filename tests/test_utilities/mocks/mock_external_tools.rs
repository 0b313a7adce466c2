use hostoverview::fleet::domain::StorePath;
use hostoverview::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// DeriverQuery spy answering `<system>.drv` (or a fixed answer) and counting calls
#[derive(Default, Clone)]
pub struct SpyDeriverQuery {
    pub calls: Arc<AtomicUsize>,
    answer: Option<String>,
}

#[allow(dead_code)]
impl SpyDeriverQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every query with `path`, whatever the system
    pub fn answering(path: &str) -> Self {
        Self {
            answer: Some(path.to_string()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DeriverQuery for SpyDeriverQuery {
    fn query_deriver(&self, system: &StorePath) -> Result<PathBuf> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(PathBuf::from(
            self.answer
                .clone()
                .unwrap_or_else(|| format!("{}.drv", system.as_str())),
        ))
    }
}

/// DerivationDiffer spy echoing its inputs and counting calls
#[derive(Default, Clone)]
pub struct SpyDiffer {
    pub calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl SpyDiffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DerivationDiffer for SpyDiffer {
    fn diff(&self, from: &Path, to: &Path) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            format!("- {}", from.display()),
            format!("+ {}", to.display()),
        ])
    }
}

/// DerivationDiffer that always fails like a crashing nix-diff
#[derive(Default, Clone)]
pub struct FailingDiffer {
    pub calls: Arc<AtomicUsize>,
}

impl DerivationDiffer for FailingDiffer {
    fn diff(&self, _from: &Path, _to: &Path) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(HostOverviewError::ExternalToolFailure {
            tool: "nix-diff".to_string(),
            exit_code: Some(1),
            output: "error: unexpected derivation format".to_string(),
        }
        .into())
    }
}
