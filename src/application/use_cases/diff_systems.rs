use crate::application::dto::DiffRequest;
use crate::application::read_models::DiffView;
use crate::fleet::domain::{DerivationPath, StoreDir, StorePath};
use crate::ports::outbound::{DerivationDiffer, DeriverQuery};
use crate::shared::error::HostOverviewError;
use crate::shared::security::{validate_directory, validate_regular_file};
use crate::shared::Result;

/// DiffSystemsUseCase - compares the derivations behind two systems
///
/// Both inputs are validated (shape, then existence) before any external
/// tool runs. System paths are mapped to their derivations with one deriver
/// query each; the answers must be existing derivations in the same store.
/// Then the diff tool runs once. Nothing is retried.
///
/// # Type Parameters
/// * `DQ` - DeriverQuery implementation
/// * `DD` - DerivationDiffer implementation
pub struct DiffSystemsUseCase<DQ, DD> {
    deriver_query: DQ,
    differ: DD,
    store_dir: StoreDir,
}

impl<DQ, DD> DiffSystemsUseCase<DQ, DD>
where
    DQ: DeriverQuery,
    DD: DerivationDiffer,
{
    pub fn new(deriver_query: DQ, differ: DD, store_dir: StoreDir) -> Self {
        Self {
            deriver_query,
            differ,
            store_dir,
        }
    }

    pub fn execute(&self, request: &DiffRequest) -> Result<DiffView> {
        match request {
            DiffRequest::Systems { from, to } => self.diff_systems(from, to),
            DiffRequest::Derivations { from, to } => self.diff_derivations(from, to),
        }
    }

    fn diff_systems(&self, from: &str, to: &str) -> Result<DiffView> {
        let from = StorePath::parse(&self.store_dir, from)?;
        let to = StorePath::parse(&self.store_dir, to)?;
        for system in [&from, &to] {
            validate_directory(system.as_path(), "System path")
                .map_err(|e| missing(system.as_str(), e))?;
        }

        let from_drv = self.derived_recipe(&from)?;
        let to_drv = self.derived_recipe(&to)?;
        tracing::debug!(from = from_drv.as_str(), to = to_drv.as_str(), "resolved derivers");

        let lines = self.differ.diff(from_drv.as_path(), to_drv.as_path())?;
        Ok(DiffView {
            from: from_drv.as_str().to_string(),
            to: to_drv.as_str().to_string(),
            from_system: Some(from.as_str().to_string()),
            to_system: Some(to.as_str().to_string()),
            lines,
        })
    }

    /// Asks for the derivation behind `system` and holds the answer to the
    /// same shape and existence rules as a derivation given directly
    fn derived_recipe(&self, system: &StorePath) -> Result<DerivationPath> {
        let deriver = self.deriver_query.query_deriver(system)?;
        let drv = DerivationPath::parse(&self.store_dir, &deriver.to_string_lossy())?;
        validate_regular_file(drv.as_path(), "System derivation")
            .map_err(|e| missing(drv.as_str(), e))?;
        Ok(drv)
    }

    fn diff_derivations(&self, from: &str, to: &str) -> Result<DiffView> {
        let from = DerivationPath::parse(&self.store_dir, from)?;
        let to = DerivationPath::parse(&self.store_dir, to)?;
        for drv in [&from, &to] {
            validate_regular_file(drv.as_path(), "System derivation")
                .map_err(|e| missing(drv.as_str(), e))?;
        }

        let lines = self.differ.diff(from.as_path(), to.as_path())?;
        Ok(DiffView {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
            from_system: None,
            to_system: None,
            lines,
        })
    }
}

fn missing(input: &str, cause: anyhow::Error) -> anyhow::Error {
    HostOverviewError::InvalidInput {
        input: input.to_string(),
        reason: cause.to_string(),
    }
    .into()
}
