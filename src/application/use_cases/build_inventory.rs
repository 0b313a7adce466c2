use crate::application::dto::InventoryRequest;
use crate::application::read_models::{
    GroupView, InventoryRow, InventoryView, LocationView, ProvenanceView, RepoLinks,
};
use crate::fleet::domain::{
    minimize_system_name, HostGroup, LocationLabel, ResolvedProvenance, StoreDir,
};
use crate::fleet::services::{HostGroupParser, LocationResolver, ProvenanceLedger};
use crate::ports::outbound::{FactStoreReader, InventorySource, ProgressReporter};
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// BuildInventoryUseCase - joins host groups, locations and provenance
///
/// Host groups and the ledger are read independently; locations are resolved
/// only for hosts that end up in a displayed group. Nothing is cached: every
/// call recomputes from the current files.
///
/// # Type Parameters
/// * `FS` - FactStoreReader implementation
/// * `IS` - InventorySource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildInventoryUseCase<FS, IS, PR> {
    fact_store: FS,
    inventory_source: IS,
    progress_reporter: PR,
    repo_links: Option<RepoLinks>,
    store_dir: StoreDir,
}

impl<FS, IS, PR> BuildInventoryUseCase<FS, IS, PR>
where
    FS: FactStoreReader,
    IS: InventorySource,
    PR: ProgressReporter,
{
    pub fn new(
        fact_store: FS,
        inventory_source: IS,
        progress_reporter: PR,
        repo_links: Option<RepoLinks>,
    ) -> Self {
        Self {
            fact_store,
            inventory_source,
            progress_reporter,
            repo_links,
            store_dir: StoreDir::default(),
        }
    }

    /// Store directory system paths are shortened against (`/nix/store` by default)
    pub fn with_store_dir(mut self, store_dir: StoreDir) -> Self {
        self.store_dir = store_dir;
        self
    }

    pub fn execute(&self, request: &InventoryRequest) -> Result<InventoryView> {
        // Step 1: Host groups, restricted to the requested ones
        let groups = self.load_groups(request)?;

        // Step 2: Provenance of every system in the ledger
        let provenance = resolve_provenance(&self.inventory_source)?;

        // Step 3: Locations of the hosts that are shown
        let wanted: HashSet<&str> = groups
            .iter()
            .flat_map(|g| g.assignments().iter().map(|a| a.host_name()))
            .collect();
        let locations = self.resolve_locations(&wanted)?;

        // Step 4: Join and filter
        let needle = request.needle();
        let group_views = groups
            .iter()
            .map(|group| self.build_group(group, &locations, &provenance, needle.as_deref()))
            .collect();

        let view = InventoryView::new(group_views);
        self.progress_reporter.report_completion(&format!(
            "✅ {} host(s) in {} group(s)",
            view.totals.hosts, view.totals.groups
        ));
        Ok(view)
    }

    fn load_groups(&self, request: &InventoryRequest) -> Result<Vec<HostGroup>> {
        let sources = self.inventory_source.group_sources()?;

        let groups: Vec<HostGroup> = sources
            .iter()
            .filter(|source| request.groups.is_empty() || request.groups.contains(&source.name))
            .map(|source| {
                let lines: Vec<&str> = source.lines.iter().map(String::as_str).collect();
                HostGroupParser::parse(&source.name, &lines)
            })
            .filter(|group| {
                if group.is_empty() {
                    tracing::debug!(group = group.name(), "dropping empty host group");
                }
                !group.is_empty()
            })
            .collect();

        self.progress_reporter
            .report(&format!("📖 Loaded {} host group(s)", groups.len()));
        Ok(groups)
    }

    fn resolve_locations(&self, wanted: &HashSet<&str>) -> Result<HashMap<String, LocationLabel>> {
        let switches = self.fact_store.load_switches()?;
        let hosts: Vec<_> = self
            .fact_store
            .load_hosts()?
            .into_iter()
            .filter(|host| wanted.contains(host.host_name()))
            .collect();

        tracing::debug!(
            switches = switches.switch_count(),
            macs = switches.mac_count(),
            hosts = hosts.len(),
            "resolving host locations"
        );

        let total = hosts.len();
        let mut locations = HashMap::with_capacity(total);
        for (idx, host) in hosts.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(host.host_name()));

            // virtual machines never consult discovery data
            let discovery = if host.is_virtual() {
                None
            } else {
                self.fact_store.load_discovery(host.uuid())?
            };
            let label = LocationResolver::resolve(host, discovery.as_ref(), &switches);
            // a later record for the same host name wins
            locations.insert(host.host_name().to_string(), label);
        }

        Ok(locations)
    }

    fn build_group(
        &self,
        group: &HostGroup,
        locations: &HashMap<String, LocationLabel>,
        provenance: &ResolvedProvenance,
        needle: Option<&str>,
    ) -> GroupView {
        let group_matches = needle.is_none_or(|n| group.name().to_lowercase().contains(n));

        let hosts = group
            .assignments()
            .iter()
            .map(|assignment| {
                let system = assignment.artifact_path();
                InventoryRow {
                    host: assignment.host_name().to_string(),
                    location: locations
                        .get(assignment.host_name())
                        .map_or(LocationView::NotCollected, LocationView::from),
                    system: system.to_string(),
                    system_short: minimize_system_name(&self.store_dir, system),
                    provenance: ProvenanceView::build(
                        provenance.get(system),
                        self.repo_links.as_ref(),
                    ),
                }
            })
            .filter(|row| group_matches || row_matches(row, needle))
            .collect();

        GroupView {
            name: group.name().to_string(),
            hosts,
        }
    }
}

/// Loads the ledger through `source` and resolves one provenance per system
pub(crate) fn resolve_provenance<IS: InventorySource>(source: &IS) -> Result<ResolvedProvenance> {
    let lines = source.ledger_lines()?;
    let records = ProvenanceLedger::parse(lines.iter().map(String::as_str));
    let resolved = ProvenanceLedger::resolve(records);
    tracing::debug!(
        rows = lines.len(),
        systems = resolved.len(),
        "resolved deployment ledger"
    );
    Ok(resolved)
}

fn row_matches(row: &InventoryRow, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    [
        row.host.as_str(),
        row.system.as_str(),
        row.provenance.revision.as_deref().unwrap_or_default(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
