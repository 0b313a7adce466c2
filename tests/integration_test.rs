/// Integration tests for the application layer
mod test_utilities;

use hostoverview::application::read_models::LocationView;
use hostoverview::fleet::domain::{Identifier, Location, PortRule, SwitchRecord};
use hostoverview::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::mocks::*;

const WEB_P01: &str = "/nix/store/aaaaaaaaaaaaaaaa-nixos-system-web-p01-20.03pre-git";
const WEB_P02: &str = "/nix/store/bbbbbbbbbbbbbbbb-nixos-system-web-p02-20.03pre-git";
const DB_P01: &str = "/nix/store/cccccccccccccccc-nixos-system-db-p01-20.03pre-git";
const DB_P01_OLD: &str = "/nix/store/dddddddddddddddd-nixos-system-db-p01-19.09pre-git";

const TOR_MAC: &str = "00:1b:21:aa:bb:01";
const AGG_MAC: &str = "00:1b:21:aa:bb:02";

fn lldp(mac: &str, port: &str) -> LinkDiscoveryRecord {
    LinkDiscoveryRecord::new(
        Some(vec![Identifier::new("mac", mac)]),
        Some(vec![Identifier::new("ifname", port)]),
    )
}

fn fleet_facts() -> MockFactStore {
    MockFactStore::new()
        .with_host("web-p01", "u-web1", "Dell Inc.")
        .with_host("web-p02", "u-web2", "VMware, Inc.")
        .with_host("db-p01", "u-db1", "Supermicro")
        .with_discovery("u-web1", lldp(TOR_MAC, "Ethernet1"))
        .with_discovery("u-db1", lldp(AGG_MAC, "Ethernet48/1"))
        .with_switch(SwitchRecord::new(
            "tor-1",
            vec![TOR_MAC.to_string()],
            Some(Location::new("1", "4")),
            vec![],
        ))
        .with_switch(SwitchRecord::new(
            "agg-1",
            vec![AGG_MAC.to_string()],
            None,
            vec![PortRule::new("ethernet48", Some(Location::new("2", "7")))],
        ))
}

fn fleet_inventory() -> MockInventorySource {
    MockInventorySource::new()
        .with_ledger(&[
            &format!("1;{};1111111;master", WEB_P01),
            &format!("2;{};2222222;master", WEB_P01),
            &format!("3;{};3333333;feature-x", WEB_P02),
            &format!("4;{};4444444;feature-y", WEB_P02),
            &format!("5;{};5555555;hotfix", DB_P01_OLD),
            "broken row",
        ])
        .with_group(
            "web",
            &format!("** web-p01\n{}\n** web-p02\n{}\n", WEB_P01, WEB_P02),
        )
        .with_group("db", &format!("** db-p01\n{}\n** ghost-p01\n{}\n", DB_P01, DB_P01))
        .with_group("empty", "# nothing deployed here\n")
}

fn inventory_use_case(
    facts: MockFactStore,
    inventory: MockInventorySource,
) -> BuildInventoryUseCase<MockFactStore, MockInventorySource, MockProgressReporter> {
    BuildInventoryUseCase::new(facts, inventory, MockProgressReporter::new(), None)
}

// ============================================================================
// Inventory
// ============================================================================

#[test]
fn test_inventory_joins_groups_locations_and_provenance() {
    let use_case = inventory_use_case(fleet_facts(), fleet_inventory());

    let view = use_case.execute(&InventoryRequest::default()).unwrap();

    let names: Vec<&str> = view.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["web", "db"]);
    assert_eq!(view.totals.groups, 2);
    assert_eq!(view.totals.hosts, 4);

    let web = &view.groups[0];
    assert_eq!(web.hosts[0].host, "web-p01");
    assert_eq!(
        web.hosts[0].location,
        LocationView::Known {
            datacenter: "1".to_string(),
            kube: "4".to_string()
        }
    );
    assert_eq!(web.hosts[0].system, WEB_P01);
    assert_eq!(web.hosts[0].system_short, "aaaaaaaaaa-web-p01-20.03");
    assert_eq!(web.hosts[1].location, LocationView::Virtual);
}

#[test]
fn test_inventory_master_row_is_sticky() {
    let use_case = inventory_use_case(fleet_facts(), fleet_inventory());

    let view = use_case.execute(&InventoryRequest::default()).unwrap();
    let web = &view.groups[0];

    assert_eq!(web.hosts[0].provenance.revision.as_deref(), Some("1111111"));
    assert_eq!(web.hosts[0].provenance.git_ref, "master");
    // branch rows are replaced by later rows
    assert_eq!(web.hosts[1].provenance.revision.as_deref(), Some("4444444"));
    assert_eq!(web.hosts[1].provenance.git_ref, "feature-y");
}

#[test]
fn test_inventory_port_rules_and_uncollected_hosts() {
    let use_case = inventory_use_case(fleet_facts(), fleet_inventory());

    let view = use_case.execute(&InventoryRequest::default()).unwrap();
    let db = &view.groups[1];

    assert_eq!(db.hosts[0].host, "db-p01");
    assert_eq!(
        db.hosts[0].location,
        LocationView::Known {
            datacenter: "2".to_string(),
            kube: "7".to_string()
        }
    );
    assert!(db.hosts[0].provenance.revision.is_none());
    assert_eq!(db.hosts[0].provenance.revision_label(), "unknown");

    assert_eq!(db.hosts[1].host, "ghost-p01");
    assert_eq!(db.hosts[1].location, LocationView::NotCollected);
}

#[test]
fn test_inventory_unknown_switch_is_unknown_location() {
    let facts = MockFactStore::new()
        .with_host("web-p01", "u-web1", "Dell Inc.")
        .with_discovery("u-web1", lldp("ff:ff:ff:ff:ff:ff", "Ethernet1"));
    let inventory =
        MockInventorySource::new().with_group("web", &format!("** web-p01\n{}\n", WEB_P01));

    let view = inventory_use_case(facts, inventory)
        .execute(&InventoryRequest::default())
        .unwrap();

    assert_eq!(view.groups[0].hosts[0].location, LocationView::Unknown);
}

#[test]
fn test_inventory_virtual_hosts_skip_discovery() {
    let facts = fleet_facts();
    let use_case = inventory_use_case(facts.clone(), fleet_inventory());

    use_case.execute(&InventoryRequest::default()).unwrap();

    let lookups = facts.lookups();
    assert!(lookups.contains(&"u-web1".to_string()));
    assert!(lookups.contains(&"u-db1".to_string()));
    assert!(!lookups.contains(&"u-web2".to_string()));
}

#[test]
fn test_inventory_group_filter_limits_discovery() {
    let facts = fleet_facts();
    let use_case = inventory_use_case(facts.clone(), fleet_inventory());

    let request = InventoryRequest::new(vec!["db".to_string()], None);
    let view = use_case.execute(&request).unwrap();

    assert_eq!(view.groups.len(), 1);
    assert_eq!(view.groups[0].name, "db");
    assert_eq!(facts.lookups(), vec!["u-db1".to_string()]);
}

#[test]
fn test_inventory_search_matches_hosts_and_revisions() {
    let use_case = inventory_use_case(fleet_facts(), fleet_inventory());

    let by_host = use_case
        .execute(&InventoryRequest::new(vec![], Some("WEB-P02".to_string())))
        .unwrap();
    assert_eq!(by_host.totals.hosts, 1);
    assert_eq!(by_host.groups[0].hosts[0].host, "web-p02");

    let by_revision = use_case
        .execute(&InventoryRequest::new(vec![], Some("1111".to_string())))
        .unwrap();
    assert_eq!(by_revision.totals.hosts, 1);
    assert_eq!(by_revision.groups[0].hosts[0].host, "web-p01");
}

#[test]
fn test_inventory_search_on_group_name_keeps_whole_group() {
    let use_case = inventory_use_case(fleet_facts(), fleet_inventory());

    let view = use_case
        .execute(&InventoryRequest::new(vec![], Some("db".to_string())))
        .unwrap();

    assert_eq!(view.totals.groups, 1);
    assert_eq!(view.groups[0].hosts.len(), 2);
}

#[test]
fn test_inventory_shortens_systems_under_configured_store() {
    let system = "/srv/store/eeeeeeeeeeeeeeee-nixos-system-web-p01-20.03pre-git";
    let inventory =
        MockInventorySource::new().with_group("web", &format!("** web-p01\n{}\n", system));
    let use_case = inventory_use_case(fleet_facts(), inventory)
        .with_store_dir(StoreDir::new("/srv/store/"));

    let view = use_case.execute(&InventoryRequest::default()).unwrap();

    assert_eq!(view.groups[0].hosts[0].system_short, "eeeeeeeeee-web-p01-20.03");
}

#[test]
fn test_inventory_repo_links() {
    let use_case = BuildInventoryUseCase::new(
        fleet_facts(),
        fleet_inventory(),
        MockProgressReporter::new(),
        Some(RepoLinks::new("https://git.example.org/platform/deployments")),
    );

    let view = use_case.execute(&InventoryRequest::default()).unwrap();
    let web = &view.groups[0];

    assert_eq!(
        web.hosts[0].provenance.revision_url.as_deref(),
        Some("https://git.example.org/platform/deployments/commit/1111111")
    );
    assert!(web.hosts[0].provenance.ref_url.is_none());
    assert!(web.hosts[1].provenance.ref_url.is_some());
}

#[test]
fn test_inventory_reports_progress() {
    let reporter = MockProgressReporter::new();
    let use_case =
        BuildInventoryUseCase::new(fleet_facts(), fleet_inventory(), reporter.clone(), None);

    use_case.execute(&InventoryRequest::default()).unwrap();

    let messages = reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Progress: 1/3")));
    assert!(messages.iter().any(|m| m.starts_with("Completed:")));
}

// ============================================================================
// History
// ============================================================================

fn history_use_case(
    inventory: MockInventorySource,
    reporter: MockProgressReporter,
) -> ShowHistoryUseCase<MockInventorySource, MockProgressReporter> {
    ShowHistoryUseCase::new(inventory, reporter, None, DisplayTimeZone::Utc)
}

#[test]
fn test_history_joins_provenance_and_links_transitions() {
    let inventory = fleet_inventory().with_history(
        "db-p01",
        &[
            &format!("2020-02-28 09:00:00+00:00;alice;{};boot", DB_P01_OLD),
            &format!("2020-03-01 10:00:00+00:00;bob;{};switch", DB_P01),
            &format!("2020-03-01 12:30:00+00:00;bob;{};switch", DB_P01),
        ],
    );
    let use_case = history_use_case(inventory, MockProgressReporter::new());

    let view = use_case.execute(&HistoryRequest::new("db-p01")).unwrap();

    assert_eq!(view.host, "db-p01");
    assert_eq!(view.total_entries, 3);
    assert_eq!(view.days.len(), 2);
    assert_eq!(view.days[0].date, "2020-03-01");
    assert_eq!(view.days[0].heading, "Sunday, 2020-03-01");

    let newest = &view.days[0].entries[0];
    assert_eq!(newest.time, "12:30:00 +00:00");
    assert!(newest.transition.is_none());

    let switched = &view.days[0].entries[1];
    assert_eq!(switched.user, "bob");
    let transition = switched.transition.as_ref().unwrap();
    assert_eq!(transition.from, DB_P01_OLD);
    assert_eq!(transition.to, DB_P01);

    let oldest = &view.days[1].entries[0];
    assert_eq!(oldest.action, "boot");
    assert_eq!(oldest.provenance.revision.as_deref(), Some("5555555"));
    assert_eq!(oldest.provenance.git_ref, "hotfix");
}

#[test]
fn test_history_reports_skipped_lines() {
    let inventory = fleet_inventory().with_history(
        "web-p01",
        &[
            &format!("2020-03-01 10:00:00+00:00;alice;{};switch", WEB_P01),
            "yesterday;alice;/nix/store/x;switch",
            "",
        ],
    );
    let reporter = MockProgressReporter::new();
    let use_case = history_use_case(inventory, reporter.clone());

    let view = use_case.execute(&HistoryRequest::new("web-p01")).unwrap();

    assert_eq!(view.total_entries, 1);
    assert_eq!(view.skipped.len(), 1);
    assert_eq!(view.skipped[0].line_number, 2);

    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("yesterday;alice"));
}

#[test]
fn test_history_unknown_host_is_not_found() {
    let use_case = history_use_case(fleet_inventory(), MockProgressReporter::new());

    let err = use_case
        .execute(&HistoryRequest::new("nowhere-p01"))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<HostOverviewError>(),
        Some(HostOverviewError::HistoryNotFound { host, .. }) if host == "nowhere-p01"
    ));
}

// ============================================================================
// Diff
// ============================================================================

struct Store {
    dir: TempDir,
}

impl Store {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn store_dir(&self) -> StoreDir {
        StoreDir::new(self.dir.path().to_string_lossy().to_string())
    }

    fn system(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).unwrap();
        path.to_string_lossy().to_string()
    }

    fn derivation(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, "Derive([])").unwrap();
        path.to_string_lossy().to_string()
    }
}

#[test]
fn test_diff_systems_queries_derivers_then_diffs_once() {
    let store = Store::new();
    let deriver = SpyDeriverQuery::new();
    let differ = SpyDiffer::new();
    let use_case = DiffSystemsUseCase::new(deriver.clone(), differ.clone(), store.store_dir());

    let from = store.system("aaa-nixos-system-web-p01");
    let to = store.system("bbb-nixos-system-web-p01");
    store.derivation("aaa-nixos-system-web-p01.drv");
    store.derivation("bbb-nixos-system-web-p01.drv");
    let view = use_case
        .execute(&DiffRequest::Systems {
            from: from.clone(),
            to: to.clone(),
        })
        .unwrap();

    assert_eq!(deriver.call_count(), 2);
    assert_eq!(differ.call_count(), 1);
    assert_eq!(view.from, format!("{}.drv", from));
    assert_eq!(view.from_system.as_deref(), Some(from.as_str()));
    assert_eq!(view.lines.len(), 2);
}

#[test]
fn test_diff_derivations_skip_deriver_query() {
    let store = Store::new();
    let deriver = SpyDeriverQuery::new();
    let differ = SpyDiffer::new();
    let use_case = DiffSystemsUseCase::new(deriver.clone(), differ.clone(), store.store_dir());

    let view = use_case
        .execute(&DiffRequest::Derivations {
            from: store.derivation("aaa-nixos-system-web-p01.drv"),
            to: store.derivation("bbb-nixos-system-web-p01.drv"),
        })
        .unwrap();

    assert_eq!(deriver.call_count(), 0);
    assert_eq!(differ.call_count(), 1);
    assert!(view.from_system.is_none());
}

#[test]
fn test_diff_invalid_input_never_runs_tools() {
    let store = Store::new();
    let deriver = SpyDeriverQuery::new();
    let differ = SpyDiffer::new();
    let use_case = DiffSystemsUseCase::new(deriver.clone(), differ.clone(), store.store_dir());
    let existing = store.system("aaa-nixos-system-web-p01");

    let requests = [
        DiffRequest::Systems {
            from: "/etc/passwd".to_string(),
            to: existing.clone(),
        },
        DiffRequest::Systems {
            from: existing.clone(),
            to: format!("{}/Not-Lowercase", store.store_dir().as_str()),
        },
        DiffRequest::Systems {
            from: existing.clone(),
            to: format!("{}/zzz-missing", store.store_dir().as_str()),
        },
        DiffRequest::Derivations {
            from: existing.clone(),
            to: existing.clone(),
        },
    ];

    for request in &requests {
        let err = use_case.execute(request).unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<HostOverviewError>(),
                Some(HostOverviewError::InvalidInput { .. })
            ),
            "expected InvalidInput for {:?}",
            request
        );
    }

    assert_eq!(deriver.call_count(), 0);
    assert_eq!(differ.call_count(), 0);
}

#[test]
fn test_diff_rejects_derived_recipe_outside_store() {
    let store = Store::new();
    let deriver = SpyDeriverQuery::answering("/etc/passwd");
    let differ = SpyDiffer::new();
    let use_case = DiffSystemsUseCase::new(deriver.clone(), differ.clone(), store.store_dir());

    let err = use_case
        .execute(&DiffRequest::Systems {
            from: store.system("aaa-nixos-system-web-p01"),
            to: store.system("bbb-nixos-system-web-p01"),
        })
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<HostOverviewError>(),
        Some(HostOverviewError::InvalidInput { input, .. }) if input == "/etc/passwd"
    ));
    assert_eq!(differ.call_count(), 0);
}

#[test]
fn test_diff_rejects_derived_recipe_missing_from_store() {
    let store = Store::new();
    let gone = format!("{}/zzz-nixos-system-web-p01.drv", store.store_dir().as_str());
    let deriver = SpyDeriverQuery::answering(&gone);
    let differ = SpyDiffer::new();
    let use_case = DiffSystemsUseCase::new(deriver, differ.clone(), store.store_dir());

    let err = use_case
        .execute(&DiffRequest::Systems {
            from: store.system("aaa-nixos-system-web-p01"),
            to: store.system("bbb-nixos-system-web-p01"),
        })
        .unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    assert_eq!(differ.call_count(), 0);
}

#[test]
fn test_diff_tool_failure_propagates() {
    let store = Store::new();
    let differ = FailingDiffer::default();
    let use_case =
        DiffSystemsUseCase::new(SpyDeriverQuery::new(), differ.clone(), store.store_dir());

    let err = use_case
        .execute(&DiffRequest::Derivations {
            from: store.derivation("aaa-x.drv"),
            to: store.derivation("bbb-x.drv"),
        })
        .unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::ExternalToolFailed);
    assert_eq!(
        differ.calls.load(std::sync::atomic::Ordering::SeqCst),
        1
    );
}
