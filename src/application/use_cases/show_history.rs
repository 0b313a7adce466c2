use super::build_inventory::resolve_provenance;
use crate::application::dto::{DisplayTimeZone, HistoryRequest};
use crate::application::read_models::{
    HistoryDayView, HistoryEntryView, HistoryView, ProvenanceView, RepoLinks, SkippedLineView,
    TransitionView,
};
use crate::fleet::domain::{minimize_system_name, HistoryRow, ResolvedProvenance, StoreDir};
use crate::fleet::services::HistoryAggregator;
use crate::ports::outbound::{InventorySource, ProgressReporter};
use crate::shared::Result;
use chrono::{Local, TimeZone, Utc};
use std::fmt;

const DAY_HEADING_FORMAT: &str = "%A, %Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S %:z";

/// ShowHistoryUseCase - renders the action log of one host
///
/// Entries are joined with the deployment ledger so each one shows the
/// revision that produced its system.
///
/// # Type Parameters
/// * `IS` - InventorySource implementation
/// * `PR` - ProgressReporter implementation
pub struct ShowHistoryUseCase<IS, PR> {
    inventory_source: IS,
    progress_reporter: PR,
    repo_links: Option<RepoLinks>,
    timezone: DisplayTimeZone,
    store_dir: StoreDir,
}

impl<IS, PR> ShowHistoryUseCase<IS, PR>
where
    IS: InventorySource,
    PR: ProgressReporter,
{
    pub fn new(
        inventory_source: IS,
        progress_reporter: PR,
        repo_links: Option<RepoLinks>,
        timezone: DisplayTimeZone,
    ) -> Self {
        Self {
            inventory_source,
            progress_reporter,
            repo_links,
            timezone,
            store_dir: StoreDir::default(),
        }
    }

    /// Store directory system paths are shortened against (`/nix/store` by default)
    pub fn with_store_dir(mut self, store_dir: StoreDir) -> Self {
        self.store_dir = store_dir;
        self
    }

    pub fn execute(&self, request: &HistoryRequest) -> Result<HistoryView> {
        let lines = self.inventory_source.history_lines(&request.host_name)?;
        self.progress_reporter.report(&format!(
            "📖 Loaded {} history line(s) for {}",
            lines.len(),
            request.host_name
        ));

        let provenance = resolve_provenance(&self.inventory_source)?;

        Ok(match self.timezone {
            DisplayTimeZone::Local => self.build_view(request, &lines, &provenance, &Local),
            DisplayTimeZone::Utc => self.build_view(request, &lines, &provenance, &Utc),
        })
    }

    fn build_view<Tz>(
        &self,
        request: &HistoryRequest,
        lines: &[String],
        provenance: &ResolvedProvenance,
        tz: &Tz,
    ) -> HistoryView
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let timeline = HistoryAggregator::aggregate(lines.iter().map(String::as_str), tz);

        for skipped in &timeline.skipped {
            tracing::warn!(
                host = %request.host_name,
                line_number = skipped.line_number,
                reason = %skipped.reason,
                "skipping history line"
            );
            self.progress_reporter.report_error(&format!(
                "⚠️  skipping timed entry that doesn't make sense: {}",
                skipped.line
            ));
        }

        let days = timeline
            .days
            .iter()
            .map(|day| HistoryDayView {
                date: day.date.format("%Y-%m-%d").to_string(),
                heading: day.date.format(DAY_HEADING_FORMAT).to_string(),
                entries: day
                    .rows
                    .iter()
                    .map(|row| self.entry_view(row, provenance, tz))
                    .collect(),
            })
            .collect();

        HistoryView {
            host: request.host_name.clone(),
            timezone: self.timezone.to_string(),
            total_entries: timeline.entry_count(),
            days,
            skipped: timeline
                .skipped
                .into_iter()
                .map(|s| SkippedLineView {
                    line_number: s.line_number,
                    line: s.line,
                    reason: s.reason,
                })
                .collect(),
        }
    }

    fn entry_view<Tz>(&self, row: &HistoryRow, provenance: &ResolvedProvenance, tz: &Tz) -> HistoryEntryView
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let entry = &row.entry;
        let local = entry.timestamp().with_timezone(tz);

        HistoryEntryView {
            timestamp: local.to_rfc3339(),
            time: local.format(TIME_FORMAT).to_string(),
            user: entry.user().to_string(),
            system: entry.artifact_path().to_string(),
            system_short: minimize_system_name(&self.store_dir, entry.artifact_path()),
            action: entry.action().to_string(),
            provenance: ProvenanceView::build(
                provenance.get(entry.artifact_path()),
                self.repo_links.as_ref(),
            ),
            transition: row.transition.as_ref().map(|t| TransitionView {
                from: t.from.clone(),
                to: t.to.clone(),
            }),
        }
    }
}
