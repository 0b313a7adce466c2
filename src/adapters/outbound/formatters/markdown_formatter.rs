use crate::application::read_models::{
    DiffView, GroupView, HistoryDayView, HistoryView, InventoryView, ProvenanceView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for a host group
const GROUP_TABLE_HEADER: &str = "| Host | Loc | System | Rev | Ref |\n";

/// Markdown table separator line for a host group
const GROUP_TABLE_SEPARATOR: &str = "|------|-----|--------|-----|-----|\n";

/// Markdown table header for one day of history
const HISTORY_TABLE_HEADER: &str = "| Time | User | System | Action | Git Rev |\n";

/// Markdown table separator line for one day of history
const HISTORY_TABLE_SEPARATOR: &str = "|------|------|--------|--------|---------|\n";

/// MarkdownFormatter adapter rendering reports as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn link_or_text(text: &str, url: Option<&str>) -> String {
        let text = Self::escape_markdown_table_cell(text);
        match url {
            Some(url) => format!("[{}]({})", text, url),
            None => text,
        }
    }

    fn revision_cell(provenance: &ProvenanceView) -> String {
        Self::link_or_text(
            provenance.revision_label(),
            provenance.revision_url.as_deref(),
        )
    }

    fn ref_cell(provenance: &ProvenanceView) -> String {
        Self::link_or_text(&provenance.git_ref, provenance.ref_url.as_deref())
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_group(&self, output: &mut String, group: &GroupView) {
        output.push_str(&format!(
            "## {}\n\n",
            Self::escape_markdown_table_cell(&group.name)
        ));
        output.push_str(GROUP_TABLE_HEADER);
        output.push_str(GROUP_TABLE_SEPARATOR);

        for row in &group.hosts {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&row.host),
                Self::escape_markdown_table_cell(&row.location.label()),
                Self::escape_markdown_table_cell(&row.system_short),
                Self::revision_cell(&row.provenance),
                Self::ref_cell(&row.provenance),
            ));
        }
        output.push('\n');
    }

    fn render_day(&self, output: &mut String, day: &HistoryDayView) {
        output.push_str(&format!("## {}\n\n", day.heading));
        output.push_str(HISTORY_TABLE_HEADER);
        output.push_str(HISTORY_TABLE_SEPARATOR);

        for entry in &day.entries {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                entry.time,
                Self::escape_markdown_table_cell(&entry.user),
                Self::escape_markdown_table_cell(&entry.system_short),
                Self::escape_markdown_table_cell(&entry.action),
                Self::revision_cell(&entry.provenance),
            ));
        }
        output.push('\n');

        let transitions: Vec<_> = day
            .entries
            .iter()
            .filter_map(|e| e.transition.as_ref().map(|t| (e, t)))
            .collect();
        if transitions.is_empty() {
            return;
        }

        output.push_str("Changes:\n\n");
        for (entry, transition) in transitions {
            output.push_str(&format!(
                "- {}: `hostoverview diff --path-from {} --path-to {}`\n",
                entry.time, transition.from, transition.to
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_inventory(&self, view: &InventoryView) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Host Overview\n\n");
        output.push_str(
            "> **Rev** is the revision the deployment ledger settled on for a system: \
             the first `master` row recorded for it, otherwise its latest row.\n\n",
        );

        for group in &view.groups {
            self.render_group(&mut output, group);
        }

        output.push_str(&format!(
            "**Totals:** {} host(s) in {} group(s)\n",
            view.totals.hosts, view.totals.groups
        ));
        Ok(output)
    }

    fn format_history(&self, view: &HistoryView) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "# History of {}\n\n",
            Self::escape_markdown_table_cell(&view.host)
        ));

        if view.days.is_empty() {
            output.push_str("No entries.\n");
        }
        for day in &view.days {
            self.render_day(&mut output, day);
        }

        if !view.skipped.is_empty() {
            output.push_str("## Skipped lines\n\n");
            for skipped in &view.skipped {
                output.push_str(&format!(
                    "- line {} ({}): `{}`\n",
                    skipped.line_number, skipped.reason, skipped.line
                ));
            }
        }
        Ok(output)
    }

    fn format_diff(&self, view: &DiffView) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Derivation diff\n\n");
        if let (Some(from), Some(to)) = (&view.from_system, &view.to_system) {
            output.push_str(&format!("- systems: `{}` → `{}`\n", from, to));
        }
        output.push_str(&format!(
            "- derivations: `{}` → `{}`\n\n",
            view.from, view.to
        ));
        output.push_str("```\n");
        for line in &view.lines {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str("```\n");
        Ok(output)
    }
}
