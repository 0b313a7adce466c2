use super::provenance_view::ProvenanceView;
use serde::Serialize;

/// The pair of systems to diff for a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionView {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntryView {
    /// RFC 3339 in the display time zone
    pub timestamp: String,
    /// `HH:MM:SS ±HH:MM`
    pub time: String,
    pub user: String,
    pub system: String,
    pub system_short: String,
    pub action: String,
    pub provenance: ProvenanceView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryDayView {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `Weekday, YYYY-MM-DD`
    pub heading: String,
    pub entries: Vec<HistoryEntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLineView {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

/// History of one host, newest day first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryView {
    pub host: String,
    pub timezone: String,
    pub total_entries: usize,
    pub days: Vec<HistoryDayView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedLineView>,
}
