use chrono::{DateTime, NaiveDate, Utc};

/// One action (switch, boot, rollback, ...) recorded for a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    timestamp: DateTime<Utc>,
    user: String,
    artifact_path: String,
    action: String,
}

impl HistoryEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        user: impl Into<String>,
        artifact_path: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            user: user.into(),
            artifact_path: artifact_path.into(),
            action: action.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn artifact_path(&self) -> &str {
        &self.artifact_path
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

/// The pair of artifacts bracketing a change, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: String,
    pub to: String,
}

/// A history entry plus its transition from the chronologically previous entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub entry: HistoryEntry,
    pub transition: Option<Transition>,
}

/// All rows falling on one calendar day, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryDay {
    pub date: NaiveDate,
    pub rows: Vec<HistoryRow>,
}

/// A log line that could not be turned into an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

/// Aggregated history of one host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryTimeline {
    pub days: Vec<HistoryDay>,
    pub skipped: Vec<SkippedLine>,
}

impl HistoryTimeline {
    pub fn entry_count(&self) -> usize {
        self.rows().count()
    }

    /// Rows across all days, newest first
    pub fn rows(&self) -> impl Iterator<Item = &HistoryRow> {
        self.days.iter().flat_map(|d| d.rows.iter())
    }
}
