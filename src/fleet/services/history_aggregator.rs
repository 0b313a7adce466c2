use crate::fleet::domain::{
    HistoryDay, HistoryEntry, HistoryRow, HistoryTimeline, SkippedLine, Transition,
};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::collections::BTreeMap;

/// Field separator of a history log line
const HISTORY_SEPARATOR: char = ';';

/// Minimum number of fields: `[timestamp, user, artifact, action]`
const HISTORY_MIN_FIELDS: usize = 4;

/// Timestamp layouts carrying their own UTC offset
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %:z",
    "%Y-%m-%d %H:%M:%S %z",
];

/// Timestamp layouts read as wall-clock time in the display time zone
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// HistoryAggregator service turning a host's action log into a timeline
///
/// Entries are keyed by their timestamp (second precision): when two lines
/// share one, the later line in the file replaces the earlier. The timeline
/// is ordered newest first and grouped by calendar day in `tz`.
pub struct HistoryAggregator;

impl HistoryAggregator {
    /// Parses, deduplicates, links and groups the lines of one history log
    pub fn aggregate<'a, Tz: TimeZone>(
        lines: impl IntoIterator<Item = &'a str>,
        tz: &Tz,
    ) -> HistoryTimeline {
        let (entries, skipped) = Self::parse(lines, tz);
        let rows = Self::link_transitions(entries);
        HistoryTimeline {
            days: Self::group_by_day(rows, tz),
            skipped,
        }
    }

    /// Parses log lines into entries ordered by descending timestamp
    ///
    /// Blank lines are ignored; any other line that doesn't parse is
    /// returned as a [`SkippedLine`].
    pub fn parse<'a, Tz: TimeZone>(
        lines: impl IntoIterator<Item = &'a str>,
        tz: &Tz,
    ) -> (Vec<HistoryEntry>, Vec<SkippedLine>) {
        let mut by_timestamp: BTreeMap<i64, HistoryEntry> = BTreeMap::new();
        let mut skipped = Vec::new();

        for (idx, raw) in lines.into_iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            match Self::parse_line(line, tz) {
                Ok(entry) => {
                    by_timestamp.insert(entry.timestamp().timestamp(), entry);
                }
                Err(reason) => skipped.push(SkippedLine {
                    line_number: idx + 1,
                    line: line.to_string(),
                    reason: reason.to_string(),
                }),
            }
        }

        (by_timestamp.into_values().rev().collect(), skipped)
    }

    fn parse_line<Tz: TimeZone>(line: &str, tz: &Tz) -> Result<HistoryEntry, &'static str> {
        let fields: Vec<&str> = line.split(HISTORY_SEPARATOR).collect();
        let timestamp = parse_timestamp(fields[0], tz)
            .filter(|ts| ts.timestamp() > 0)
            .ok_or("unparseable timestamp")?;
        if fields.len() < HISTORY_MIN_FIELDS {
            return Err("too few fields");
        }

        Ok(HistoryEntry::new(
            timestamp,
            fields[1].trim(),
            fields[2].trim(),
            fields[3].trim(),
        ))
    }

    /// Pairs each entry with its chronological predecessor (the next one in
    /// descending order) when the two ran different artifacts
    pub fn link_transitions(entries: Vec<HistoryEntry>) -> Vec<HistoryRow> {
        let transitions: Vec<Option<Transition>> = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                entries
                    .get(idx + 1)
                    .filter(|previous| previous.artifact_path() != entry.artifact_path())
                    .map(|previous| Transition {
                        from: previous.artifact_path().to_string(),
                        to: entry.artifact_path().to_string(),
                    })
            })
            .collect();

        entries
            .into_iter()
            .zip(transitions)
            .map(|(entry, transition)| HistoryRow { entry, transition })
            .collect()
    }

    /// Splits descending rows into per-day groups in `tz`
    pub fn group_by_day<Tz: TimeZone>(rows: Vec<HistoryRow>, tz: &Tz) -> Vec<HistoryDay> {
        rows.into_iter().fold(Vec::new(), |mut days: Vec<HistoryDay>, row| {
            let date = row.entry.timestamp().with_timezone(tz).date_naive();
            match days.last_mut() {
                Some(day) if day.date == date => day.rows.push(row),
                _ => days.push(HistoryDay {
                    date,
                    rows: vec![row],
                }),
            }
            days
        })
    }
}

/// Parses the timestamp column of a history log
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS±HH:MM` (the activation logger's
/// layout), offset-less wall-clock time in `tz`, and `@<unix seconds>`.
pub fn parse_timestamp<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Some(epoch) = text.strip_prefix('@') {
        return epoch
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Some(ts) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
    {
        return Some(ts.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|ts| ts.with_timezone(&Utc))
}
