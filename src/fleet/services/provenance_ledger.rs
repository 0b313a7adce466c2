use crate::fleet::domain::{DeploymentRecord, ResolvedProvenance};
use crate::fleet::policies::RefPrecedence;
use std::collections::HashMap;

/// Field separator of `db.csv`
const LEDGER_SEPARATOR: char = ';';

/// Minimum number of fields in a ledger row: `[?, artifact, revision, ref]`
const LEDGER_MIN_FIELDS: usize = 4;

/// ProvenanceLedger service for the append-only artifact -> revision ledger
pub struct ProvenanceLedger;

impl ProvenanceLedger {
    /// Parses one ledger row, returning None for rows that are too short
    pub fn parse_line(line: &str) -> Option<DeploymentRecord> {
        let fields: Vec<&str> = line.trim().split(LEDGER_SEPARATOR).map(str::trim).collect();
        if fields.len() < LEDGER_MIN_FIELDS || fields[1].is_empty() {
            return None;
        }

        Some(DeploymentRecord::new(fields[1], fields[2], fields[3]))
    }

    /// Parses every row of the ledger in file order, skipping malformed rows
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<DeploymentRecord> {
        lines
            .into_iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(idx, line)| {
                let record = Self::parse_line(line);
                if record.is_none() {
                    tracing::debug!(line_number = idx + 1, line, "skipping malformed ledger row");
                }
                record
            })
            .collect()
    }

    /// Folds the ledger, in order, into one winning provenance per artifact path
    ///
    /// See [`RefPrecedence`] for which row wins. Note this yields the newest
    /// branch row or the first master row, not the earliest revision that
    /// produced the path.
    pub fn resolve(records: impl IntoIterator<Item = DeploymentRecord>) -> ResolvedProvenance {
        let entries = records
            .into_iter()
            .fold(HashMap::new(), |mut resolved, record| {
                let (path, provenance) = record.into_provenance();
                match resolved.get(&path) {
                    Some(current) if !RefPrecedence::may_replace(current) => {}
                    _ => {
                        resolved.insert(path, provenance);
                    }
                }
                resolved
            });

        ResolvedProvenance::new(entries)
    }
}
