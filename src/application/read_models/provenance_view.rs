use super::repo_links::RepoLinks;
use crate::fleet::domain::Provenance;
use serde::Serialize;

/// Revision and ref that produced a system, with optional web links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvenanceView {
    /// `None` when the ledger never saw the system
    pub revision: Option<String>,
    pub git_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_url: Option<String>,
}

impl ProvenanceView {
    pub fn build(provenance: Option<&Provenance>, links: Option<&RepoLinks>) -> Self {
        let Some(provenance) = provenance else {
            return Self::default();
        };

        Self {
            revision: Some(provenance.revision().to_string()),
            git_ref: provenance.git_ref().to_string(),
            revision_url: links.and_then(|l| l.commit_url(provenance.revision())),
            ref_url: links.and_then(|l| l.compare_url(provenance.git_ref())),
        }
    }

    /// Revision text for display, `unknown` when unresolved
    pub fn revision_label(&self) -> &str {
        self.revision.as_deref().unwrap_or("unknown")
    }
}
