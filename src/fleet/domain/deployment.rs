use std::collections::HashMap;

/// One ledger row: an artifact path built from a revision on a ref
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    artifact_path: String,
    revision: String,
    git_ref: String,
}

impl DeploymentRecord {
    pub fn new(
        artifact_path: impl Into<String>,
        revision: impl Into<String>,
        git_ref: impl Into<String>,
    ) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            revision: revision.into(),
            git_ref: git_ref.into(),
        }
    }

    pub fn artifact_path(&self) -> &str {
        &self.artifact_path
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    pub fn into_provenance(self) -> (String, Provenance) {
        (
            self.artifact_path,
            Provenance {
                revision: self.revision,
                git_ref: self.git_ref,
            },
        )
    }
}

/// The revision and ref credited with producing an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    revision: String,
    git_ref: String,
}

impl Provenance {
    pub fn new(revision: impl Into<String>, git_ref: impl Into<String>) -> Self {
        Self {
            revision: revision.into(),
            git_ref: git_ref.into(),
        }
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }
}

/// Artifact path -> winning provenance, one entry per path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedProvenance {
    entries: HashMap<String, Provenance>,
}

impl ResolvedProvenance {
    pub fn new(entries: HashMap<String, Provenance>) -> Self {
        Self { entries }
    }

    pub fn get(&self, artifact_path: &str) -> Option<&Provenance> {
        self.entries.get(artifact_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
