use crate::fleet::policies::STICKY_REF;

/// Builds links into the deployments repository web UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLinks {
    base_url: String,
}

impl RepoLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `<repo>/commit/<rev>`
    pub fn commit_url(&self, revision: &str) -> Option<String> {
        if revision.is_empty() {
            return None;
        }
        Some(format!("{}/commit/{}", self.base_url, revision))
    }

    /// `<repo>/compare/master...<ref>`, only for refs other than master
    pub fn compare_url(&self, git_ref: &str) -> Option<String> {
        if git_ref.is_empty() || git_ref == STICKY_REF {
            return None;
        }
        Some(format!(
            "{}/compare/{}...{}",
            self.base_url, STICKY_REF, git_ref
        ))
    }
}
