/// One host pinned to an artifact path by a group file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAssignment {
    host_name: String,
    artifact_path: String,
}

impl HostAssignment {
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn artifact_path(&self) -> &str {
        &self.artifact_path
    }
}

/// Ordered host -> artifact mapping parsed from one group file
///
/// Hosts keep the position of their first appearance; a repeated host takes
/// the later artifact path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGroup {
    name: String,
    assignments: Vec<HostAssignment>,
}

impl HostGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assignments: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assign(&mut self, host_name: impl Into<String>, artifact_path: impl Into<String>) {
        let host_name = host_name.into();
        let artifact_path = artifact_path.into();
        match self
            .assignments
            .iter_mut()
            .find(|a| a.host_name == host_name)
        {
            Some(existing) => existing.artifact_path = artifact_path,
            None => self.assignments.push(HostAssignment {
                host_name,
                artifact_path,
            }),
        }
    }

    pub fn get(&self, host_name: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.host_name == host_name)
            .map(|a| a.artifact_path.as_str())
    }

    pub fn assignments(&self) -> &[HostAssignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
