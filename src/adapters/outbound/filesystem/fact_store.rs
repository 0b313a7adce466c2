use super::directory_scan::sorted_json_files;
use super::fact_documents::{HostDocument, LldpDocument, SwitchDocument};
use crate::fleet::domain::{HostFact, LinkDiscoveryRecord, SwitchTable};
use crate::ports::outbound::FactStoreReader;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const HOSTS_DIR: &str = "hosts";
const LLDP_DIR: &str = "lldp";
const SWITCHES_DIR: &str = "switches";

/// FileSystemFactStore adapter reading the fact store from disk
///
/// Layout under the facts root:
/// - `hosts/*.json` - one inventory record per host
/// - `lldp/<uuid>.json` - the discovery record for a host uuid
/// - `switches/*.json` - one record per switch
///
/// Every call rescans the directories. Unreadable or malformed files are
/// logged and skipped.
pub struct FileSystemFactStore {
    hosts_dir: PathBuf,
    lldp_dir: PathBuf,
    switches_dir: PathBuf,
}

impl FileSystemFactStore {
    pub fn new(facts_root: &Path) -> Self {
        Self {
            hosts_dir: facts_root.join(HOSTS_DIR),
            lldp_dir: facts_root.join(LLDP_DIR),
            switches_dir: facts_root.join(SWITCHES_DIR),
        }
    }

    fn scan<T: DeserializeOwned>(&self, dir: &Path) -> Vec<T> {
        let files = match sorted_json_files(dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "fact collection is not readable");
                return Vec::new();
            }
        };

        files
            .iter()
            .filter_map(|path| read_document(path))
            .collect()
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = read_text_file(path, "fact file")
        .map_err(|e| tracing::warn!(file = %path.display(), error = %e, "skipping unreadable fact file"))
        .ok()?;

    serde_json::from_str(&content)
        .map_err(|e| tracing::warn!(file = %path.display(), error = %e, "skipping malformed fact file"))
        .ok()
}

/// A uuid is used as a file name, so it has to stay inside the lldp directory
fn is_safe_uuid(uuid: &str) -> bool {
    !uuid.is_empty() && uuid != "." && uuid != ".." && !uuid.contains(['/', '\\'])
}

impl FactStoreReader for FileSystemFactStore {
    fn load_hosts(&self) -> Result<Vec<HostFact>> {
        let hosts = self
            .scan::<HostDocument>(&self.hosts_dir)
            .into_iter()
            .filter_map(|doc| match doc.into_domain() {
                Ok(host) => Some(host),
                Err(e) => {
                    tracing::debug!(error = %e, "discarding host record");
                    None
                }
            })
            .collect();
        Ok(hosts)
    }

    fn load_discovery(&self, uuid: &str) -> Result<Option<LinkDiscoveryRecord>> {
        if !is_safe_uuid(uuid) {
            tracing::debug!(uuid, "no usable uuid for discovery lookup");
            return Ok(None);
        }

        let path = self.lldp_dir.join(format!("{}.json", uuid));
        if !path.is_file() {
            return Ok(None);
        }

        Ok(read_document::<LldpDocument>(&path).map(LldpDocument::into_domain))
    }

    fn load_switches(&self) -> Result<SwitchTable> {
        let switches = self
            .scan::<SwitchDocument>(&self.switches_dir)
            .into_iter()
            .map(SwitchDocument::into_domain)
            .collect();
        Ok(SwitchTable::build(switches))
    }
}
