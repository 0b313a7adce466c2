use crate::fleet::domain::HostGroup;

/// Prefix of a line naming a host in a group file
pub const HOST_MARKER: &str = "**";

/// HostGroupParser service for the two-line host group file format
///
/// ```text
/// ** web-p01
/// /nix/store/...-nixos-system-web-p01-20.03pre-git
/// ```
///
/// A marker line names a host; the line right after it is that host's
/// artifact path. Stray lines and a marker on the last line are ignored.
pub struct HostGroupParser;

impl HostGroupParser {
    pub fn parse(name: &str, lines: &[&str]) -> HostGroup {
        let mut group = HostGroup::new(name);

        for (idx, line) in lines.iter().enumerate() {
            let Some(host) = line.strip_prefix(HOST_MARKER) else {
                continue;
            };
            let host = host.trim();
            let Some(artifact) = lines.get(idx + 1) else {
                tracing::debug!(group = name, host, "host marker without artifact line");
                continue;
            };
            if host.is_empty() {
                tracing::debug!(group = name, line_number = idx + 1, "host marker without host name");
                continue;
            }
            group.assign(host, artifact.trim());
        }

        group
    }
}
