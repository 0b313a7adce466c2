use std::fmt;

/// Physical placement of a machine: datacenter plus kube (rack row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    datacenter: String,
    kube: String,
}

impl Location {
    pub fn new(datacenter: impl Into<String>, kube: impl Into<String>) -> Self {
        Self {
            datacenter: datacenter.into(),
            kube: kube.into(),
        }
    }

    pub fn datacenter(&self) -> &str {
        &self.datacenter
    }

    pub fn kube(&self) -> &str {
        &self.kube
    }
}

/// Outcome of resolving where a host lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationLabel {
    /// Virtual machine; discovery data is never consulted
    Virtual,
    /// Placement resolved through the switch table
    Known(Location),
    /// No discovery record, unknown switch, or no matching port rule
    Unknown,
}

impl LocationLabel {
    pub fn location(&self) -> Option<&Location> {
        match self {
            LocationLabel::Known(location) => Some(location),
            _ => None,
        }
    }
}

impl fmt::Display for LocationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationLabel::Virtual => write!(f, "VM"),
            LocationLabel::Known(location) => {
                write!(f, "M{} K{}", location.datacenter, location.kube)
            }
            LocationLabel::Unknown => write!(f, "?"),
        }
    }
}
