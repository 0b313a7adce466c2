//! Serde shapes of the JSON documents in the fact store
//!
//! Collected facts are loosely structured: scalars show up where arrays are
//! expected and numbers where strings are. These types accept the observed
//! variants and convert into the fleet domain types.

use crate::fleet::domain::{
    HostFact, Identifier, LinkDiscoveryRecord, Location, PortRule, SwitchRecord,
};
use crate::shared::Result;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// A value written either as a single item or as a list of items
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// A text field that may be written as a JSON string or number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScalarText {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for ScalarText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarText::Text(text) => write!(f, "{}", text),
            ScalarText::Integer(n) => write!(f, "{}", n),
            ScalarText::Float(n) => write!(f, "{}", n),
        }
    }
}

/// `<facts>/hosts/*.json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostDocument {
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub uuid: Option<ScalarText>,
    #[serde(default)]
    pub vendor: Option<ScalarText>,
}

impl HostDocument {
    pub fn into_domain(self) -> Result<HostFact> {
        HostFact::new(
            self.host_name.unwrap_or_default(),
            self.uuid.map(|v| v.to_string()).unwrap_or_default(),
            self.vendor.map(|v| v.to_string()).unwrap_or_default(),
        )
    }
}

/// `<facts>/lldp/<uuid>.json`
#[derive(Debug, Default, Deserialize)]
pub struct LldpDocument {
    #[serde(default)]
    pub lldp: Vec<LldpSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LldpSection {
    #[serde(default)]
    pub interface: Vec<LldpInterface>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LldpInterface {
    #[serde(default)]
    pub chassis: Vec<IdentifierSet>,
    #[serde(default)]
    pub port: Vec<IdentifierSet>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IdentifierSet {
    #[serde(default)]
    pub id: Option<Vec<IdentifierDocument>>,
}

#[derive(Debug, Deserialize)]
pub struct IdentifierDocument {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<ScalarText>,
}

impl IdentifierSet {
    fn into_identifiers(self) -> Option<Vec<Identifier>> {
        self.id.map(|ids| {
            ids.into_iter()
                .filter_map(|id| {
                    let kind = id.kind?;
                    let value = id.value?;
                    Some(Identifier::new(kind, value.to_string()))
                })
                .collect()
        })
    }
}

impl LldpDocument {
    /// Only the first neighbour of the first interface is consulted
    pub fn into_domain(self) -> LinkDiscoveryRecord {
        let Some(interface) = self
            .lldp
            .into_iter()
            .next()
            .and_then(|section| section.interface.into_iter().next())
        else {
            return LinkDiscoveryRecord::default();
        };

        let chassis = interface
            .chassis
            .into_iter()
            .next()
            .and_then(IdentifierSet::into_identifiers);
        let port = interface
            .port
            .into_iter()
            .next()
            .and_then(IdentifierSet::into_identifiers);

        LinkDiscoveryRecord::new(chassis, port)
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationDocument {
    #[serde(default)]
    pub datacenter: Option<ScalarText>,
    #[serde(default)]
    pub kube: Option<ScalarText>,
}

impl LocationDocument {
    fn into_domain(self) -> Location {
        Location::new(
            self.datacenter.map(|v| v.to_string()).unwrap_or_default(),
            self.kube.map(|v| v.to_string()).unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct PortTargetDocument {
    #[serde(default)]
    pub location: Option<LocationDocument>,
}

/// The `port-match` object, kept in the order its keys were written
#[derive(Debug, Default)]
pub struct PortMatchDocument(pub Vec<(String, PortTargetDocument)>);

impl<'de> Deserialize<'de> for PortMatchDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = PortMatchDocument;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of port-name patterns to locations")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rules = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((pattern, target)) = map.next_entry::<String, PortTargetDocument>()? {
                    rules.push((pattern, target));
                }
                Ok(PortMatchDocument(rules))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// `<facts>/switches/*.json`
#[derive(Debug, Deserialize)]
pub struct SwitchDocument {
    pub name: String,
    pub mac: OneOrMany<String>,
    #[serde(default)]
    pub location: Option<LocationDocument>,
    #[serde(rename = "port-match", default)]
    pub port_match: Option<PortMatchDocument>,
}

impl SwitchDocument {
    pub fn into_domain(self) -> SwitchRecord {
        let port_match = self
            .port_match
            .unwrap_or_default()
            .0
            .into_iter()
            .map(|(pattern, target)| {
                PortRule::new(pattern, target.location.map(LocationDocument::into_domain))
            })
            .collect();

        SwitchRecord::new(
            self.name,
            self.mac.into_vec(),
            self.location.map(LocationDocument::into_domain),
            port_match,
        )
    }
}
