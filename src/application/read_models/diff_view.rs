use serde::Serialize;

/// Output of one derivation diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffView {
    /// Derivation compared on the left
    pub from: String,
    /// Derivation compared on the right
    pub to: String,
    /// System paths the derivations were resolved from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_system: Option<String>,
    pub lines: Vec<String>,
}
