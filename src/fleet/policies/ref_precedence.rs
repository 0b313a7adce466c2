use crate::fleet::domain::Provenance;

/// The ref whose ledger rows can never be displaced
pub const STICKY_REF: &str = "master";

/// RefPrecedence policy deciding which ledger row owns an artifact path
///
/// Rules, applied while folding the ledger top to bottom:
/// 1. The first row seen for a path is always taken.
/// 2. A later row replaces the current one unless the current one is on `master`.
///
/// So a chain of branch rows tracks the newest row, and the first `master`
/// row for a path sticks for the rest of the ledger.
pub struct RefPrecedence;

impl RefPrecedence {
    /// Whether a later row may overwrite `current`
    pub fn may_replace(current: &Provenance) -> bool {
        current.git_ref() != STICKY_REF
    }
}
