mod ref_precedence;

pub use ref_precedence::{RefPrecedence, STICKY_REF};
