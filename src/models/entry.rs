use serde::{Deserialize, Serialize};

/// A term/definition pair in a quiz bank.
///
/// The term is the key of the entry and the correct answer when the entry is
/// dealt; the definition is what the player is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub term: String,
    pub definition: String,
}

impl Entry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}
