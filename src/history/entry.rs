use serde::{Deserialize, Serialize};

/// One stored clipboard snapshot with its current rank.
///
/// `position` is the 0-based rank in the list at the time of the last save.
/// It is recomputed on every mutation and is not a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Position")]
    pub position: usize,

    #[serde(rename = "Text")]
    pub text: String,
}

impl Entry {
    pub fn new(text: String) -> Self {
        Self { position: 0, text }
    }
}

/// Text is worth storing only if something remains after stripping tabs.
pub fn is_storable(text: &str) -> bool {
    !text.is_empty() && !text.replace('\t', "").is_empty()
}
