use super::entry::{is_storable, Entry};
use anyhow::{anyhow, Result};

/// Default bound on the number of stored entries.
pub const DEFAULT_MAX_ENTRIES: usize = 10;

/// The bounded, deduplicated clipboard history, most-recent-first.
///
/// Invariants held after every mutation:
/// - no two entries share the same text
/// - length never exceeds `max_entries`
/// - `entries[i].position == i` for all i
#[derive(Debug, Clone)]
pub struct HistoryList {
    pub entries: Vec<Entry>,
    max_entries: usize,
}

impl HistoryList {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    pub fn with_entries(max_entries: usize, entries: Vec<Entry>) -> Self {
        let mut list = Self {
            entries,
            max_entries,
        };
        list.entries.truncate(max_entries);
        list.renumber();
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend `text` as the freshest entry.
    ///
    /// Invalid text (empty, or tabs only) is ignored. An existing entry with
    /// identical text is removed first, so a re-add moves it to the front
    /// without growing the list. Returns whether the list changed.
    pub fn add(&mut self, text: &str) -> bool {
        if !is_storable(text) {
            return false;
        }

        self.entries.retain(|entry| entry.text != text);
        self.entries.insert(0, Entry::new(text.to_string()));
        self.entries.truncate(self.max_entries);
        self.renumber();

        true
    }

    /// Return the text at `position`, optionally promoting it to the front.
    pub fn select(&mut self, position: usize, promote: bool) -> Result<String> {
        let entry = self
            .entries
            .get(position)
            .ok_or_else(|| anyhow!("Position {} is out of bounds", position))?;
        let text = entry.text.clone();

        if promote {
            self.add(&text);
        }

        Ok(text)
    }

    /// Remove the entry at `position`, shifting later entries left.
    pub fn delete(&mut self, position: usize) -> Result<Entry> {
        if position >= self.entries.len() {
            return Err(anyhow!("Position {} is out of bounds", position));
        }

        let removed = self.entries.remove(position);
        self.renumber();

        Ok(removed)
    }

    fn renumber(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.position = i;
        }
    }
}
