use crate::history::{Entry, HistoryList};
use crate::utils::paths::{ensure_directories_exist, get_history_file_path};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the history from its backing file.
///
/// A missing or empty file is an empty history, not an error. A file that
/// exists but holds invalid JSON is an error; the store is small and is meant
/// to be rebuilt by the user rather than repaired.
pub fn load_history(max_entries: usize) -> Result<HistoryList> {
    let file_path = get_history_file_path()?;
    load_history_from(&file_path, max_entries)
}

pub fn load_history_from(file_path: &Path, max_entries: usize) -> Result<HistoryList> {
    if !file_path.exists() {
        debug!(path = %file_path.display(), "history file absent, starting empty");
        return Ok(HistoryList::new(max_entries));
    }

    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read history file: {}", file_path.display()))?;

    if content.trim().is_empty() {
        return Ok(HistoryList::new(max_entries));
    }

    let entries: Vec<Entry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse history file: {}", file_path.display()))?;

    debug!(entries = entries.len(), "loaded history");

    Ok(HistoryList::with_entries(max_entries, entries))
}

/// Overwrite the backing file with the full list, positions freshly assigned
/// in list order. Truncate-then-write; a crash mid-write can corrupt the
/// file, which is an accepted risk for a low-value store.
pub fn save_history(list: &HistoryList) -> Result<()> {
    ensure_directories_exist()?;
    let file_path = get_history_file_path()?;
    save_history_to(&file_path, list)
}

pub fn save_history_to(file_path: &Path, list: &HistoryList) -> Result<()> {
    let entries: Vec<Entry> = list
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Entry {
            position: i,
            text: entry.text.clone(),
        })
        .collect();

    let json = serde_json::to_string(&entries).context("Failed to serialize history")?;

    fs::write(file_path, json)
        .with_context(|| format!("Failed to write history file: {}", file_path.display()))?;

    debug!(entries = entries.len(), path = %file_path.display(), "saved history");

    Ok(())
}
