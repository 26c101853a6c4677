pub mod entry;
pub mod list;

pub use entry::Entry;
pub use list::{HistoryList, DEFAULT_MAX_ENTRIES};
