pub mod file;

pub use file::{load_history, save_history};
