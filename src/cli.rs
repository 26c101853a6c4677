use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "clipgo")]
#[command(about = "A clipboard history manager driven by dmenu", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the current clipboard contents in the history
    Add,
    /// Pick an entry with dmenu and restore it to the clipboard
    Show,
    /// Pick an entry with dmenu and remove it from the history
    Delete,
    /// Print the history to stdout without invoking the picker
    List,
}
