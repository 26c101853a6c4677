mod cli;
mod clipboard;
mod config;
mod history;
mod picker;
mod storage;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use storage::{load_history, save_history};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Add => handle_add(&config)?,
        Commands::Show => handle_show(&config)?,
        Commands::Delete => handle_delete(&config)?,
        Commands::List => handle_list(&config)?,
    }

    Ok(())
}

fn handle_add(config: &Config) -> Result<()> {
    let text = clipboard::read_clipboard(&config.clipboard_command)?;

    let mut list = load_history(config.max_entries)?;
    if list.add(&text) {
        save_history(&list)?;
        debug!("added clipboard contents to history");
    }

    Ok(())
}

fn handle_show(config: &Config) -> Result<()> {
    let mut list = load_history(config.max_entries)?;
    if list.is_empty() {
        info!("history is empty, nothing to show");
        return Ok(());
    }

    let rendered = picker::render(&list);
    let Some(selected) = picker::invoke(&rendered, list.len(), &config.picker_command)? else {
        return Ok(());
    };

    let position = picker::resolve(&selected)?;
    let text = list.select(position, config.promote_on_select)?;

    if config.promote_on_select {
        save_history(&list)?;
    }

    clipboard::write_clipboard(&config.clipboard_command, &text)?;

    Ok(())
}

fn handle_delete(config: &Config) -> Result<()> {
    let mut list = load_history(config.max_entries)?;
    if list.is_empty() {
        info!("history is empty, nothing to delete");
        return Ok(());
    }

    let rendered = picker::render(&list);
    let Some(selected) = picker::invoke(&rendered, list.len(), &config.picker_command)? else {
        return Ok(());
    };

    let position = picker::resolve(&selected)?;
    list.delete(position)?;
    save_history(&list)?;

    debug!(position, "deleted history entry");

    Ok(())
}

fn handle_list(config: &Config) -> Result<()> {
    let list = load_history(config.max_entries)?;

    for entry in &list.entries {
        println!(
            "{}{}{}",
            entry.position,
            picker::SEPARATOR,
            picker::clean_text(&entry.text)
        );
    }

    Ok(())
}
