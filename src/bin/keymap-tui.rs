// j2me-keymap TUI
// Interactive key binding editor

#[path = "../tui/mod.rs"]
mod tui;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use keymap_core::{CaptureFilter, FileStorage, KeyBindingStore, Settings, Storage, STORAGE_KEY};

use tui::app::App;

#[derive(Parser, Debug)]
#[command(name = "keymap-tui")]
#[command(version)]
#[command(about = "Interactive key binding editor for the J2ME emulator", long_about = None)]
struct Args {
    /// TOML settings file (default: ~/.config/j2me-keymap/settings.toml)
    #[arg(short, long, value_name = "SETTINGS")]
    settings: Option<PathBuf>,

    /// Directory holding the saved bindings
    #[arg(long, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    /// Write debug logs to this file (the terminal is owned by the UI)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let mut settings = Settings::load(args.settings.as_deref()).context("Failed to load settings")?;
    if let Some(dir) = args.storage_dir {
        settings.set_storage_dir(dir);
    }

    let storage = FileStorage::new(settings.storage_dir()?);
    let location = storage.item_path(STORAGE_KEY)?.display().to_string();
    log::info!("Editing bindings in {}", location);

    let storage: Box<dyn Storage> = Box::new(storage);
    let store = KeyBindingStore::new(storage);
    let filter = CaptureFilter::with_reserved(settings.reserved_keys().iter().cloned());

    tui::run(App::new(store, filter, location)).context("Terminal UI failed")?;
    Ok(())
}
