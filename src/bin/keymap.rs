// j2me-keymap CLI
// Inspect and edit emulator key bindings from the shell

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use keymap_core::{
    Action, CaptureFilter, CaptureOutcome, FileStorage, KeyBindingStore, KeyId, Settings,
    STORAGE_KEY,
};

/// Key binding editor for the J2ME emulator
#[derive(Parser, Debug)]
#[command(name = "keymap")]
#[command(author = "j2me-keymap contributors")]
#[command(version)]
#[command(about = "Key binding editor for the J2ME emulator", long_about = None)]
struct Args {
    /// TOML settings file (default: ~/.config/j2me-keymap/settings.toml)
    #[arg(short, long, value_name = "SETTINGS")]
    settings: Option<PathBuf>,

    /// Directory holding the saved bindings
    #[arg(long, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every action with its current keys
    List,
    /// Show the action catalog with default keys
    Actions,
    /// Print the action a key is bound to
    Lookup { key: String },
    /// Bind a key to an action (moves it from any other action)
    Add { action: String, key: String },
    /// Unbind a key from an action
    Remove { action: String, key: String },
    /// Restore all default bindings
    Reset,
    /// Print the bindings file and settings file locations
    Path,
    /// Write a commented settings file with the defaults
    InitSettings {
        /// Replace an existing settings file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn open_store(settings: &Settings) -> Result<(KeyBindingStore<FileStorage>, PathBuf)> {
    let dir = settings.storage_dir()?;
    let storage = FileStorage::new(&dir);
    let path = storage.item_path(STORAGE_KEY)?;
    log::debug!("Using bindings file {}", path.display());
    Ok((KeyBindingStore::new(storage), path))
}

fn format_keys(keys: &[KeyId]) -> String {
    keys.iter()
        .map(|k| format!("{} ({})", k.friendly_name(), k))
        .collect::<Vec<_>>()
        .join(", ")
}

fn init_settings(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Settings::default_path().context("No config directory on this platform")?,
    };
    Settings::write_default(&path, force)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let command = match args.command {
        Command::InitSettings { force } => return init_settings(args.settings, force),
        command => command,
    };

    let mut settings = Settings::load(args.settings.as_deref()).context("Failed to load settings")?;
    if let Some(dir) = args.storage_dir {
        settings.set_storage_dir(dir);
    }

    match command {
        Command::InitSettings { .. } => {}
        Command::Path => {
            let (_, path) = open_store(&settings)?;
            println!("bindings: {}", path.display());
            match settings.source_path() {
                Some(source) => println!("settings: {}", source.display()),
                None => println!("settings: none (built-in defaults)"),
            }
        }
        Command::Actions => {
            for info in keymap_core::catalog() {
                println!(
                    "{:<11} {:<16} {}",
                    info.action.id(),
                    info.label,
                    format_keys(&info.default_keys)
                );
            }
        }
        Command::List => {
            let (store, _) = open_store(&settings)?;
            for (action, keys) in store.bindings() {
                println!("{:<11} {:<16} {}", action.id(), action.label(), format_keys(keys));
            }
        }
        Command::Lookup { key } => {
            let (store, _) = open_store(&settings)?;
            match store.lookup_action(&key) {
                Some(action) => println!("{} ({})", action.id(), action.label()),
                None => bail!("{} is not bound", key),
            }
        }
        Command::Add { action, key } => {
            let filter = CaptureFilter::with_reserved(settings.reserved_keys().iter().cloned());
            let key = match filter.classify(&key) {
                CaptureOutcome::Accept(key) => key,
                CaptureOutcome::Cancel | CaptureOutcome::Ignore => {
                    bail!("{} is reserved and cannot be bound", key)
                }
            };
            let (mut store, _) = open_store(&settings)?;
            let previous = store.lookup_action(key.as_str());
            store.add_binding(&action, key.as_str())?;
            match previous {
                Some(owner) if owner.id() != action => {
                    println!("{} moved from {} to {}", key, owner.id(), action)
                }
                _ => println!("{} bound to {}", key, action),
            }
        }
        Command::Remove { action, key } => {
            let (mut store, _) = open_store(&settings)?;
            store.remove_binding(&action, &key)?;
            println!(
                "{} removed; {} now has {}",
                key,
                action,
                format_keys(store.keys_for(&action))
            );
        }
        Command::Reset => {
            let (mut store, _) = open_store(&settings)?;
            store.reset_to_defaults();
            println!("Restored default bindings for {} actions", Action::all().count());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
