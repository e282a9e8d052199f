use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dialoguer::Confirm;
use email_checklist::app::AppState;
use email_checklist::cli::{Cli, Commands};
use email_checklist::clipboard::SystemClipboard;
use email_checklist::config::Config;
use email_checklist::import::{SheetSource, SheetsClient, import_file};
use email_checklist::logging::init_file_logging;
use email_checklist::session::Checklist;
use email_checklist::storage::{SqliteStore, StatePersistence};
use email_checklist::ui::{self, theme::Theme};
use std::path::Path;
use tracing::{info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_file_logging() {
        eprintln!("Warning: {e:#}");
    }

    let config = Config::load()?;
    let store = SqliteStore::open_default()?;
    let db_path = store.path().to_path_buf();
    let mut checklist = Checklist::load(StatePersistence::new(Box::new(store)))?;

    match cli.command {
        Some(Commands::Import { path }) => handle_import(&mut checklist, &path)?,
        Some(Commands::ImportSheet { url }) => handle_import_sheet(&mut checklist, &config, &url)?,
        Some(Commands::Show) => handle_show(&checklist),
        Some(Commands::Copy { index }) => handle_copy(&mut checklist, index)?,
        Some(Commands::Clear { yes }) => handle_clear(&mut checklist, yes)?,
        None => {
            info!("Launching TUI");
            let theme = Theme::from_config(&config);
            let state = AppState::new(checklist, Box::new(SystemClipboard::new()), theme, config);
            ui::run_tui(state, Some(&db_path))?;
        }
    }

    Ok(())
}

fn handle_import(checklist: &mut Checklist, path: &Path) -> Result<()> {
    match import_file(path)? {
        Some(emails) => {
            let count = emails.len();
            checklist.apply_import(emails)?;
            println!("✓ Imported {count} emails from {}", path.display());
        }
        None => {
            println!("Nothing imported: only .csv and .xlsx files are supported");
        }
    }
    Ok(())
}

fn handle_import_sheet(checklist: &mut Checklist, config: &Config, url: &str) -> Result<()> {
    let client = SheetsClient::from_config(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let emails = runtime.block_on(client.fetch_first_column(url))?;
    let count = emails.len();
    checklist.apply_import(emails)?;

    println!("✓ Imported {count} emails from spreadsheet");
    Ok(())
}

fn handle_show(checklist: &Checklist) {
    let session = checklist.state();

    if session.is_empty() {
        println!("No emails loaded.");
        return;
    }

    println!("\n📋 {}\n", session.progress_label());

    for (idx, email) in session.emails().iter().enumerate() {
        let marker = if session.is_checked(email) { "[x]" } else { "[ ]" };
        println!("{:>4}. {} {}", idx + 1, marker, email);
    }

    println!();
}

fn handle_copy(checklist: &mut Checklist, index: usize) -> Result<()> {
    let position = index
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Positions start at 1"))?;

    let mut clipboard = SystemClipboard::holding();
    if clipboard.holds_until_replaced() && checklist.state().email_at(position).is_some() {
        eprintln!("Holding the clipboard until something else is copied...");
    }

    match checklist.copy_at(position, &mut clipboard)? {
        Some(true) => {
            let email = checklist.state().email_at(position).unwrap_or_default();
            println!("✓ Copied {email} ({})", checklist.state().progress_label());
        }
        Some(false) => {
            warn!(index, "Copy failed");
            println!("Could not copy to the clipboard; see the log for details");
        }
        None => {
            return Err(anyhow!(
                "No email at position {index} (list has {})",
                checklist.state().total()
            ));
        }
    }
    Ok(())
}

fn handle_clear(checklist: &mut Checklist, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt("Are you sure you want to clear the emails list?")
            .default(false)
            .interact()?;

    if checklist.clear(confirmed)? {
        println!("✓ Cleared ({})", checklist.state().progress_label());
    }
    Ok(())
}
