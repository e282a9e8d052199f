pub mod components;
pub mod theme;

use crate::app::{event::handle_key_event, AppState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{debug, warn};

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

/// Run the interactive list until the user quits.
///
/// `watch_path` is the state database; writes to it from other processes trigger a reload.
pub fn run_tui(mut state: AppState, watch_path: Option<&Path>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (db_tx, db_rx) = mpsc::channel();
    let _watcher = watch_path.and_then(|path| setup_database_watcher(path, db_tx));

    let result = run_app(&mut terminal, &mut state, db_rx);
    terminal.show_cursor()?;

    result
}

fn setup_database_watcher(path: &Path, tx: mpsc::Sender<()>) -> Option<RecommendedWatcher> {
    let watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res
                && event.kind.is_modify()
            {
                let _ = tx.send(());
            }
        },
        Config::default(),
    );

    match watcher {
        Ok(mut w) => match w.watch(path, RecursiveMode::NonRecursive) {
            Ok(()) => Some(w),
            Err(e) => {
                warn!(error = %e, "Could not watch state database");
                None
            }
        },
        Err(e) => {
            warn!(error = %e, "Could not create file watcher");
            None
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    db_rx: mpsc::Receiver<()>,
) -> Result<()> {
    loop {
        state.clear_expired_status_message();
        state.clear_expired_pulse();
        state.check_import_results()?;

        terminal.draw(|f| {
            components::render(f, state);
        })?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key_event(key, state)?;
        }

        // Our own saves also touch the file; reloading then is harmless.
        let mut should_reload = false;
        while db_rx.try_recv().is_ok() {
            should_reload = true;
        }
        if should_reload {
            debug!("State database changed on disk, reloading");
            if let Err(e) = state.reload_from_store() {
                warn!(error = %e, "Reload after external change failed");
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
