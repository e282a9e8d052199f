use super::import_task::{ImportOutcome, PendingImport};
use super::mode::Mode;
use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::import::{import_file, SheetSource, SheetsClient};
use crate::session::Checklist;
use crate::ui::theme::Theme;
use anyhow::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

pub struct AppState {
    pub checklist: Checklist,
    pub clipboard: Box<dyn ClipboardSink>,
    pub cursor_position: usize,
    pub mode: Mode,
    pub edit_buffer: String,
    pub edit_cursor_pos: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub config: Config,
    pub alert_message: Option<String>,
    pub status_message: Option<(String, Instant)>,
    pub pulse: Option<(usize, Instant)>,
    pub pending_imports: Vec<PendingImport>,
}

impl AppState {
    pub fn new(
        checklist: Checklist,
        clipboard: Box<dyn ClipboardSink>,
        theme: Theme,
        config: Config,
    ) -> Self {
        Self {
            checklist,
            clipboard,
            cursor_position: 0,
            mode: Mode::Navigate,
            edit_buffer: String::new(),
            edit_cursor_pos: 0,
            should_quit: false,
            show_help: false,
            theme,
            config,
            alert_message: None,
            status_message: None,
            pulse: None,
            pending_imports: Vec::new(),
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let total = self.checklist.state().total();
        if total > 0 && self.cursor_position < total - 1 {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor_position = self.checklist.state().total().saturating_sub(1);
    }

    pub fn clamp_cursor(&mut self) {
        let total = self.checklist.state().total();
        if total > 0 {
            self.cursor_position = self.cursor_position.min(total - 1);
        } else {
            self.cursor_position = 0;
        }
    }

    /// Copy the row under the cursor; starts the highlight pulse on success.
    pub fn copy_selected(&mut self) -> Result<()> {
        let index = self.cursor_position;
        if let Some(true) = self.checklist.copy_at(index, self.clipboard.as_mut())? {
            self.pulse = Some((index, Instant::now()));
        }
        Ok(())
    }

    pub fn is_pulsing(&self, index: usize) -> bool {
        matches!(self.pulse, Some((i, _)) if i == index)
    }

    pub fn clear_expired_pulse(&mut self) {
        let ttl = Duration::from_millis(self.config.pulse_ms);
        if let Some((_, started)) = self.pulse
            && started.elapsed() >= ttl
        {
            self.pulse = None;
        }
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, shown_at)) = &self.status_message
            && shown_at.elapsed() >= STATUS_MESSAGE_TTL
        {
            self.status_message = None;
        }
    }

    /// Show a message that blocks the list until a key is pressed.
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert_message = Some(message.into());
        self.mode = Mode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_message = None;
        self.mode = Mode::Navigate;
    }

    pub fn start_prompt(&mut self, mode: Mode) {
        self.edit_buffer.clear();
        self.edit_cursor_pos = 0;
        self.mode = mode;
    }

    pub fn import_from_path(&mut self, raw_path: &str) -> Result<()> {
        let trimmed = raw_path.trim();
        if trimmed.is_empty() {
            self.show_alert("Please choose a file to import");
            return Ok(());
        }

        let path = PathBuf::from(trimmed);
        match import_file(&path) {
            Ok(Some(emails)) => self.apply_import(emails)?,
            Ok(None) => {}
            Err(e) => {
                error!(path = %path.display(), error = %e, "File import failed");
                self.set_status_message(e.to_string());
            }
        }
        Ok(())
    }

    pub fn start_remote_import(&mut self, url: &str) {
        let url = url.trim().to_string();
        match SheetsClient::from_config(&self.config) {
            Ok(client) => self.start_import_with(client, url),
            Err(e) => {
                warn!(error = %e, "Remote import unavailable");
                self.show_alert(e.to_string());
            }
        }
    }

    pub fn start_import_with<S>(&mut self, source: S, url: String)
    where
        S: SheetSource + Send + 'static,
    {
        info!(url = %url, "Starting remote import");
        self.set_status_message("Loading spreadsheet...");
        self.pending_imports.push(PendingImport::spawn(source, url));
    }

    /// Apply every remote import that has finished since the last frame,
    /// in the order they finished.
    pub fn check_import_results(&mut self) -> Result<()> {
        let mut finished: Vec<(Instant, String, ImportOutcome)> = Vec::new();
        self.pending_imports.retain(|pending| match pending.try_take() {
            Some((finished_at, outcome)) => {
                finished.push((finished_at, pending.url.clone(), outcome));
                false
            }
            None => true,
        });
        finished.sort_by_key(|(finished_at, _, _)| *finished_at);

        for (_, url, outcome) in finished {
            match outcome {
                Ok(emails) => self.apply_import(emails)?,
                Err(e) => {
                    error!(url = %url, error = %e, "Remote import failed");
                    self.show_alert(e.to_string());
                }
            }
        }
        Ok(())
    }

    pub fn has_pending_imports(&self) -> bool {
        !self.pending_imports.is_empty()
    }

    fn apply_import(&mut self, emails: Vec<String>) -> Result<()> {
        let count = emails.len();
        self.checklist.apply_import(emails)?;
        self.cursor_position = 0;
        self.pulse = None;
        self.set_status_message(format!("Imported {count} emails"));
        Ok(())
    }

    pub fn confirm_clear(&mut self, confirmed: bool) -> Result<()> {
        if self.checklist.clear(confirmed)? {
            self.cursor_position = 0;
            self.pulse = None;
        }
        self.mode = Mode::Navigate;
        Ok(())
    }

    pub fn open_link(&mut self) {
        let Some(url) = self.config.link_url.clone() else {
            self.set_status_message("No link_url configured");
            return;
        };
        if let Err(e) = open::that(&url) {
            error!(url = %url, error = %e, "Failed to open link");
            self.set_status_message("Could not open link");
        }
    }

    /// Reload the list from storage.
    /// Used when another process (e.g. the CLI) has written the state database.
    pub fn reload_from_store(&mut self) -> Result<()> {
        self.checklist.reload()?;
        self.clamp_cursor();
        Ok(())
    }
}
