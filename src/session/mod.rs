pub mod state;

use crate::clipboard::ClipboardSink;
use crate::storage::StatePersistence;
use anyhow::{Context, Result};
use tracing::{error, info};

pub use state::SessionState;

/// Sole owner of the session state; every mutation is persisted before returning.
pub struct Checklist {
    state: SessionState,
    persistence: StatePersistence,
}

impl Checklist {
    /// Populate the session from whatever the store already holds.
    pub fn load(persistence: StatePersistence) -> Result<Self> {
        let snapshot = persistence.load().context("Failed to load saved state")?;
        Ok(Self {
            state: SessionState::from_snapshot(snapshot),
            persistence,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replace the session with what is currently stored.
    pub fn reload(&mut self) -> Result<()> {
        let snapshot = self.persistence.load()?;
        self.state = SessionState::from_snapshot(snapshot);
        Ok(())
    }

    /// Replace the email list wholesale with a freshly imported one.
    pub fn apply_import(&mut self, emails: Vec<String>) -> Result<()> {
        info!(count = emails.len(), "Replacing email list");
        self.state.replace_emails(emails);
        self.save()
    }

    /// Copy `email` and mark it checked.
    ///
    /// A clipboard failure is logged and reported as `Ok(false)`; the session is left untouched.
    pub fn copy_and_check(&mut self, email: &str, clipboard: &mut dyn ClipboardSink) -> Result<bool> {
        if let Err(e) = clipboard.write_text(email) {
            error!(error = %e, "Error copying");
            return Ok(false);
        }

        self.state.mark_checked(email);
        self.save()?;
        Ok(true)
    }

    /// Copy the address at `index`; `Ok(None)` when the index is out of range.
    pub fn copy_at(&mut self, index: usize, clipboard: &mut dyn ClipboardSink) -> Result<Option<bool>> {
        let Some(email) = self.state.email_at(index).map(str::to_string) else {
            return Ok(None);
        };
        self.copy_and_check(&email, clipboard).map(Some)
    }

    /// Empty both collections, but only once `confirmed` says so.
    pub fn clear(&mut self, confirmed: bool) -> Result<bool> {
        if !confirmed {
            return Ok(false);
        }
        info!("Clearing email list");
        self.state.clear();
        self.save()?;
        Ok(true)
    }

    fn save(&mut self) -> Result<()> {
        self.persistence
            .save(&self.state.snapshot())
            .context("Failed to save state")
    }
}
