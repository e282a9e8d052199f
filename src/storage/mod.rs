pub mod database;
pub mod snapshot;

use anyhow::Result;
use std::collections::HashMap;

pub use database::SqliteStore;
pub use snapshot::{Snapshot, StatePersistence, CHECKED_KEY, EMAILS_KEY};

/// Durable string-keyed storage. Absence of a key means "never written".
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Write several keys as one unit. Stores that can commit atomically should override this.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        for &(key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Volatile store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
