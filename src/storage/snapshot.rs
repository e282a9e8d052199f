use super::KeyValueStore;
use anyhow::{Context, Result};
use tracing::{debug, warn};

pub const EMAILS_KEY: &str = "emails";
pub const CHECKED_KEY: &str = "checkedEmails";

/// Serialized form of the session: the email list and the checked set in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub emails: Vec<String>,
    pub checked: Vec<String>,
}

/// Reads and writes a [`Snapshot`] as two JSON string arrays under fixed keys.
pub struct StatePersistence {
    store: Box<dyn KeyValueStore>,
}

impl StatePersistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Snapshot> {
        let emails = self.load_list(EMAILS_KEY)?;
        let checked = self.load_list(CHECKED_KEY)?;
        debug!(
            emails = emails.len(),
            checked = checked.len(),
            "Loaded snapshot"
        );
        Ok(Snapshot { emails, checked })
    }

    pub fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        let emails = serde_json::to_string(&snapshot.emails)?;
        let checked = serde_json::to_string(&snapshot.checked)?;
        self.store
            .set_many(&[(EMAILS_KEY, emails.as_str()), (CHECKED_KEY, checked.as_str())])
            .context("Failed to save checklist state")?;
        Ok(())
    }

    fn load_list(&self, key: &str) -> Result<Vec<String>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                warn!(key, error = %e, "Stored value is not a list of strings, starting empty");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_absent_keys_load_empty() {
        let persistence = StatePersistence::new(Box::new(MemoryStore::new()));
        assert_eq!(persistence.load().unwrap(), Snapshot::default());
    }

    #[test]
    fn test_save_writes_both_keys_as_json() {
        let mut store = MemoryStore::new();
        store.set(EMAILS_KEY, "[\"old@x.com\"]").unwrap();
        let mut persistence = StatePersistence::new(Box::new(store));

        let snapshot = Snapshot {
            emails: vec!["a@x.com".into(), "a@x.com".into()],
            checked: vec!["a@x.com".into()],
        };
        persistence.save(&snapshot).unwrap();

        assert_eq!(
            persistence.store.get(EMAILS_KEY).unwrap().as_deref(),
            Some("[\"a@x.com\",\"a@x.com\"]")
        );
        assert_eq!(
            persistence.store.get(CHECKED_KEY).unwrap().as_deref(),
            Some("[\"a@x.com\"]")
        );
        assert_eq!(persistence.load().unwrap(), snapshot);
    }

    #[test]
    fn test_corrupt_value_is_treated_as_empty() {
        let mut store = MemoryStore::new();
        store.set(EMAILS_KEY, "{not json").unwrap();
        store.set(CHECKED_KEY, "[\"a@x.com\"]").unwrap();
        let persistence = StatePersistence::new(Box::new(store));

        let snapshot = persistence.load().unwrap();
        assert!(snapshot.emails.is_empty());
        assert_eq!(snapshot.checked, vec!["a@x.com".to_string()]);
    }
}
