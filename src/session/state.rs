use crate::storage::Snapshot;
use std::collections::HashSet;

/// In-memory email list plus the set of addresses copied so far.
///
/// The checked set keeps insertion order so it serializes the same way every time.
/// Importing a new list does not touch the checked set; only [`SessionState::clear`] does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    emails: Vec<String>,
    checked: Vec<String>,
    checked_lookup: HashSet<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut state = Self {
            emails: snapshot.emails,
            ..Self::default()
        };
        for email in snapshot.checked {
            state.mark_checked(&email);
        }
        state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            emails: self.emails.clone(),
            checked: self.checked.clone(),
        }
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn email_at(&self, index: usize) -> Option<&str> {
        self.emails.get(index).map(String::as_str)
    }

    pub fn is_checked(&self, email: &str) -> bool {
        self.checked_lookup.contains(email)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    pub fn total(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn replace_emails(&mut self, emails: Vec<String>) {
        self.emails = emails;
    }

    /// Returns `true` when the address was not checked before.
    pub fn mark_checked(&mut self, email: &str) -> bool {
        if self.checked_lookup.insert(email.to_string()) {
            self.checked.push(email.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.emails.clear();
        self.checked.clear();
        self.checked_lookup.clear();
    }

    pub fn progress_label(&self) -> String {
        format!("{}/{} emails checked", self.checked_count(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(emails: &[&str]) -> SessionState {
        let mut state = SessionState::new();
        state.replace_emails(emails.iter().map(|e| e.to_string()).collect());
        state
    }

    #[test]
    fn test_new_is_empty() {
        let state = SessionState::new();
        assert!(state.is_empty());
        assert_eq!(state.progress_label(), "0/0 emails checked");
    }

    #[test]
    fn test_mark_checked_is_idempotent() {
        let mut state = state_with(&["a@x.com", "b@y.com"]);

        assert!(state.mark_checked("a@x.com"));
        assert!(!state.mark_checked("a@x.com"));

        assert_eq!(state.checked_count(), 1);
        assert_eq!(state.progress_label(), "1/2 emails checked");
    }

    #[test]
    fn test_duplicates_share_checked_state() {
        let mut state = state_with(&["a@x.com", "a@x.com"]);
        state.mark_checked("a@x.com");

        assert!(state.is_checked(state.email_at(1).unwrap()));
        assert_eq!(state.progress_label(), "1/2 emails checked");
    }

    #[test]
    fn test_replace_keeps_checked_set() {
        let mut state = state_with(&["a@x.com"]);
        state.mark_checked("a@x.com");

        state.replace_emails(vec!["b@y.com".to_string()]);

        assert!(state.is_checked("a@x.com"));
        assert_eq!(state.progress_label(), "1/1 emails checked");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = state_with(&["a@x.com", "b@y.com"]);
        state.mark_checked("b@y.com");

        state.clear();

        assert!(state.is_empty());
        assert!(!state.is_checked("b@y.com"));
        assert_eq!(state.progress_label(), "0/0 emails checked");
    }

    #[test]
    fn test_snapshot_preserves_checked_order() {
        let mut state = state_with(&["a@x.com", "b@y.com", "c@z.com"]);
        state.mark_checked("c@z.com");
        state.mark_checked("a@x.com");

        let restored = SessionState::from_snapshot(state.snapshot());

        assert_eq!(restored.snapshot().checked, vec!["c@z.com", "a@x.com"]);
        assert_eq!(restored, state);
    }
}
