//! # Roster
//!
//! The list store and its pending entry. This is the whole data model:
//! an ordered list of submitted names plus the one in-progress name bound
//! to the text input.
//!
//! The roster lives exactly as long as the home screen. Nothing here is
//! persisted; the results screen only ever sees the encoded payload.

use serde::{Deserialize, Serialize};

/// One submitted name. Duplicates are allowed, identity is the string value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Names every fresh roster starts with, in this order.
const SEED_NAMES: [&str; 3] = ["Tanu", "Tina", "Tono"];

/// Ordered collection of committed entries plus the pending (not yet
/// committed) entry bound to the input field.
///
/// Invariant: `entries` never contains a blank name. [`Roster::commit`]
/// is the only way in, and it rejects blank/whitespace-only names.
#[derive(Debug)]
pub struct Roster {
    entries: Vec<Entry>,
    pending: Entry,
}

impl Roster {
    /// A roster pre-populated with the fixed seed names.
    pub fn seeded() -> Self {
        Self {
            entries: SEED_NAMES.iter().map(|name| Entry::new(*name)).collect(),
            pending: Entry::new(""),
        }
    }

    /// An empty roster with no seeds. Used by tests that want a clean slate.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            pending: Entry::new(""),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending_name(&self) -> &str {
        &self.pending.name
    }

    /// Replace the pending entry's name. No validation here: any string,
    /// including a blank one, is accepted into the pending slot.
    pub fn update_pending(&mut self, text: impl Into<String>) {
        self.pending = Entry::new(text);
    }

    /// Append a copy of the pending entry and reset the pending slot.
    ///
    /// A name that is blank after trimming is rejected: the roster and the
    /// pending entry are left untouched and no error is raised. The stored
    /// value is the name as typed, untrimmed.
    ///
    /// Returns whether an entry was added.
    pub fn commit(&mut self) -> bool {
        if self.pending.name.trim().is_empty() {
            return false;
        }
        self.entries.push(self.pending.clone());
        self.pending = Entry::new("");
        true
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_roster_has_fixed_names_in_order() {
        let roster = Roster::seeded();
        let names: Vec<&str> = roster.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Tanu", "Tina", "Tono"]);
        assert_eq!(roster.pending_name(), "");
    }

    #[test]
    fn test_commit_appends_and_resets_pending() {
        let mut roster = Roster::seeded();
        roster.update_pending("Budi");

        assert!(roster.commit());

        let names: Vec<&str> = roster.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Tanu", "Tina", "Tono", "Budi"]);
        assert_eq!(roster.pending_name(), "");
    }

    #[test]
    fn test_blank_commit_is_a_noop() {
        let mut roster = Roster::seeded();

        assert!(!roster.commit());
        assert_eq!(roster.len(), 3);

        roster.update_pending("   ");
        assert!(!roster.commit());
        assert_eq!(roster.len(), 3);
        // The rejected pending value is left as typed.
        assert_eq!(roster.pending_name(), "   ");
    }

    #[test]
    fn test_committed_name_is_stored_untrimmed() {
        let mut roster = Roster::empty();
        roster.update_pending("  Budi ");
        assert!(roster.commit());
        assert_eq!(roster.entries()[0].name, "  Budi ");
    }

    #[test]
    fn test_duplicate_names_are_allowed() {
        let mut roster = Roster::empty();
        for _ in 0..2 {
            roster.update_pending("Tanu");
            assert!(roster.commit());
        }
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.entries()[0], roster.entries()[1]);
    }

    #[test]
    fn test_update_pending_copies_not_aliases() {
        let mut roster = Roster::empty();
        roster.update_pending("Tanu");
        roster.commit();
        // Editing the pending slot after a commit must not touch the
        // committed entry.
        roster.update_pending("Tina");
        assert_eq!(roster.entries()[0].name, "Tanu");
    }
}
