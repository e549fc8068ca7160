use std::collections::HashSet;
use tracing::{debug, error};

use super::filter::filter_by_name;
use crate::core::{Profile, ProfileId};

/// Owns the full profile list, the filtered view derived from the current
/// search term, and the single edit-mode designation.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    records: Vec<Profile>,
    filtered: Vec<Profile>,
    search_term: String,
    edit_mode: Option<ProfileId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection.
    ///
    /// Ids must be unique: a repeated id is logged and only its first
    /// occurrence is kept.
    pub fn load(&mut self, records: Vec<Profile>) {
        let mut seen = HashSet::with_capacity(records.len());
        let mut unique = Vec::with_capacity(records.len());
        for profile in records {
            if seen.insert(profile.id) {
                unique.push(profile);
            } else {
                error!(id = profile.id, name = %profile.full_name(), "duplicate profile id dropped");
            }
        }
        debug!(count = unique.len(), "roster loaded");
        self.records = unique;
        self.refilter();
    }

    /// Recompute the filtered view for `term`.
    pub fn search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.refilter();
        debug!(term, matches = self.filtered.len(), "search applied");
    }

    /// Replace the record with `updated.id` and leave edit mode.
    ///
    /// Returns `false` when no record has that id; edit mode is cleared
    /// either way.
    pub fn edit(&mut self, updated: Profile) -> bool {
        let id = updated.id;
        let replaced = match self.records.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        };
        if replaced {
            self.refilter();
        }
        self.edit_mode = None;
        debug!(id, replaced, "edit committed");
        replaced
    }

    /// Remove the record with `id` from both views.
    pub fn delete(&mut self, id: ProfileId) -> bool {
        let before = self.records.len();
        self.records.retain(|p| p.id != id);
        self.filtered.retain(|p| p.id != id);
        let removed = self.records.len() != before;
        if removed && self.edit_mode == Some(id) {
            self.edit_mode = None;
        }
        debug!(id, removed, "delete applied");
        removed
    }

    /// Designate `target` as the record in edit mode.
    ///
    /// `Some(id)` is ignored while another record is already in edit mode
    /// or when no record has that id. `None` always clears. Returns whether
    /// the state now matches `target`.
    pub fn set_edit_mode(&mut self, target: Option<ProfileId>) -> bool {
        match target {
            None => {
                self.edit_mode = None;
                true
            }
            Some(id) if self.get(id).is_none() => false,
            Some(id) if self.edit_mode.is_none() => {
                self.edit_mode = Some(id);
                true
            }
            Some(id) => self.edit_mode == Some(id),
        }
    }

    pub fn edit_mode(&self) -> Option<ProfileId> {
        self.edit_mode
    }

    pub fn all(&self) -> &[Profile] {
        &self.records
    }

    pub fn filtered(&self) -> &[Profile] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.records.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn refilter(&mut self) {
        self.filtered = filter_by_name(&self.records, &self.search_term);
    }
}
