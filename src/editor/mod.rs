//! Edit workflow for a single profile: eligibility gate, buffered field
//! changes, save and cancel.

pub mod buffer;

pub use buffer::{EditBuffer, FieldUpdate, ProfileField};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::core::{Profile, ProfileId, Result, RosterError};
use crate::store::Roster;

/// Profiles must be strictly older than this to be edited.
pub const MIN_EDITABLE_AGE: i32 = 20;

pub const INELIGIBLE_MESSAGE: &str = "Only celebrities above 20 years can be edited";

pub fn is_editable(profile: &Profile, today: NaiveDate) -> bool {
    profile.age_on(today) > MIN_EDITABLE_AGE
}

/// Outcome of asking to edit a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStart {
    Started,
    /// The profile is too young to edit.
    Ineligible,
    /// Another profile is already being edited.
    Busy,
    /// The profile is not expanded.
    Hidden,
    Missing,
}

/// Outcome of a save that did not fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The stored profile is not (or no longer) old enough.
    Ineligible,
    /// Nothing was changed since the edit started.
    Unchanged,
    /// No edit in progress.
    Idle,
}

/// Holds the edit buffer of the profile currently in edit mode.
#[derive(Debug, Default, Clone)]
pub struct ProfileEditor {
    active: Option<EditBuffer>,
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&EditBuffer> {
        self.active.as_ref()
    }

    pub fn editing(&self) -> Option<ProfileId> {
        self.active.as_ref().map(EditBuffer::id)
    }

    /// Enter edit mode for `id` if it is old enough and nothing else is
    /// being edited.
    pub fn begin(&mut self, roster: &mut Roster, id: ProfileId, today: NaiveDate) -> EditStart {
        let Some(profile) = roster.get(id).cloned() else {
            return EditStart::Missing;
        };
        if !is_editable(&profile, today) {
            debug!(id, age = profile.age_on(today), "edit refused, too young");
            return EditStart::Ineligible;
        }
        if roster.edit_mode().is_some() && roster.edit_mode() != Some(id) {
            return EditStart::Busy;
        }
        if roster.edit_mode() == Some(id) && self.editing() == Some(id) {
            return EditStart::Started;
        }
        roster.set_edit_mode(Some(id));
        self.active = Some(EditBuffer::new(profile));
        debug!(id, "edit started");
        EditStart::Started
    }

    /// Write a field of the active buffer. `Rejected` when idle.
    pub fn update(&mut self, field: ProfileField, value: &str, today: NaiveDate) -> FieldUpdate {
        match self.active.as_mut() {
            Some(buffer) => buffer.set_field(field, value, today),
            None => FieldUpdate::Rejected,
        }
    }

    /// Commit the active buffer into `roster`.
    ///
    /// An empty field or an unknown gender is a validation error and keeps
    /// the edit open.
    pub fn save(&mut self, roster: &mut Roster, today: NaiveDate) -> Result<SaveOutcome> {
        let Some(buffer) = self.active.as_ref() else {
            return Ok(SaveOutcome::Idle);
        };
        let stored = roster.get(buffer.id()).unwrap_or(buffer.original());
        if !is_editable(stored, today) {
            return Ok(SaveOutcome::Ineligible);
        }
        if !buffer.is_dirty() {
            return Ok(SaveOutcome::Unchanged);
        }
        if let Some(field) = buffer.first_empty_field() {
            debug!(id = buffer.id(), %field, "save refused, empty field");
            return Err(RosterError::validation("All fields must be filled."));
        }
        let updated = buffer.to_profile()?;
        let id = updated.id;
        roster.edit(updated);
        self.active = None;
        info!(id, "profile saved");
        Ok(SaveOutcome::Saved)
    }

    /// Drop the buffer and leave edit mode without touching the roster's
    /// records.
    pub fn cancel(&mut self, roster: &mut Roster) {
        if let Some(mut buffer) = self.active.take() {
            buffer.reset();
            debug!(id = buffer.id(), "edit canceled");
        }
        roster.set_edit_mode(None);
    }

    /// Forget the buffer if its profile is gone from the roster.
    pub fn forget(&mut self, id: ProfileId) {
        if self.editing() == Some(id) {
            self.active = None;
        }
    }
}
