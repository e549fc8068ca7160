//! The single owning state container behind the terminal view.
//!
//! Every user intent (search, expand, edit, save, cancel, delete) enters
//! through a `Session` method; the view only reads from it.

pub mod notice;

pub use notice::{DEFAULT_NOTICE_TTL, TransientNotice};

use chrono::NaiveDate;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::core::{Clock, Profile, ProfileId, Result, RosterError, SystemClock};
use crate::editor::{
    EditBuffer, EditStart, FieldUpdate, INELIGIBLE_MESSAGE, ProfileEditor, ProfileField,
    SaveOutcome,
};
use crate::store::Roster;

/// How a single profile is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Collapsed,
    Viewing,
    Editing,
}

pub struct Session {
    roster: Roster,
    editor: ProfileEditor,
    clock: Arc<dyn Clock>,
    expanded: Option<ProfileId>,
    pending_delete: Option<ProfileId>,
    transient: Option<TransientNotice>,
    blocking: Option<String>,
    notice_ttl: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl Session {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            roster: Roster::new(),
            editor: ProfileEditor::new(),
            clock,
            expanded: None,
            pending_delete: None,
            transient: None,
            blocking: None,
            notice_ttl: DEFAULT_NOTICE_TTL,
        }
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.editor.active()
    }

    pub fn expanded(&self) -> Option<ProfileId> {
        self.expanded
    }

    pub fn pending_delete(&self) -> Option<ProfileId> {
        self.pending_delete
    }

    pub fn transient_notice(&self) -> Option<&TransientNotice> {
        self.transient.as_ref()
    }

    pub fn blocking_notice(&self) -> Option<&str> {
        self.blocking.as_deref()
    }

    pub fn view_state(&self, id: ProfileId) -> ViewState {
        if self.expanded != Some(id) {
            ViewState::Collapsed
        } else if self.roster.edit_mode() == Some(id) {
            ViewState::Editing
        } else {
            ViewState::Viewing
        }
    }

    pub fn load(&mut self, records: Vec<Profile>) {
        info!(count = records.len(), "profiles loaded");
        self.roster.load(records);
    }

    pub fn search(&mut self, term: &str) {
        self.roster.search(term);
    }

    /// Expand `id`, or collapse it if it is already expanded.
    ///
    /// Ignored while any profile is being edited. Returns whether the
    /// toggle happened.
    pub fn toggle_expanded(&mut self, id: ProfileId) -> bool {
        if self.roster.edit_mode().is_some() {
            return false;
        }
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
        true
    }

    /// Ask to edit an expanded profile.
    ///
    /// A profile aged 20 or younger raises the transient ineligibility
    /// notice instead.
    pub fn begin_edit(&mut self, id: ProfileId) -> EditStart {
        if self.expanded != Some(id) {
            return EditStart::Hidden;
        }
        let today = self.today();
        let outcome = self.editor.begin(&mut self.roster, id, today);
        if outcome == EditStart::Ineligible {
            self.transient = Some(TransientNotice::new(
                INELIGIBLE_MESSAGE,
                Instant::now(),
                self.notice_ttl,
            ));
        }
        outcome
    }

    pub fn update_field(&mut self, field: ProfileField, value: &str) -> FieldUpdate {
        let today = self.today();
        self.editor.update(field, value, today)
    }

    /// Save the active edit. A validation failure is also shown as a
    /// blocking notice.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let today = self.today();
        match self.editor.save(&mut self.roster, today) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                warn!(error = %err, "save refused");
                self.blocking = Some(validation_text(&err));
                Err(err)
            }
        }
    }

    pub fn cancel(&mut self) {
        self.editor.cancel(&mut self.roster);
    }

    /// Open the delete confirmation for an expanded profile that is not
    /// being edited.
    pub fn request_delete(&mut self, id: ProfileId) -> bool {
        if self.view_state(id) != ViewState::Viewing || self.roster.get(id).is_none() {
            return false;
        }
        self.pending_delete = Some(id);
        true
    }

    /// Delete the profile awaiting confirmation.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };
        let removed = self.roster.delete(id);
        self.editor.forget(id);
        if self.expanded == Some(id) {
            self.expanded = None;
        }
        if removed {
            info!(id, "profile deleted");
        }
        removed
    }

    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn dismiss_blocking(&mut self) {
        self.blocking = None;
    }

    /// Drop the transient notice if its deadline has passed.
    pub fn expire_notices(&mut self, now: Instant) {
        if self.transient.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.transient = None;
        }
    }
}

fn validation_text(err: &RosterError) -> String {
    match err {
        RosterError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}
