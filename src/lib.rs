// ============================================================================
// celebdesk library
// ============================================================================

pub mod config;
pub mod core;
pub mod editor;
pub mod session;
pub mod source;
pub mod store;

// Re-export main types for convenience
pub use self::config::{AppConfig, Cli};
pub use self::core::{Clock, FixedClock, Gender, Profile, ProfileId, Result, RosterError, SystemClock};
pub use self::editor::{EditBuffer, EditStart, FieldUpdate, ProfileEditor, ProfileField, SaveOutcome};
pub use self::session::{Session, ViewState};
pub use self::source::{FileSource, HttpSource, ProfileSource, load_or_empty, source_for};
pub use self::store::Roster;
