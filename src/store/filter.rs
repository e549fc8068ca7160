//! Name search over the roster.
//!
//! The filtered view is always rebuilt from the full collection, never
//! narrowed incrementally, so broadening a term after narrowing works.

use crate::core::Profile;

/// Case-insensitive substring match of `term` against `"{first} {last}"`.
pub fn matches_name(profile: &Profile, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    profile
        .full_name()
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// Records of `records` whose full name contains `term`, in original order.
pub fn filter_by_name(records: &[Profile], term: &str) -> Vec<Profile> {
    records
        .iter()
        .filter(|p| matches_name(p, term))
        .cloned()
        .collect()
}
