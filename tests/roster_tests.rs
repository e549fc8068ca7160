/// Roster and search tests
///
/// Tests for loading, name search, edit commit and delete on the roster
/// Run with: cargo test --test roster_tests

use celebdesk::{Gender, Profile, Roster};
use chrono::NaiveDate;

fn profile(id: u64, first: &str, last: &str) -> Profile {
    Profile {
        id,
        first: first.to_string(),
        last: last.to_string(),
        dob: NaiveDate::from_ymd_opt(1975, 3, 9).unwrap(),
        gender: Gender::Female,
        country: "Spain".to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        picture: format!("https://example.com/{id}.jpg"),
        description: "Singer.".to_string(),
    }
}

fn loaded() -> Roster {
    let mut roster = Roster::new();
    roster.load(vec![
        profile(1, "Anna", "Smith"),
        profile(2, "Bob", "Stone"),
        profile(3, "Joanna", "Banks"),
        profile(4, "Carl", "Dean"),
    ]);
    roster
}

fn ids(records: &[Profile]) -> Vec<u64> {
    records.iter().map(|p| p.id).collect()
}

#[test]
fn test_load_sets_both_views() {
    let roster = loaded();
    assert_eq!(roster.len(), 4);
    assert_eq!(ids(roster.filtered()), vec![1, 2, 3, 4]);
    assert_eq!(roster.edit_mode(), None);
}

#[test]
fn test_search_is_case_insensitive() {
    let mut roster = loaded();
    roster.search("AN");
    assert_eq!(ids(roster.filtered()), vec![1, 3, 4]);

    roster.search("an");
    assert_eq!(ids(roster.filtered()), vec![1, 3, 4]);
}

#[test]
fn test_search_is_idempotent() {
    let mut roster = loaded();
    roster.search("st");
    let first = roster.filtered().to_vec();
    roster.search("st");
    assert_eq!(roster.filtered(), first.as_slice());
}

#[test]
fn test_search_can_broaden() {
    let mut roster = loaded();
    roster.search("anna s");
    assert_eq!(ids(roster.filtered()), vec![1]);

    roster.search("an");
    assert_eq!(ids(roster.filtered()), vec![1, 3, 4]);

    roster.search("");
    assert_eq!(ids(roster.filtered()), vec![1, 2, 3, 4]);
    assert_eq!(roster.filtered(), roster.all());
}

#[test]
fn test_search_no_match() {
    let mut roster = loaded();
    roster.search("zzz");
    assert!(roster.filtered().is_empty());
    assert_eq!(roster.len(), 4);
}

#[test]
fn test_edit_replaces_and_refilters() {
    let mut roster = loaded();
    roster.search("smith");
    roster.set_edit_mode(Some(1));

    let mut updated = profile(1, "Anna", "Jones");
    updated.country = "Portugal".to_string();
    assert!(roster.edit(updated.clone()));

    assert_eq!(roster.get(1), Some(&updated));
    // No longer matches the active term.
    assert!(roster.filtered().is_empty());
    assert_eq!(roster.edit_mode(), None);
}

#[test]
fn test_edit_unknown_id_is_noop() {
    let mut roster = loaded();
    let before = roster.all().to_vec();
    assert!(!roster.edit(profile(99, "Ghost", "Person")));
    assert_eq!(roster.all(), before.as_slice());
}

#[test]
fn test_delete_removes_from_both_views() {
    let mut roster = loaded();
    roster.search("an");
    assert!(roster.delete(3));

    assert_eq!(ids(roster.filtered()), vec![1, 4]);
    assert!(roster.get(3).is_none());

    roster.search("joanna");
    assert!(roster.filtered().is_empty());
    roster.search("");
    assert_eq!(ids(roster.filtered()), vec![1, 2, 4]);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut roster = loaded();
    assert!(!roster.delete(42));
    assert_eq!(roster.len(), 4);
}

#[test]
fn test_single_edit_mode() {
    let mut roster = loaded();
    assert!(roster.set_edit_mode(Some(1)));
    assert!(!roster.set_edit_mode(Some(2)));
    assert_eq!(roster.edit_mode(), Some(1));

    assert!(roster.set_edit_mode(None));
    assert!(roster.set_edit_mode(Some(2)));
    assert_eq!(roster.edit_mode(), Some(2));
}

#[test]
fn test_search_keeps_edit_mode() {
    let mut roster = loaded();
    roster.set_edit_mode(Some(2));
    roster.search("anna");
    assert_eq!(roster.edit_mode(), Some(2));
}

#[test]
fn test_duplicate_ids_keep_first_occurrence() {
    let mut roster = Roster::new();
    roster.load(vec![
        profile(1, "Alpha", "One"),
        profile(1, "Beta", "Two"),
        profile(2, "Carl", "Dean"),
    ]);
    assert_eq!(roster.len(), 2);
    assert_eq!(ids(roster.filtered()), vec![1, 2]);
    assert_eq!(roster.get(1).unwrap().first, "Alpha");

    assert!(roster.edit(profile(1, "Gamma", "One")));
    let firsts: Vec<&str> = roster.all().iter().map(|p| p.first.as_str()).collect();
    assert_eq!(firsts, vec!["Gamma", "Carl"]);

    assert!(roster.delete(1));
    assert_eq!(ids(roster.all()), vec![2]);
}

#[test]
fn test_edit_mode_for_missing_id_is_ignored() {
    let mut roster = loaded();
    assert!(!roster.set_edit_mode(Some(99)));
    assert_eq!(roster.edit_mode(), None);

    // A real record can still take edit mode afterwards.
    assert!(roster.set_edit_mode(Some(3)));
    assert_eq!(roster.edit_mode(), Some(3));
}
