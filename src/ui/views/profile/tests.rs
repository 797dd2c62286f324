//! Tests for ProfileView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;
use crate::model::{Feedback, Profile};

use super::{EditFocus, ProfileAction, ProfileView};

fn test_profile(id: &str, name: &str) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@swapwise.in", name.to_lowercase()),
        password: "password123".to_string(),
        location: "Mumbai, Maharashtra".to_string(),
        availability: "Weekends, Evenings".to_string(),
        skills_offered: vec!["Python".to_string(), "Machine Learning".to_string()],
        skills_wanted: vec!["Rust".to_string()],
        is_public: true,
        is_banned: false,
        is_admin: false,
        feedback: vec![
            Feedback {
                from_name: "Yashpal".to_string(),
                rating: 5,
                comment: "Great mentor".to_string(),
                when: "2 weeks ago".to_string(),
            },
            Feedback {
                from_name: "Ayan".to_string(),
                rating: 4,
                comment: "Very helpful".to_string(),
                when: "1 month ago".to_string(),
            },
        ],
    }
}

fn own_view() -> ProfileView {
    let mut view = ProfileView::new();
    view.set_profile(test_profile("u1", "Sakshi"), true);
    view
}

fn other_view() -> ProfileView {
    let mut view = ProfileView::new();
    view.set_profile(test_profile("u2", "Yashpal"), false);
    view
}

fn editing_view() -> ProfileView {
    let mut view = own_view();
    view.start_editing();
    view
}

fn press_key(view: &mut ProfileView, key: KeyCode) -> ProfileAction {
    view.handle_key(KeyEvent::from(key))
}

#[test]
fn test_profile_view_new() {
    let view = ProfileView::new();
    assert!(view.profile.is_none());
    assert!(!view.is_own);
    assert!(!view.is_editing());
}

#[test]
fn test_set_profile_resets_state() {
    let mut view = editing_view();
    view.feedback_scroll = 1;

    view.set_profile(test_profile("u2", "Yashpal"), false);
    assert!(!view.is_editing());
    assert!(!view.is_own);
    assert_eq!(view.feedback_scroll, 0);
    assert_eq!(view.focus, EditFocus::Name);
}

#[test]
fn test_start_editing_copies_profile_into_draft() {
    let view = editing_view();

    let draft = view.draft.as_ref().unwrap();
    assert_eq!(draft.name, "Sakshi");
    assert_eq!(draft.location, "Mumbai, Maharashtra");
    assert_eq!(draft.availability, "Weekends, Evenings");
    assert_eq!(draft.skills_offered, vec!["Python", "Machine Learning"]);
    assert_eq!(draft.skills_wanted, vec!["Rust"]);
}

#[test]
fn test_start_editing_requires_own_profile() {
    let mut view = other_view();
    view.start_editing();
    assert!(!view.is_editing());

    let action = press_key(&mut view, keys::EDIT_PROFILE);
    assert_eq!(action, ProfileAction::None);
    assert!(!view.is_editing());
}

#[test]
fn test_edit_key_enters_edit_mode() {
    let mut view = own_view();

    let action = press_key(&mut view, keys::EDIT_PROFILE);
    assert_eq!(action, ProfileAction::None);
    assert!(view.is_editing());
}

#[test]
fn test_start_editing_keeps_existing_draft() {
    let mut view = editing_view();
    view.set_name("Renamed".to_string());

    // A second `e` must not throw away the pending edits
    view.start_editing();
    assert_eq!(view.draft.as_ref().unwrap().name, "Renamed");
}

#[test]
fn test_focus_navigation() {
    let mut view = editing_view();
    assert_eq!(view.focus, EditFocus::Name);

    press_key(&mut view, keys::MOVE_DOWN);
    assert_eq!(view.focus, EditFocus::Location);
    press_key(&mut view, keys::MOVE_DOWN);
    assert_eq!(view.focus, EditFocus::Availability);
    press_key(&mut view, keys::MOVE_DOWN);
    assert_eq!(view.focus, EditFocus::Offered);
    press_key(&mut view, keys::MOVE_DOWN);
    assert_eq!(view.focus, EditFocus::Wanted);

    // Stops at the last field
    press_key(&mut view, keys::MOVE_DOWN);
    assert_eq!(view.focus, EditFocus::Wanted);

    press_key(&mut view, keys::MOVE_UP);
    assert_eq!(view.focus, EditFocus::Offered);

    view.focus = EditFocus::Name;
    press_key(&mut view, keys::MOVE_UP);
    assert_eq!(view.focus, EditFocus::Name);
}

#[test]
fn test_focus_change_resets_chip_cursor() {
    let mut view = editing_view();
    view.focus = EditFocus::Offered;
    view.chip_cursor = 1;

    press_key(&mut view, keys::MOVE_DOWN);
    assert_eq!(view.chip_cursor, 0);
}

#[test]
fn test_chip_navigation_clamps() {
    let mut view = editing_view();
    view.focus = EditFocus::Offered;

    press_key(&mut view, keys::MOVE_RIGHT);
    assert_eq!(view.chip_cursor, 1);

    // Two chips only
    press_key(&mut view, keys::MOVE_RIGHT);
    assert_eq!(view.chip_cursor, 1);

    press_key(&mut view, keys::MOVE_LEFT);
    assert_eq!(view.chip_cursor, 0);
    press_key(&mut view, keys::MOVE_LEFT);
    assert_eq!(view.chip_cursor, 0);
}

#[test]
fn test_remove_focused_skill() {
    let mut view = editing_view();
    view.focus = EditFocus::Offered;
    view.chip_cursor = 1;

    let removed = view.remove_focused_skill();
    assert_eq!(removed, Some("Machine Learning".to_string()));
    assert_eq!(view.draft.as_ref().unwrap().skills_offered, vec!["Python"]);
    assert_eq!(view.chip_cursor, 0);

    let removed = view.remove_focused_skill();
    assert_eq!(removed, Some("Python".to_string()));
    assert!(view.draft.as_ref().unwrap().skills_offered.is_empty());

    // Nothing left to remove
    assert_eq!(view.remove_focused_skill(), None);
}

#[test]
fn test_remove_skill_key() {
    let mut view = editing_view();
    view.focus = EditFocus::Wanted;

    let action = press_key(&mut view, keys::REMOVE_SKILL);
    assert_eq!(action, ProfileAction::None);
    assert!(view.draft.as_ref().unwrap().skills_wanted.is_empty());
}

#[test]
fn test_remove_skill_ignored_on_text_fields() {
    let mut view = editing_view();
    assert_eq!(view.focus, EditFocus::Name);

    assert_eq!(view.remove_focused_skill(), None);
    assert_eq!(view.draft.as_ref().unwrap().name, "Sakshi");
}

#[test]
fn test_enter_requests_field_edit() {
    let mut view = editing_view();

    let action = press_key(&mut view, keys::SUBMIT);
    assert_eq!(action, ProfileAction::EditField(EditFocus::Name));

    view.focus = EditFocus::Offered;
    let action = press_key(&mut view, keys::SUBMIT);
    assert_eq!(action, ProfileAction::EditField(EditFocus::Offered));
}

#[test]
fn test_save_returns_draft() {
    let mut view = editing_view();
    view.set_name("Sakshi K".to_string());
    view.set_location("Pune, Maharashtra".to_string());

    let action = press_key(&mut view, keys::SAVE_PROFILE);
    let ProfileAction::Save(edits) = action else {
        panic!("expected Save, got {:?}", action);
    };
    assert_eq!(edits.name, "Sakshi K");
    assert_eq!(edits.location, "Pune, Maharashtra");
    assert_eq!(edits.skills_wanted, vec!["Rust"]);
}

#[test]
fn test_esc_discards_draft() {
    let mut view = editing_view();
    view.set_name("Renamed".to_string());

    let action = press_key(&mut view, keys::ESC);
    assert_eq!(action, ProfileAction::None);
    assert!(!view.is_editing());
    // The displayed profile is untouched
    assert_eq!(view.profile.as_ref().unwrap().name, "Sakshi");
}

#[test]
fn test_swap_and_rate_on_other_profile() {
    let mut view = other_view();

    let action = press_key(&mut view, keys::SEND_SWAP);
    assert_eq!(action, ProfileAction::StartSwap("u2".to_string()));

    let action = press_key(&mut view, keys::RATE);
    assert_eq!(action, ProfileAction::StartFeedback("u2".to_string()));
}

#[test]
fn test_swap_and_rate_ignored_on_own_profile() {
    let mut view = own_view();

    assert_eq!(press_key(&mut view, keys::SEND_SWAP), ProfileAction::None);
    assert_eq!(press_key(&mut view, keys::RATE), ProfileAction::None);
}

#[test]
fn test_dialog_values_apply_to_draft() {
    let mut view = editing_view();

    view.set_availability("Weekdays".to_string());
    assert_eq!(view.draft.as_ref().unwrap().availability, "Weekdays");

    assert!(view.add_offered_skill("Data Science".to_string()));
    assert_eq!(
        view.draft.as_ref().unwrap().skills_offered,
        vec!["Python", "Machine Learning", "Data Science"]
    );

    assert!(view.add_wanted_skill("Go".to_string()));
    assert_eq!(view.draft.as_ref().unwrap().skills_wanted, vec!["Rust", "Go"]);
}

#[test]
fn test_add_skill_rejects_duplicates() {
    let mut view = editing_view();

    assert!(!view.add_offered_skill("python".to_string()));
    assert_eq!(view.draft.as_ref().unwrap().skills_offered.len(), 2);

    assert!(!view.add_wanted_skill("RUST".to_string()));
    assert_eq!(view.draft.as_ref().unwrap().skills_wanted.len(), 1);
}

#[test]
fn test_dialog_values_ignored_outside_edit_mode() {
    let mut view = own_view();

    view.set_name("Renamed".to_string());
    assert!(!view.add_offered_skill("Go".to_string()));
    assert!(view.draft.is_none());
}

#[test]
fn test_feedback_scroll() {
    let mut view = own_view();

    let action = press_key(&mut view, keys::MOVE_DOWN);
    assert_eq!(action, ProfileAction::None);
    assert_eq!(view.feedback_scroll, 1);

    // Two entries, so the scroll stops at the last one
    press_key(&mut view, keys::MOVE_DOWN);
    assert_eq!(view.feedback_scroll, 1);

    press_key(&mut view, keys::MOVE_UP);
    assert_eq!(view.feedback_scroll, 0);
    press_key(&mut view, keys::MOVE_UP);
    assert_eq!(view.feedback_scroll, 0);
}
