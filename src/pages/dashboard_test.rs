use super::*;
use crate::state::stories::stories_for;

#[test]
fn view_stories_opens_the_modal() {
    let mut ui = UiState::default();
    view_stories(&mut ui, "REQ-001");
    assert!(ui.stories_open);
}

#[test]
fn view_stories_is_row_independent() {
    // Any row's eye control opens the same modal with the same fixed set.
    let mut from_first = UiState::default();
    let mut from_last = UiState::default();
    view_stories(&mut from_first, "REQ-001");
    view_stories(&mut from_last, "REQ-003");

    assert_eq!(from_first, from_last);
    assert_eq!(stories_for("REQ-001"), stories_for("REQ-003"));
}

#[test]
fn view_stories_leaves_the_form_flag_alone() {
    let mut ui = UiState::default();
    ui.toggle_form();
    view_stories(&mut ui, "REQ-002");
    assert!(ui.form_open);
    assert!(ui.stories_open);
}
