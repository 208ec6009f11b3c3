use super::*;

#[test]
fn toggle_label_offers_to_open_when_closed() {
    assert_eq!(toggle_label(false), "New Requirement");
}

#[test]
fn toggle_label_offers_to_close_when_open() {
    assert_eq!(toggle_label(true), "Close Form");
}
