use super::*;

#[test]
fn three_stories_are_generated() {
    assert_eq!(stories_for("REQ-001").len(), 3);
}

#[test]
fn story_set_is_the_same_for_every_requirement() {
    let a = stories_for("REQ-001");
    let b = stories_for("REQ-003");
    let c = stories_for("not-a-real-id");
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn story_ids_and_points_match_the_fixed_set() {
    let stories = stories_for("REQ-002");
    let summary: Vec<(&str, u32)> = stories.iter().map(|s| (s.id, s.story_points)).collect();
    assert_eq!(
        summary,
        vec![("STORY-001", 5), ("STORY-002", 3), ("STORY-003", 8)]
    );
}

#[test]
fn story_text_fields_are_non_empty() {
    for story in stories_for("REQ-001") {
        assert!(!story.role.is_empty());
        assert!(!story.want.is_empty());
        assert!(!story.benefit.is_empty());
    }
}
