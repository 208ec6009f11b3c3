use super::*;

// =============================================================
// Seed inventory
// =============================================================

#[test]
fn seed_has_three_requirements() {
    let state = RequirementsState::default();
    assert_eq!(state.items.len(), 3);
}

#[test]
fn seed_ids_are_unique() {
    let state = RequirementsState::default();
    let mut ids: Vec<&str> = state.items.iter().map(|req| req.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.items.len());
}

#[test]
fn seed_departments_are_from_the_fixed_set() {
    let state = RequirementsState::default();
    for req in &state.items {
        assert!(
            DEPARTMENTS.contains(&req.department.as_str()),
            "unexpected department {:?}",
            req.department
        );
    }
}

#[test]
fn seed_attachments_are_present_but_may_be_empty() {
    // The record shape allows an empty attachment list; the seed happens to
    // carry at least one filename per requirement.
    let state = RequirementsState::default();
    for req in &state.items {
        assert!(!req.attachments.is_empty());
    }
}

// =============================================================
// Aggregates
// =============================================================

#[test]
fn total_story_points_sums_the_seed() {
    let state = RequirementsState::default();
    assert_eq!(state.total_story_points(), 47);
}

#[test]
fn department_count_counts_distinct_departments() {
    let state = RequirementsState::default();
    assert_eq!(state.department_count(), 3);
}

#[test]
fn department_count_ignores_duplicates() {
    let mut state = RequirementsState::default();
    let mut duplicate = state.items[0].clone();
    duplicate.id = "REQ-004".to_owned();
    state.items.push(duplicate);
    assert_eq!(state.department_count(), 3);
}

#[test]
fn aggregates_on_an_empty_list_are_zero() {
    let state = RequirementsState { items: Vec::new() };
    assert_eq!(state.total_story_points(), 0);
    assert_eq!(state.department_count(), 0);
}

// =============================================================
// Priority
// =============================================================

#[test]
fn priority_labels_are_uppercase() {
    assert_eq!(Priority::High.label(), "HIGH");
    assert_eq!(Priority::Medium.label(), "MEDIUM");
    assert_eq!(Priority::Low.label(), "LOW");
}

#[test]
fn priority_badge_classes_map_to_color_schemes() {
    // High is red, Medium is yellow, Low is green; the mapping depends on the
    // priority alone.
    assert_eq!(Priority::High.badge_class(), "requirement-card__badge--high");
    assert_eq!(Priority::Medium.badge_class(), "requirement-card__badge--medium");
    assert_eq!(Priority::Low.badge_class(), "requirement-card__badge--low");
}

#[test]
fn priority_serializes_as_uppercase_labels() {
    assert_eq!(serde_json::to_value(Priority::High).unwrap(), serde_json::json!("HIGH"));
    assert_eq!(serde_json::to_value(Priority::Low).unwrap(), serde_json::json!("LOW"));
}

#[test]
fn priority_deserializes_from_uppercase_labels() {
    let priority: Priority = serde_json::from_value(serde_json::json!("MEDIUM")).unwrap();
    assert_eq!(priority, Priority::Medium);
}
