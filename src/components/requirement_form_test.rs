use super::*;

#[test]
fn default_draft_is_empty() {
    let draft = RequirementDraft::default();
    assert!(draft.title.is_empty());
    assert!(draft.description.is_empty());
    assert!(draft.department.is_empty());
    assert!(draft.priority.is_empty());
}

#[test]
fn submit_leaves_the_inventory_unchanged() {
    let mut state = RequirementsState::default();
    let before = state.items.clone();

    let draft = RequirementDraft {
        title: "Instant Settlement Dashboard".to_owned(),
        description: "Surface settlement latency per rail.".to_owned(),
        department: "Financial Operations".to_owned(),
        priority: "HIGH".to_owned(),
    };
    submit_draft(&draft, &mut state.items);

    assert_eq!(state.items.len(), before.len());
    assert_eq!(state.items, before);
}

#[test]
fn submit_of_an_empty_draft_is_also_a_no_op() {
    let mut state = RequirementsState::default();
    submit_draft(&RequirementDraft::default(), &mut state.items);
    assert_eq!(state.items.len(), 3);
}
