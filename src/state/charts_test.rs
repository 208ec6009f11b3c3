use super::*;

#[test]
fn status_dataset_has_one_entry_per_status() {
    assert_eq!(STATUS_DATA.len(), 3);
    for slice in STATUS_DATA {
        assert_eq!(slice.value, 1.0);
    }
}

#[test]
fn department_dataset_carries_equal_weights() {
    assert_eq!(DEPARTMENT_DATA.len(), 3);
    for slice in DEPARTMENT_DATA {
        assert_eq!(slice.value, 33.0);
    }
}

#[test]
fn slice_names_are_unique_within_each_dataset() {
    for dataset in [STATUS_DATA, DEPARTMENT_DATA] {
        let mut names: Vec<&str> = dataset.iter().map(|slice| slice.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), dataset.len());
    }
}

#[test]
fn slice_values_are_non_negative() {
    for slice in STATUS_DATA.iter().chain(DEPARTMENT_DATA) {
        assert!(slice.value >= 0.0);
    }
}
