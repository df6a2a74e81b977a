use super::*;

// =============================================================
// Form validation
// =============================================================

#[test]
fn complete_input_passes() {
    assert_eq!(validate_task_input("Rotate tires", "2026-09-01", "u-1"), Ok(()));
}

#[test]
fn title_is_required() {
    assert_eq!(
        validate_task_input("", "2026-09-01", "u-1"),
        Err("Title is required.".to_owned())
    );
    assert_eq!(
        validate_task_input("   ", "2026-09-01", "u-1"),
        Err("Title is required.".to_owned())
    );
}

#[test]
fn due_date_is_required() {
    assert_eq!(
        validate_task_input("Rotate tires", "", "u-1"),
        Err("Due date is required.".to_owned())
    );
}

#[test]
fn an_assignee_must_be_chosen() {
    assert_eq!(
        validate_task_input("Rotate tires", "2026-09-01", ""),
        Err("Choose an assignee.".to_owned())
    );
}
