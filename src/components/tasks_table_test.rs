use super::*;
use crate::net::types::TaskUserRef;
use chrono::{TimeZone, Utc};

fn task_with_assignee(assigned_to: Option<TaskUserRef>) -> Task {
    Task {
        id: "t-1".to_owned(),
        title: "Inspect brake pads".to_owned(),
        description: String::new(),
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        due_date: Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
        assigned_to,
        created_by: None,
        images: Vec::new(),
        files: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn progress_tracks_the_status_lifecycle() {
    assert_eq!(progress_percent(TaskStatus::Pending), 15);
    assert_eq!(progress_percent(TaskStatus::InProgress), 50);
    assert_eq!(progress_percent(TaskStatus::Completed), 100);
}

#[test]
fn status_and_priority_classes_follow_the_value() {
    assert_eq!(
        status_class(TaskStatus::InProgress),
        "task-row__status task-row__status--in-progress"
    );
    assert_eq!(
        priority_class(TaskPriority::High),
        "task-row__priority task-row__priority--high"
    );
}

#[test]
fn unassigned_tasks_show_a_placeholder() {
    assert_eq!(assignee_name(&task_with_assignee(None)), "Unassigned");

    let blank = TaskUserRef {
        id: "u-1".to_owned(),
        name: "   ".to_owned(),
    };
    assert_eq!(assignee_name(&task_with_assignee(Some(blank))), "Unassigned");
}

#[test]
fn assigned_tasks_show_the_member_name() {
    let member = TaskUserRef {
        id: "u-1".to_owned(),
        name: "Dana Reyes".to_owned(),
    };
    assert_eq!(
        assignee_name(&task_with_assignee(Some(member))),
        "Dana Reyes"
    );
}
