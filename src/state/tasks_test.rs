use super::*;
use crate::net::types::TaskPriority;

fn date(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap()
        .with_timezone(&Utc)
}

fn task(id: &str, status: TaskStatus, due: &str) -> Task {
    Task {
        id: id.to_owned(),
        title: format!("Task {id}"),
        description: String::new(),
        status,
        priority: TaskPriority::Medium,
        due_date: date(due),
        assigned_to: None,
        created_by: None,
        images: Vec::new(),
        files: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Stat cards
// =============================================================

#[test]
fn stats_count_every_bucket() {
    let now = date("2026-08-22T12:00:00Z");
    let tasks = vec![
        task("a", TaskStatus::Completed, "2026-08-01T00:00:00Z"),
        task("b", TaskStatus::InProgress, "2026-08-10T00:00:00Z"),
        task("c", TaskStatus::Pending, "2026-09-01T00:00:00Z"),
        task("d", TaskStatus::Pending, "2026-08-20T00:00:00Z"),
    ];
    let stats = TaskStats::compute(&tasks, now);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 1);
    // b and d are past due; a is past due but completed.
    assert_eq!(stats.overdue, 2);
}

#[test]
fn completed_tasks_are_never_overdue() {
    let now = date("2026-08-22T12:00:00Z");
    let done = task("a", TaskStatus::Completed, "2026-01-01T00:00:00Z");
    assert!(!is_overdue(&done, now));
}

// =============================================================
// Activity and deadlines
// =============================================================

#[test]
fn recent_activity_returns_newest_three() {
    let mut a = task("a", TaskStatus::Pending, "2026-09-01T00:00:00Z");
    let mut b = task("b", TaskStatus::Pending, "2026-09-01T00:00:00Z");
    let mut c = task("c", TaskStatus::Pending, "2026-09-01T00:00:00Z");
    let mut d = task("d", TaskStatus::Pending, "2026-09-01T00:00:00Z");
    a.updated_at = Some(date("2026-08-19T00:00:00Z"));
    b.updated_at = Some(date("2026-08-21T00:00:00Z"));
    c.updated_at = Some(date("2026-08-20T00:00:00Z"));
    d.updated_at = Some(date("2026-08-18T00:00:00Z"));

    let recent = recent_activity(&[a, b, c, d]);
    let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);
}

#[test]
fn tasks_without_update_time_sort_last() {
    let mut a = task("a", TaskStatus::Pending, "2026-09-01T00:00:00Z");
    a.updated_at = Some(date("2026-08-01T00:00:00Z"));
    let b = task("b", TaskStatus::Pending, "2026-09-01T00:00:00Z");

    let recent = recent_activity(&[b, a]);
    assert_eq!(recent[0].id, "a");
    assert_eq!(recent[1].id, "b");
}

#[test]
fn upcoming_deadlines_skip_completed_and_sort_soonest_first() {
    let tasks = vec![
        task("far", TaskStatus::Pending, "2026-12-01T00:00:00Z"),
        task("done", TaskStatus::Completed, "2026-08-23T00:00:00Z"),
        task("soon", TaskStatus::InProgress, "2026-08-24T00:00:00Z"),
        task("mid", TaskStatus::Pending, "2026-09-10T00:00:00Z"),
        task("later", TaskStatus::Pending, "2026-10-01T00:00:00Z"),
    ];
    let upcoming = upcoming_deadlines(&tasks);
    let ids: Vec<&str> = upcoming.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["soon", "mid", "later"]);
}

// =============================================================
// Deadline arithmetic
// =============================================================

#[test]
fn days_until_rounds_partial_days_up() {
    let now = date("2026-08-22T12:00:00Z");
    let due = date("2026-08-24T00:00:00Z");
    assert_eq!(days_until(due, now), 2);
}

#[test]
fn days_until_is_zero_at_the_deadline() {
    let now = date("2026-08-22T12:00:00Z");
    assert_eq!(days_until(now, now), 0);
}

#[test]
fn days_until_rounds_toward_zero_when_past_due() {
    let now = date("2026-08-22T12:00:00Z");
    let due = date("2026-08-21T00:00:00Z");
    assert_eq!(days_until(due, now), -1);
}

#[test]
fn urgency_buckets_match_day_thresholds() {
    assert_eq!(deadline_urgency(-1), DeadlineUrgency::Critical);
    assert_eq!(deadline_urgency(2), DeadlineUrgency::Critical);
    assert_eq!(deadline_urgency(3), DeadlineUrgency::Soon);
    assert_eq!(deadline_urgency(5), DeadlineUrgency::Soon);
    assert_eq!(deadline_urgency(6), DeadlineUrgency::Normal);
}

#[test]
fn deadline_labels_cover_each_range() {
    assert_eq!(deadline_label(-2), "Overdue");
    assert_eq!(deadline_label(0), "Due today");
    assert_eq!(deadline_label(1), "1 day left");
    assert_eq!(deadline_label(4), "4 days left");
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn status_filter_keeps_matching_tasks_only() {
    let tasks = vec![
        task("a", TaskStatus::Pending, "2026-09-01T00:00:00Z"),
        task("b", TaskStatus::Completed, "2026-09-01T00:00:00Z"),
        task("c", TaskStatus::Pending, "2026-09-01T00:00:00Z"),
    ];
    assert_eq!(filter_by_status(&tasks, None).len(), 3);

    let pending = filter_by_status(&tasks, Some(TaskStatus::Pending));
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|t| t.status == TaskStatus::Pending));

    assert_eq!(count_status(&tasks, TaskStatus::Completed), 1);
    assert_eq!(count_status(&tasks, TaskStatus::InProgress), 0);
}
