//! Task list state and the pure derivations behind the dashboard views.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use chrono::{DateTime, Utc};

use crate::net::types::{Task, TaskStatus};

/// Shared task list state, loaded from `GET /tasks/get`.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
}

/// Aggregate counts for the dashboard stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
}

impl TaskStats {
    /// Count the stat-card buckets over the full task list.
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            in_progress: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
            overdue: tasks.iter().filter(|t| is_overdue(t, now)).count(),
        }
    }
}

/// A task counts as overdue once its due date has passed without completion.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    task.status != TaskStatus::Completed && task.due_date < now
}

/// The three most recently updated tasks, newest first.
pub fn recent_activity(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| std::cmp::Reverse(t.updated_at.unwrap_or(DateTime::<Utc>::MIN_UTC)));
    sorted.truncate(3);
    sorted
}

/// The three soonest non-completed deadlines, earliest first.
pub fn upcoming_deadlines(tasks: &[Task]) -> Vec<Task> {
    let mut open: Vec<Task> = tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Completed)
        .cloned()
        .collect();
    open.sort_by_key(|t| t.due_date);
    open.truncate(3);
    open
}

/// Whole days until `due`, rounded up; negative once the deadline passed.
pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    const DAY_MS: i64 = 86_400_000;
    let ms = (due - now).num_milliseconds();
    ms.div_euclid(DAY_MS) + i64::from(ms.rem_euclid(DAY_MS) != 0)
}

/// Urgency bucket for an upcoming deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeadlineUrgency {
    /// Due within two days (or already overdue).
    Critical,
    /// Due within five days.
    Soon,
    Normal,
}

pub fn deadline_urgency(days: i64) -> DeadlineUrgency {
    if days <= 2 {
        DeadlineUrgency::Critical
    } else if days <= 5 {
        DeadlineUrgency::Soon
    } else {
        DeadlineUrgency::Normal
    }
}

/// Short text shown next to an upcoming deadline.
pub fn deadline_label(days: i64) -> String {
    if days < 0 {
        "Overdue".to_owned()
    } else if days == 0 {
        "Due today".to_owned()
    } else if days == 1 {
        "1 day left".to_owned()
    } else {
        format!("{days} days left")
    }
}

/// Tasks matching the table's status filter; `None` keeps everything.
pub fn filter_by_status(tasks: &[Task], filter: Option<TaskStatus>) -> Vec<Task> {
    match filter {
        None => tasks.to_vec(),
        Some(status) => tasks.iter().filter(|t| t.status == status).cloned().collect(),
    }
}

pub fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}
