//! Task list table with status filter chips, inline status updates, and the
//! task detail modal.
//!
//! DESIGN
//! ======
//! The table is a pure projection of the shared task list: the chip filter
//! and the open detail modal are the only local state. Mutations (status
//! changes, deletes) go through callbacks the dashboard page owns, which
//! reload the list afterwards.

#[cfg(test)]
#[path = "tasks_table_test.rs"]
mod tasks_table_test;

use leptos::prelude::*;

use crate::components::task_detail_modal::TaskDetailModal;
use crate::net::types::{Task, TaskPriority, TaskStatus};
use crate::state::auth::AuthState;
use crate::state::tasks::{TasksState, count_status, filter_by_status, is_overdue};
use crate::util::time;

/// Filterable task table. Status edits and deletes bubble up through the
/// callbacks; `on_refresh` reloads the list after modal-side changes.
#[component]
pub fn TasksTable(
    on_update_status: Callback<(String, TaskStatus)>,
    on_delete: Callback<String>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let filter = RwSignal::new(None::<TaskStatus>);
    let detail = RwSignal::new(None::<Task>);

    let is_manager = move || {
        auth.get()
            .user
            .as_ref()
            .is_some_and(|u| u.role.is_manager())
    };
    let on_view = Callback::new(move |task: Task| detail.set(Some(task)));
    let on_close = Callback::new(move |()| detail.set(None));

    view! {
        <section class="tasks-table">
            <div class="tasks-table__filters">
                <button
                    class="tasks-table__chip"
                    class:tasks-table__chip--active=move || filter.get().is_none()
                    on:click=move |_| filter.set(None)
                >
                    {move || tasks.with(|state| format!("All ({})", state.items.len()))}
                </button>
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <button
                                class="tasks-table__chip"
                                class:tasks-table__chip--active=move || filter.get() == Some(status)
                                on:click=move |_| filter.set(Some(status))
                            >
                                {move || {
                                    tasks
                                        .with(|state| {
                                            format!(
                                                "{} ({})",
                                                status.label(),
                                                count_status(&state.items, status),
                                            )
                                        })
                                }}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || tasks.get().loading>
                <p class="tasks-table__loading">"Loading tasks..."</p>
            </Show>

            <table class="tasks-table__grid">
                <thead>
                    <tr>
                        <th>"Task"</th>
                        <th>"Assigned To"</th>
                        <th>"Priority"</th>
                        <th>"Due Date"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let visible = tasks
                            .with(|state| filter_by_status(&state.items, filter.get()));
                        if visible.is_empty() {
                            view! {
                                <tr class="tasks-table__empty-row">
                                    <td colspan="6">"No tasks found."</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            visible
                                .into_iter()
                                .map(|task| {
                                    view! {
                                        <TaskRow
                                            task=task
                                            manager=is_manager()
                                            on_view=on_view
                                            on_update_status=on_update_status
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>

            {move || {
                detail
                    .get()
                    .map(|task| {
                        view! {
                            <TaskDetailModal task=task on_close=on_close on_refresh=on_refresh/>
                        }
                    })
            }}
        </section>
    }
}

/// One table row. Rows are rebuilt whenever the list or filter changes, so
/// everything here renders from a snapshot of the task.
#[component]
fn TaskRow(
    task: Task,
    manager: bool,
    on_view: Callback<Task>,
    on_update_status: Callback<(String, TaskStatus)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let attachments = task.images.len() + task.files.len();
    let overdue = is_overdue(&task, time::now_utc());
    let assignee = assignee_name(&task);
    let status = task.status;

    let on_select = Callback::new({
        let id = task.id.clone();
        move |next: TaskStatus| on_update_status.run((id.clone(), next))
    });
    let on_view_click = Callback::new({
        let task = task.clone();
        move |()| on_view.run(task.clone())
    });
    let on_delete_click = Callback::new({
        let id = task.id.clone();
        move |()| on_delete.run(id.clone())
    });

    view! {
        <tr class="task-row" class:task-row--overdue=overdue>
            <td class="task-row__cell task-row__cell--title">
                <span class="task-row__title">{task.title.clone()}</span>
                <Show when={move || attachments > 0}>
                    <span class="task-row__attachments">{format!("{attachments} attached")}</span>
                </Show>
            </td>
            <td class="task-row__cell">{assignee}</td>
            <td class="task-row__cell">
                <span class=priority_class(task.priority)>{task.priority.label()}</span>
            </td>
            <td class="task-row__cell" class:task-row__cell--overdue=overdue>
                {time::format_short_date(task.due_date)}
            </td>
            <td class="task-row__cell">
                <select
                    class=status_class(status)
                    on:change=move |ev| {
                        if let Some(next) = TaskStatus::parse(&event_target_value(&ev)) {
                            on_select.run(next);
                        }
                    }
                >
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.as_str() selected=option == status>
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <div class="task-row__progress">
                    <div
                        class="task-row__progress-fill"
                        style:width=format!("{}%", progress_percent(status))
                    ></div>
                </div>
            </td>
            <td class="task-row__cell task-row__cell--actions">
                <button class="btn task-row__view" on:click=move |_| on_view_click.run(())>
                    "View"
                </button>
                <Show when=move || manager>
                    <button class="btn task-row__delete" on:click=move |_| on_delete_click.run(())>
                        "Delete"
                    </button>
                </Show>
            </td>
        </tr>
    }
}

/// Display name for the assignee column.
fn assignee_name(task: &Task) -> String {
    task.assigned_to
        .as_ref()
        .map(|user| user.name.trim())
        .filter(|name| !name.is_empty())
        .map_or_else(|| "Unassigned".to_owned(), ToOwned::to_owned)
}

/// Rough completion percentage backing the row's progress bar.
fn progress_percent(status: TaskStatus) -> u8 {
    match status {
        TaskStatus::Completed => 100,
        TaskStatus::InProgress => 50,
        TaskStatus::Pending => 15,
    }
}

fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "task-row__status task-row__status--pending",
        TaskStatus::InProgress => "task-row__status task-row__status--in-progress",
        TaskStatus::Completed => "task-row__status task-row__status--completed",
    }
}

fn priority_class(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "task-row__priority task-row__priority--low",
        TaskPriority::Medium => "task-row__priority task-row__priority--medium",
        TaskPriority::High => "task-row__priority task-row__priority--high",
    }
}
