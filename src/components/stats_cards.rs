//! Stat cards summarizing the task list on the dashboard overview.

use leptos::prelude::*;

use crate::state::tasks::{TaskStats, TasksState};
use crate::util::time;

/// Four cards: total, completed, in progress, overdue. Recomputed from the
/// shared task list on every change.
#[component]
pub fn StatsCards() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let stats = move || tasks.with(|state| TaskStats::compute(&state.items, time::now_utc()));

    view! {
        <section class="stats-cards">
            <div class="stats-card stats-card--total">
                <span class="stats-card__value">{move || stats().total}</span>
                <span class="stats-card__label">"Total Tasks"</span>
            </div>
            <div class="stats-card stats-card--completed">
                <span class="stats-card__value">{move || stats().completed}</span>
                <span class="stats-card__label">"Completed"</span>
            </div>
            <div class="stats-card stats-card--progress">
                <span class="stats-card__value">{move || stats().in_progress}</span>
                <span class="stats-card__label">"In Progress"</span>
            </div>
            <div class="stats-card stats-card--overdue">
                <span class="stats-card__value">{move || stats().overdue}</span>
                <span class="stats-card__label">"Overdue"</span>
            </div>
        </section>
    }
}
