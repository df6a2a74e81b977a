//! Recent activity and upcoming deadline panels on the overview tab.

use leptos::prelude::*;

use crate::net::types::Task;
use crate::state::tasks::{
    DeadlineUrgency, TasksState, days_until, deadline_label, deadline_urgency, recent_activity,
    upcoming_deadlines,
};
use crate::util::time;

/// Two panels fed from the shared task list: the three most recently
/// updated tasks and the three soonest open deadlines.
#[component]
pub fn ActivitySection() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();

    let recent = move || tasks.with(|state| recent_activity(&state.items));
    let upcoming = move || tasks.with(|state| upcoming_deadlines(&state.items));

    view! {
        <section class="activity">
            <div class="activity__panel">
                <h3 class="activity__heading">"Recent Activity"</h3>
                {move || {
                    let items = recent();
                    if items.is_empty() {
                        view! { <p class="activity__empty">"No recent activity."</p> }.into_any()
                    } else {
                        items.into_iter().map(activity_item).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
            <div class="activity__panel">
                <h3 class="activity__heading">"Upcoming Deadlines"</h3>
                {move || {
                    let items = upcoming();
                    if items.is_empty() {
                        view! { <p class="activity__empty">"No upcoming deadlines."</p> }.into_any()
                    } else {
                        items.into_iter().map(deadline_item).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
        </section>
    }
}

fn activity_item(task: Task) -> impl IntoView {
    let updated = task.updated_at.map(time::format_short_date);
    view! {
        <div class="activity__item">
            <span class="activity__item-title">{task.title}</span>
            <span class="activity__item-meta">
                <span class="activity__item-status">{task.status.label()}</span>
                {updated.map(|date| view! { <span class="activity__item-date">{date}</span> })}
            </span>
        </div>
    }
}

fn deadline_item(task: Task) -> impl IntoView {
    let days = days_until(task.due_date, time::now_utc());
    let badge_class = urgency_class(deadline_urgency(days));
    view! {
        <div class="activity__item">
            <span class="activity__item-title">{task.title}</span>
            <span class="activity__item-meta">
                <span class="activity__item-date">{time::format_short_date(task.due_date)}</span>
                <span class=badge_class>{deadline_label(days)}</span>
            </span>
        </div>
    }
}

fn urgency_class(urgency: DeadlineUrgency) -> &'static str {
    match urgency {
        DeadlineUrgency::Critical => "activity__badge activity__badge--critical",
        DeadlineUrgency::Soon => "activity__badge activity__badge--soon",
        DeadlineUrgency::Normal => "activity__badge activity__badge--normal",
    }
}
