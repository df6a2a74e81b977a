//! Modal dialog for creating and assigning a task.

#[cfg(test)]
#[path = "add_task_modal_test.rs"]
mod add_task_modal_test;

use leptos::prelude::*;

use crate::net::types::{TaskPriority, User};
use crate::state::auth::AuthState;
use crate::state::users::{UsersState, assignable_users};

/// Create-task dialog. The assignee list follows the viewer's role: managers
/// assign anyone, staff assign students. `on_created` fires after the
/// backend accepts the task so the page can reload the list.
#[component]
pub fn AddTaskModal(on_created: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = expect_context::<RwSignal<UsersState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let assigned_to = RwSignal::new(String::new());
    let priority = RwSignal::new(TaskPriority::Medium.as_str().to_owned());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let options = move || {
        let viewer = auth
            .get()
            .user
            .as_ref()
            .map(|u| u.role)
            .unwrap_or_default();
        users.with(|state| assignable_users(&state.items, viewer))
    };

    let submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        let form_title = title.get_untracked();
        let form_due = due_date.get_untracked();
        let form_assignee = assigned_to.get_untracked();
        if let Err(message) = validate_task_input(&form_title, &form_due, &form_assignee) {
            error.set(Some(message));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some((token, creator)) = auth.with_untracked(|state| {
                match (&state.token, &state.user) {
                    (Some(token), Some(user)) => Some((token.clone(), user.id.clone())),
                    _ => None,
                }
            }) else {
                return;
            };
            let task = crate::net::types::NewTask {
                title: form_title.trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
                due_date: form_due,
                assigned_to: form_assignee,
                priority: TaskPriority::parse(&priority.get_untracked()).unwrap_or_default(),
                created_by: creator,
            };
            error.set(None);
            submitting.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_task(&token, &task).await {
                    Ok(()) => {
                        submitting.set(false);
                        on_created.run(());
                    }
                    Err(e) => {
                        submitting.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form_due, form_assignee);
            let _ = on_created;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--add-task" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Task"</h2>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="dialog__error">{message}</p> })
                }}

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="dialog__label">
                    "Due Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| due_date.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Assign To"
                    <select
                        class="dialog__input"
                        on:change=move |ev| assigned_to.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || assigned_to.get().is_empty()>
                            "Select a member"
                        </option>
                        {move || options().into_iter().map(assignee_option).collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="dialog__label">
                    "Priority"
                    <select
                        class="dialog__input"
                        on:change=move |ev| priority.set(event_target_value(&ev))
                    >
                        {TaskPriority::ALL
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option
                                        value=p.as_str()
                                        selected=p == TaskPriority::Medium
                                    >
                                        {p.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create Task" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn assignee_option(user: User) -> impl IntoView {
    view! {
        <option value=user.id.clone()>
            {format!("{} ({})", user.name, user.role.label())}
        </option>
    }
}

/// Check the create-task form before anything is sent.
fn validate_task_input(title: &str, due_date: &str, assigned_to: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required.".to_owned());
    }
    if due_date.trim().is_empty() {
        return Err("Due date is required.".to_owned());
    }
    if assigned_to.is_empty() {
        return Err("Choose an assignee.".to_owned());
    }
    Ok(())
}
