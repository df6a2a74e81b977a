//! Quick-action cards on the dashboard overview tab.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Shortcut cards for the common dashboard actions. Task creation is hidden
/// from students; the team card is a plain link the router intercepts.
#[component]
pub fn ActionCards(on_new_task: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let can_create = move || {
        auth.get()
            .user
            .as_ref()
            .is_some_and(|u| u.role.can_create_tasks())
    };

    view! {
        <section class="action-cards">
            <Show when=can_create>
                <button class="action-card action-card--create" on:click=move |_| on_new_task.run(())>
                    <span class="action-card__title">"Add New Task"</span>
                    <span class="action-card__hint">"Create and assign a task to your team"</span>
                </button>
            </Show>
            <a class="action-card action-card--team" href="/users">
                <span class="action-card__title">"View Team"</span>
                <span class="action-card__hint">"Browse members and their roles"</span>
            </a>
        </section>
    }
}
