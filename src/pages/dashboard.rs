//! Dashboard page: overview, task table, and team tabs behind one header.
//!
//! DESIGN
//! ======
//! The page owns all task mutations. Loads go through `load_tasks` and
//! `load_users`, which write the shared list states; mutation callbacks call
//! the API and then reload, so the table always reflects the server. Lists
//! load once per visit, after the session has resolved.

use leptos::prelude::*;

use crate::components::action_cards::ActionCards;
use crate::components::activity_section::ActivitySection;
use crate::components::add_task_modal::AddTaskModal;
use crate::components::header::HeaderBar;
use crate::components::stats_cards::StatsCards;
use crate::components::tasks_table::TasksTable;
use crate::components::team_members::TeamMembers;
use crate::net::types::{Role, TaskStatus};
use crate::state::auth::AuthState;
use crate::state::tasks::TasksState;
use crate::state::ui::{HeaderTab, UiState};
use crate::state::users::UsersState;

/// Refresh the shared task list from the backend.
pub(crate) fn load_tasks(auth: RwSignal<AuthState>, tasks: RwSignal<TasksState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = auth.with_untracked(|state| state.token.clone()) else {
            return;
        };
        tasks.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_tasks(&token).await {
                Ok(items) => {
                    tasks.update(|state| {
                        state.items = items;
                        state.loading = false;
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("failed to load tasks: {e}");
                    tasks.update(|state| state.loading = false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, tasks);
    }
}

/// Refresh the shared team directory from the backend.
pub(crate) fn load_users(auth: RwSignal<AuthState>, users: RwSignal<UsersState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = auth.with_untracked(|state| state.token.clone()) else {
            return;
        };
        users.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users(&token).await {
                Ok(items) => {
                    users.update(|state| {
                        state.items = items;
                        state.loading = false;
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("failed to load users: {e}");
                    users.update(|state| state.loading = false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, users);
    }
}

/// Main dashboard. Rendered inside a `ProtectedRoute`, so by the time this
/// mounts the session is either resolved or about to redirect.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let show_add = RwSignal::new(false);
    let requested = RwSignal::new(false);

    // Load both lists once the session has settled signed in.
    Effect::new(move || {
        let ready = auth.with(|state| !state.loading && state.user.is_some());
        if ready && !requested.get_untracked() {
            requested.set(true);
            load_tasks(auth, tasks);
            load_users(auth, users);
        }
    });

    let on_new_task = Callback::new(move |()| show_add.set(true));
    let on_cancel_add = Callback::new(move |()| show_add.set(false));
    let on_task_created = Callback::new(move |()| {
        show_add.set(false);
        load_tasks(auth, tasks);
    });
    let on_refresh = Callback::new(move |()| load_tasks(auth, tasks));

    let on_update_status = Callback::new(move |(task_id, status): (String, TaskStatus)| {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.with_untracked(|state| state.token.clone()) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_task_status(&token, &task_id, status).await {
                    Ok(()) => load_tasks(auth, tasks),
                    Err(e) => leptos::logging::warn!("failed to update task status: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (task_id, status);
        }
    });

    let on_delete = Callback::new(move |task_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this task?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let Some(token) = auth.with_untracked(|state| state.token.clone()) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_task(&token, &task_id).await {
                    Ok(()) => load_tasks(auth, tasks),
                    Err(e) => leptos::logging::warn!("failed to delete task: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = task_id;
        }
    });

    view! {
        <div class="dashboard-page">
            <HeaderBar/>
            <main class="dashboard-page__content">
                {move || {
                    let manager = auth
                        .with(|state| {
                            state.user.as_ref().is_some_and(|u| u.role.is_manager())
                        });
                    match ui.get().active_tab {
                        HeaderTab::Dashboard => {
                            view! {
                                <StatsCards/>
                                <ActionCards on_new_task=on_new_task/>
                                <ActivitySection/>
                            }
                                .into_any()
                        }
                        HeaderTab::Tasks => {
                            view! {
                                <TasksTable
                                    on_update_status=on_update_status
                                    on_delete=on_delete
                                    on_refresh=on_refresh
                                />
                            }
                                .into_any()
                        }
                        HeaderTab::Staff if manager => {
                            view! { <TeamMembers role=Role::Staff/> }.into_any()
                        }
                        HeaderTab::Students if manager => {
                            view! { <TeamMembers role=Role::Student/> }.into_any()
                        }
                        // Team tabs stay manager-only even if one is somehow activated.
                        HeaderTab::Staff | HeaderTab::Students => view! {
                            <p class="dashboard-page__denied">"Available to managers only."</p>
                        }
                            .into_any(),
                    }
                }}
            </main>
            <Show when=move || show_add.get()>
                <AddTaskModal on_created=on_task_created on_cancel=on_cancel_add/>
            </Show>
        </div>
    }
}
