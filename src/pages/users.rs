//! Team directory page with role filters and membership statistics.

use leptos::prelude::*;

use crate::components::header::HeaderBar;
use crate::net::types::{Role, User};
use crate::pages::dashboard::load_users;
use crate::state::auth::AuthState;
use crate::state::users::{UsersState, avatar_initial, count_role, filter_by_role};
use crate::util::time;

/// Full member directory. Readable by every signed-in role; the cards mark
/// the viewer's own entry.
#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let filter = RwSignal::new(None::<Role>);
    let requested = RwSignal::new(false);

    Effect::new(move || {
        let ready = auth.with(|state| !state.loading && state.user.is_some());
        if ready && !requested.get_untracked() {
            requested.set(true);
            load_users(auth, users);
        }
    });

    let viewer_id = move || auth.with(|state| state.user.as_ref().map(|u| u.id.clone()));

    view! {
        <div class="users-page">
            <HeaderBar show_tabs=false/>
            <main class="users-page__content">
                <div class="users-page__title-row">
                    <h2>"Team Members"</h2>
                    <a class="users-page__back" href="/dashboard">
                        "Back to Dashboard"
                    </a>
                </div>

                <div class="users-page__filters">
                    <button
                        class="users-page__chip"
                        class:users-page__chip--active=move || filter.get().is_none()
                        on:click=move |_| filter.set(None)
                    >
                        {move || {
                            users.with(|state| format!("All Members ({})", state.items.len()))
                        }}
                    </button>
                    {Role::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <button
                                    class="users-page__chip"
                                    class:users-page__chip--active=move || {
                                        filter.get() == Some(role)
                                    }
                                    on:click=move |_| filter.set(Some(role))
                                >
                                    {move || {
                                        users
                                            .with(|state| {
                                                format!(
                                                    "{} ({})",
                                                    role_plural(role),
                                                    count_role(&state.items, role),
                                                )
                                            })
                                    }}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Show when=move || users.get().loading>
                    <p class="users-page__loading">"Loading members..."</p>
                </Show>

                <div class="users-page__list">
                    {move || {
                        let visible = users
                            .with(|state| filter_by_role(&state.items, filter.get()));
                        if visible.is_empty() {
                            let empty = if users.with(|state| state.items.is_empty()) {
                                "No team members found."
                            } else {
                                "No members with this role."
                            };
                            view! { <p class="users-page__empty">{empty}</p> }.into_any()
                        } else {
                            let viewer = viewer_id();
                            visible
                                .into_iter()
                                .map(|user| member_row(user, viewer.as_deref()))
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>

                <section class="users-page__stats">
                    <h3 class="users-page__stats-title">"User Statistics"</h3>
                    <div class="users-page__stats-grid">
                        <div class="users-page__stat">
                            <span class="users-page__stat-value">
                                {move || users.with(|state| state.items.len())}
                            </span>
                            <span class="users-page__stat-label">"Total Members"</span>
                        </div>
                        {Role::ALL
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <div class="users-page__stat">
                                        <span class="users-page__stat-value">
                                            {move || {
                                                users.with(|state| count_role(&state.items, role))
                                            }}
                                        </span>
                                        <span class="users-page__stat-label">
                                            {role_plural(role)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </main>
        </div>
    }
}

fn member_row(user: User, viewer: Option<&str>) -> impl IntoView {
    let User {
        id,
        name,
        email,
        role,
        created_at,
    } = user;
    let is_you = viewer == Some(id.as_str());
    let initial = avatar_initial(&name);
    let joined = created_at.map(|at| format!("Joined {}", time::format_long_date(at)));

    view! {
        <div class="users-page__card">
            <span class="users-page__avatar" aria-hidden="true">{initial}</span>
            <div class="users-page__info">
                <span class="users-page__name">
                    {name}
                    {is_you.then(|| view! { <span class="users-page__you">"You"</span> })}
                </span>
                <span class=format!(
                    "users-page__role users-page__role--{}",
                    role.as_str(),
                )>{role.label()}</span>
                <span class="users-page__email">{email}</span>
                <span class="users-page__id">{format!("User ID: {id}")}</span>
                {joined.map(|line| view! { <span class="users-page__joined">{line}</span> })}
            </div>
        </div>
    }
}

fn role_plural(role: Role) -> &'static str {
    match role {
        Role::Manager => "Managers",
        Role::Staff => "Staff",
        Role::Student => "Students",
    }
}
