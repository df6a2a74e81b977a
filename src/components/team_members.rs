//! Member list for the manager-only Staff and Students tabs.

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::state::users::{UsersState, avatar_initial, filter_by_role};

/// Cards for every member holding `role`, from the shared directory.
#[component]
pub fn TeamMembers(role: Role) -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    view! {
        <section class="team-members">
            <h3 class="team-members__heading">{format!("{} Members", role.label())}</h3>

            <Show when=move || users.get().loading>
                <p class="team-members__loading">"Loading members..."</p>
            </Show>

            <div class="team-members__grid">
                {move || {
                    let members = users.with(|state| filter_by_role(&state.items, Some(role)));
                    if members.is_empty() {
                        view! { <p class="team-members__empty">"No members found."</p> }
                            .into_any()
                    } else {
                        members.into_iter().map(member_card).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
        </section>
    }
}

fn member_card(user: User) -> impl IntoView {
    let initial = avatar_initial(&user.name);
    view! {
        <div class="team-members__card">
            <span class="team-members__avatar" aria-hidden="true">{initial}</span>
            <div class="team-members__info">
                <span class="team-members__name">{user.name}</span>
                <span class="team-members__email">{user.email}</span>
            </div>
        </div>
    }
}
