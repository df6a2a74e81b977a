//! Top bar with brand, tab navigation, the signed-in user, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component surfaces session metadata and primary navigation controls
//! that remain visible across dashboard workflows. Team tabs are hidden for
//! non-managers; the guard on the users page enforces nothing extra because
//! team data itself is readable by every signed-in role.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{HeaderTab, UiState};

/// Dashboard header. `show_tabs=false` renders the bar without the tab row
/// for pages with their own navigation.
#[component]
pub fn HeaderBar(#[prop(default = true)] show_tabs: bool) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.name.clone())
    };
    let role_label = move || {
        auth.get()
            .user
            .as_ref()
            .map_or("", |u| u.role.label())
    };
    let is_manager = move || {
        auth.get()
            .user
            .as_ref()
            .is_some_and(|u| u.role.is_manager())
    };

    let on_logout = move |_| {
        crate::net::auth_client::logout(auth);
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(crate::util::guard::LOGIN_PATH);
            }
        }
    };

    view! {
        <header class="header">
            <div class="header__top">
                <a class="header__brand" href="/dashboard">
                    "VelocitMax"
                    <span class="header__brand-sub">"Tasks"</span>
                </a>
                <div class="header__session">
                    <span class="header__user-name">{user_name}</span>
                    <span class="header__user-role">{role_label}</span>
                    <button class="btn header__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </div>
            </div>
            <Show when=move || show_tabs>
                <nav class="header__tabs">
                    {HeaderTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <Show when=move || !tab.requires_manager() || is_manager()>
                                    <button
                                        class="header__tab"
                                        class:header__tab--active=move || {
                                            ui.get().active_tab == tab
                                        }
                                        on:click=move |_| ui.update(|u| u.active_tab = tab)
                                    >
                                        {tab.label()}
                                    </button>
                                </Show>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </Show>
        </header>
    }
}
