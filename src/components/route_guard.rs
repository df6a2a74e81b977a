//! Route guards wrapping page components.
//!
//! DESIGN
//! ======
//! Guards render in three phases driven by `AuthState::status`: a loading
//! screen while the session is unresolved, the wrapped page once the guard
//! admits it, and a navigation away when it does not. The decision itself
//! lives in `crate::util::guard`; this module only wires it to the router.
//! While a redirect is pending the guard keeps rendering the loading screen,
//! so neither protected content nor the login form flashes before the
//! navigation lands.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::{AuthState, AuthStatus};
use crate::util::guard::{self, Gate};

/// Admits signed-in users; sends everyone else to the sign-in page once the
/// session has settled.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Navigate as soon as the session settles signed out.
    Effect::new(move || {
        if let Gate::Redirect(path) = guard::protected(auth.with(|state| state.status())) {
            navigate(path, NavigateOptions::default());
        }
    });

    move || match guard::protected(auth.with(|state| state.status())) {
        Gate::Render => children(),
        Gate::Wait | Gate::Redirect(_) => view! { <LoadingScreen/> }.into_any(),
    }
}

/// Admits signed-out visitors; sends signed-in users to the dashboard.
/// Wraps the sign-in page so an authenticated session never sees it.
#[component]
pub fn PublicOnlyRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Gate::Redirect(path) = guard::public_only(auth.with(|state| state.status())) {
            navigate(path, NavigateOptions::default());
        }
    });

    move || match guard::public_only(auth.with(|state| state.status())) {
        Gate::Render => children(),
        Gate::Wait | Gate::Redirect(_) => view! { <LoadingScreen/> }.into_any(),
    }
}

/// Fallback target for `/` and unknown paths: forwards signed-in users to
/// the dashboard and everyone else to the sign-in page.
#[component]
pub fn LandingRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || match auth.with(|state| state.status()) {
        AuthStatus::Loading => {}
        AuthStatus::Authenticated => navigate(guard::LANDING_PATH, NavigateOptions::default()),
        AuthStatus::Unauthenticated => navigate(guard::LOGIN_PATH, NavigateOptions::default()),
    });

    view! { <LoadingScreen/> }
}
