//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{LandingRedirect, ProtectedRoute, PublicOnlyRoute};
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, register::RegisterPage, users::UsersPage,
};
use crate::state::{auth::AuthState, tasks::TasksState, ui::UiState, users::UsersState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, installs the session resolver, and
/// sets up client-side routing. `AuthState` has a single writer
/// (`crate::net::auth_client`); pages and components only read it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let tasks = RwSignal::new(TasksState::default());
    let users = RwSignal::new(UsersState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(tasks);
    provide_context(users);
    provide_context(ui);

    // Seed the session from storage and start resolving it.
    crate::net::auth_client::install(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/velomax-client.css"/>
        <Title text="VelocitMax Tasks"/>

        <Router>
            <Routes fallback=LandingRedirect>
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <PublicOnlyRoute>
                                <LoginPage/>
                            </PublicOnlyRoute>
                        }
                    }
                />
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <DashboardPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <UsersPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route path=StaticSegment("") view=LandingRedirect/>
            </Routes>
        </Router>
    }
}
