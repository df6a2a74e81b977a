//! Full-page loading indicator shown while the session is unresolved.

use leptos::prelude::*;

/// Centered spinner with a short label. Route guards render this instead of
/// their children until the session settles, so protected content never
/// flashes for signed-out visitors.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
