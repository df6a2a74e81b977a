//! Sign-in page with email and password credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Sign-in form. Submission goes through `auth_client::login`; on success
/// the surrounding `PublicOnlyRoute` observes the authenticated session and
/// navigates away, so the page itself never redirects.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let busy = move || auth.get().pending;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_login_input(&email_value, &password_value) {
            info.set(message);
            return;
        }
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth_client::login(auth, email_value, password_value).await {
                Ok(_) => {}
                // A second submit raced the first; the first one wins.
                Err(crate::net::error::ApiError::InFlight) => {}
                Err(e) => info.set(e.to_string()),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"VelocitMax"</h1>
                <p class="login-card__subtitle">"Sign in to your workshop"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <a class="login-card__link" href="/register">
                        "Create one"
                    </a>
                </p>
            </div>
        </div>
    }
}

/// Check the sign-in form before anything is sent.
fn validate_login_input(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.".to_owned());
    }
    Ok(())
}
