//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Registration form. New accounts start as staff; a successful register
/// signs the session in and navigates straight to the dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let busy = move || auth.get().pending;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let confirm_value = confirm.get();
        if let Err(message) =
            validate_registration(&name_value, &email_value, &password_value, &confirm_value)
        {
            info.set(message);
            return;
        }
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth_client::register(auth, name_value, email_value, password_value)
                    .await
                {
                    Ok(_) => {
                        navigate(crate::util::guard::LANDING_PATH, NavigateOptions::default());
                    }
                    Err(crate::net::error::ApiError::InFlight) => {}
                    Err(e) => info.set(e.to_string()),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"VelocitMax"</h1>
                <p class="login-card__subtitle">"Create your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "New accounts join as staff. Already registered? "
                    <a class="login-card__link" href="/login">
                        "Sign in"
                    </a>
                </p>
            </div>
        </div>
    }
}

/// Check the registration form before anything is sent.
fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name is required.".to_owned());
    }
    if email.is_empty() {
        return Err("Email is required.".to_owned());
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email.".to_owned());
    }
    if password.is_empty() {
        return Err("Password is required.".to_owned());
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long.".to_owned());
    }
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }
    Ok(())
}

/// Loose shape check, matching what the backend itself accepts.
fn looks_like_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && domain.split('.').all(|part| !part.is_empty())
}
