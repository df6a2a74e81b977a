//! Session lifecycle: token persistence, identity resolution, and the
//! login/register/logout operations.
//!
//! DESIGN
//! ======
//! This module is the single writer of the shared `AuthState`. `install`
//! seeds the state from durable storage and runs the resolution effect; the
//! state transitions themselves are plain functions over `&mut AuthState`
//! so they can be exercised without a browser.
//!
//! Resolution runs once per token change and is tagged with the token it
//! was issued for; a response that arrives after the token has changed
//! again is discarded instead of overwriting newer state. Any resolution
//! failure drops the session, network failures included: a token the app
//! cannot validate is treated as no session at all.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, User};
use crate::state::auth::AuthState;
use crate::util::session;

/// Seed `AuthState` from storage and install the identity-resolution effect.
///
/// The effect watches the session token and resolves `GET /auth/me` once per
/// change, including the initial stored token. Called once from `App`.
pub fn install(auth: RwSignal<AuthState>) {
    auth.update(|state| state.token = session::read_token());

    Effect::new(move |previous: Option<Option<String>>| {
        let token = auth.with(|state| state.token.clone());
        // The effect re-runs on any auth change; only token changes matter.
        if previous.as_ref() == Some(&token) {
            return token;
        }
        match token.clone() {
            None => auth.update(apply_no_session),
            Some(issued) => {
                auth.update(|state| state.loading = true);
                resolve(auth, issued);
            }
        }
        token
    });
}

/// Fire the `/auth/me` call for `issued` and apply the tagged outcome.
fn resolve(auth: RwSignal<AuthState>, issued: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_current_user(&issued).await;
            if let Err(e) = &outcome {
                leptos::logging::warn!("identity resolution failed: {e}");
            }
            let mut drop_stored = false;
            auth.update(|state| drop_stored = apply_resolution(state, &issued, outcome));
            if drop_stored {
                session::clear_token();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, issued);
    }
}

/// Sign in and establish a session.
///
/// On success the token is persisted and the token plus identity land in
/// state in one update; resolution then re-confirms the identity for the
/// new token. On failure state is left unchanged apart from the in-flight
/// flag.
///
/// # Errors
///
/// `ApiError::InFlight` when a sign-in attempt is already running,
/// otherwise whatever the login endpoint returned.
pub async fn login(
    auth: RwSignal<AuthState>,
    email: String,
    password: String,
) -> Result<User, ApiError> {
    if !begin_attempt(auth) {
        return Err(ApiError::InFlight);
    }
    finish_attempt(auth, crate::net::api::login(&email, &password).await)
}

/// Create an account and establish a session. Same contract as [`login`].
///
/// # Errors
///
/// `ApiError::InFlight` when a sign-in attempt is already running,
/// otherwise whatever the register endpoint returned.
pub async fn register(
    auth: RwSignal<AuthState>,
    name: String,
    email: String,
    password: String,
) -> Result<User, ApiError> {
    if !begin_attempt(auth) {
        return Err(ApiError::InFlight);
    }
    finish_attempt(auth, crate::net::api::register(&name, &email, &password).await)
}

/// Clear the session and identity. Synchronous, no network call, idempotent.
pub fn logout(auth: RwSignal<AuthState>) {
    session::clear_token();
    auth.update(apply_signed_out);
}

fn begin_attempt(auth: RwSignal<AuthState>) -> bool {
    let mut started = false;
    auth.update(|state| started = begin_pending(state));
    started
}

fn finish_attempt(
    auth: RwSignal<AuthState>,
    outcome: Result<AuthResponse, ApiError>,
) -> Result<User, ApiError> {
    match outcome {
        Ok(response) => {
            let (token, user) = response.into_parts();
            session::write_token(&token);
            auth.update(|state| apply_signed_in(state, token, user.clone()));
            Ok(user)
        }
        Err(e) => {
            auth.update(|state| state.pending = false);
            Err(e)
        }
    }
}

// =============================================================
// State transitions
// =============================================================

/// Mark a sign-in attempt as started; refuses while one is running.
fn begin_pending(state: &mut AuthState) -> bool {
    if state.pending {
        return false;
    }
    state.pending = true;
    true
}

/// No token to resolve: settled and signed out.
fn apply_no_session(state: &mut AuthState) {
    state.user = None;
    state.loading = false;
}

/// Apply a successful login/register. The token change re-enters
/// resolution, so the state goes back through loading.
fn apply_signed_in(state: &mut AuthState, token: String, user: User) {
    state.token = Some(token);
    state.user = Some(user);
    state.loading = true;
    state.pending = false;
}

fn apply_signed_out(state: &mut AuthState) {
    state.token = None;
    state.user = None;
    state.loading = false;
}

/// Apply a resolution outcome tagged with the token it was issued for.
///
/// A response for a superseded token is discarded entirely. Returns `true`
/// when the stored token must be dropped as well.
#[cfg(any(test, feature = "hydrate"))]
fn apply_resolution(
    state: &mut AuthState,
    issued: &str,
    outcome: Result<User, ApiError>,
) -> bool {
    if state.token.as_deref() != Some(issued) {
        return false;
    }
    state.loading = false;
    match outcome {
        Ok(user) => {
            state.user = Some(user);
            false
        }
        Err(_) => {
            state.token = None;
            state.user = None;
            true
        }
    }
}
