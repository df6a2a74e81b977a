//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical gating behavior everywhere, so the
//! decision itself is a plain function over `AuthStatus`. The wrapper
//! components in `components::route_guard` only act on the returned `Gate`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthStatus;

/// Route users land on when they need to sign in.
pub const LOGIN_PATH: &str = "/login";
/// Default landing route for signed-in users.
pub const LANDING_PATH: &str = "/dashboard";

/// What a guarded route should do for the current auth status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Resolution still running: show the loading indicator, nothing else.
    Wait,
    /// Render the route's children.
    Render,
    /// Navigate away without ever rendering the children.
    Redirect(&'static str),
}

/// Decision for routes that require a signed-in user.
pub fn protected(status: AuthStatus) -> Gate {
    match status {
        AuthStatus::Loading => Gate::Wait,
        AuthStatus::Authenticated => Gate::Render,
        AuthStatus::Unauthenticated => Gate::Redirect(LOGIN_PATH),
    }
}

/// Decision for routes only shown while signed out (the login page).
pub fn public_only(status: AuthStatus) -> Gate {
    match status {
        AuthStatus::Loading => Gate::Wait,
        AuthStatus::Authenticated => Gate::Redirect(LANDING_PATH),
        AuthStatus::Unauthenticated => Gate::Render,
    }
}
