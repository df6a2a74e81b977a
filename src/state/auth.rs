#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: the session token, the resolved identity, and the
/// lifecycle flags consulted by route guards and forms.
///
/// Provided as a single `RwSignal` context from `app.rs`. All writes go
/// through `crate::net::auth_client`; everything else only reads.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    /// Bearer token for the current session, mirrored in durable storage.
    pub token: Option<String>,
    /// Identity resolved for `token`; never persisted.
    pub user: Option<User>,
    /// True until the resolution attempt for the current token completes.
    pub loading: bool,
    /// True while a login or register request is in flight.
    pub pending: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
            pending: false,
        }
    }
}

impl AuthState {
    /// Collapse the state into the three-way status the route guards consume.
    pub fn status(&self) -> AuthStatus {
        if self.loading {
            AuthStatus::Loading
        } else if self.user.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }
}

/// Route-guard view of `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// Identity resolution has not finished for the current token.
    Loading,
    /// A user is signed in.
    Authenticated,
    /// Resolution finished and nobody is signed in.
    Unauthenticated,
}
