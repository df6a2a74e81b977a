use super::*;
use crate::net::types::Role;
use crate::state::auth::AuthStatus;

fn identity(name: &str) -> User {
    User {
        id: format!("u-{name}"),
        name: name.to_owned(),
        email: format!("{name}@velomax.test"),
        role: Role::Staff,
        created_at: None,
    }
}

fn resolving(token: &str) -> AuthState {
    AuthState {
        token: Some(token.to_owned()),
        user: None,
        loading: true,
        pending: false,
    }
}

fn rejected() -> ApiError {
    ApiError::SessionExpired
}

// =============================================================
// Resolution outcomes
// =============================================================

#[test]
fn successful_resolution_settles_authenticated() {
    let mut state = resolving("tok-1");

    let drop_stored = apply_resolution(&mut state, "tok-1", Ok(identity("dana")));

    assert!(!drop_stored);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("dana"));
    assert_eq!(state.status(), AuthStatus::Authenticated);
}

#[test]
fn rejected_token_clears_session_and_identity() {
    let mut state = resolving("tok-1");

    let drop_stored = apply_resolution(&mut state, "tok-1", Err(rejected()));

    assert!(drop_stored);
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

#[test]
fn network_failure_during_resolution_also_drops_the_session() {
    let mut state = resolving("tok-1");

    let drop_stored = apply_resolution(
        &mut state,
        "tok-1",
        Err(ApiError::Network("connection refused".to_owned())),
    );

    assert!(drop_stored);
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

#[test]
fn stale_response_for_superseded_token_is_discarded() {
    // Resolution for tok-1 was still in flight when tok-2 signed in.
    let mut state = resolving("tok-2");
    state.user = Some(identity("fresh"));

    let drop_stored = apply_resolution(&mut state, "tok-1", Err(rejected()));

    assert!(!drop_stored);
    assert_eq!(state.token.as_deref(), Some("tok-2"));
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("fresh"));
}

#[test]
fn response_arriving_after_logout_is_discarded() {
    let mut state = resolving("tok-1");
    apply_signed_out(&mut state);

    let drop_stored = apply_resolution(&mut state, "tok-1", Ok(identity("ghost")));

    assert!(!drop_stored);
    assert_eq!(state.user, None);
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

// =============================================================
// Sign-in attempts
// =============================================================

#[test]
fn begin_pending_refuses_a_second_attempt() {
    let mut state = AuthState::default();

    assert!(begin_pending(&mut state));
    assert!(!begin_pending(&mut state));
}

#[test]
fn attempt_can_restart_after_the_pending_flag_clears() {
    let mut state = AuthState::default();
    assert!(begin_pending(&mut state));

    state.pending = false;

    assert!(begin_pending(&mut state));
}

#[test]
fn failed_attempt_leaves_session_and_identity_untouched() {
    let mut state = AuthState {
        token: None,
        user: None,
        loading: false,
        pending: false,
    };
    assert!(begin_pending(&mut state));

    // Rejected credentials reset only the in-flight flag.
    state.pending = false;

    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

#[test]
fn signing_in_re_enters_resolution_for_the_new_token() {
    let mut state = AuthState {
        token: None,
        user: None,
        loading: false,
        pending: true,
    };

    apply_signed_in(&mut state, "tok-9".to_owned(), identity("dana"));

    assert_eq!(state.token.as_deref(), Some("tok-9"));
    assert!(!state.pending);
    assert_eq!(state.status(), AuthStatus::Loading);

    let drop_stored = apply_resolution(&mut state, "tok-9", Ok(identity("dana")));

    assert!(!drop_stored);
    assert_eq!(state.status(), AuthStatus::Authenticated);
}

// =============================================================
// Sign-out and the no-session path
// =============================================================

#[test]
fn no_session_settles_unauthenticated() {
    let mut state = AuthState::default();

    apply_no_session(&mut state);

    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

#[test]
fn signing_out_is_idempotent() {
    let mut state = resolving("tok-1");
    state.user = Some(identity("dana"));

    apply_signed_out(&mut state);
    let first = state.clone();
    apply_signed_out(&mut state);

    assert_eq!(state, first);
    assert_eq!(state.token, None);
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}
