use super::*;

// =============================================================
// Protected routes
// =============================================================

#[test]
fn protected_waits_while_resolution_runs() {
    assert_eq!(protected(AuthStatus::Loading), Gate::Wait);
}

#[test]
fn protected_renders_for_signed_in_users() {
    assert_eq!(protected(AuthStatus::Authenticated), Gate::Render);
}

#[test]
fn protected_redirects_signed_out_users_to_login() {
    assert_eq!(
        protected(AuthStatus::Unauthenticated),
        Gate::Redirect(LOGIN_PATH)
    );
}

// =============================================================
// Public-only routes
// =============================================================

#[test]
fn public_only_waits_while_resolution_runs() {
    assert_eq!(public_only(AuthStatus::Loading), Gate::Wait);
}

#[test]
fn public_only_sends_signed_in_users_to_the_landing_route() {
    assert_eq!(
        public_only(AuthStatus::Authenticated),
        Gate::Redirect(LANDING_PATH)
    );
}

#[test]
fn public_only_renders_for_signed_out_users() {
    assert_eq!(public_only(AuthStatus::Unauthenticated), Gate::Render);
}
