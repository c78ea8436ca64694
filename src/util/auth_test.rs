use super::*;
use crate::net::types::{AuthResponse, Role, User};
use crate::util::persist::{KeyValueStore, MemoryStore};

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        bio: None,
        avatar_url: None,
    }
}

fn session_with(role: Option<Role>, loading: bool) -> Session {
    Session {
        token: role.map(|_| "T".to_owned()),
        user: role.map(user),
        loading,
    }
}

// =============================================================
// protected_outcome: the three-state machine
// =============================================================

#[test]
fn pending_while_hydration_incomplete() {
    let session = session_with(None, true);
    assert_eq!(protected_outcome(&session), RouteOutcome::Pending);
}

#[test]
fn pending_even_if_user_already_present_while_loading() {
    let session = session_with(Some(Role::User), true);
    assert_eq!(protected_outcome(&session), RouteOutcome::Pending);
}

#[test]
fn redirects_to_login_when_loaded_and_no_user() {
    let session = session_with(None, false);
    assert_eq!(protected_outcome(&session), RouteOutcome::Redirect("/login"));
}

#[test]
fn allows_when_loaded_and_user_present() {
    let session = session_with(Some(Role::User), false);
    assert_eq!(protected_outcome(&session), RouteOutcome::Allow);
}

// =============================================================
// admin_outcome
// =============================================================

#[test]
fn admin_gate_is_pending_while_loading() {
    let session = session_with(None, true);
    assert_eq!(admin_outcome(&session), RouteOutcome::Pending);
}

#[test]
fn admin_gate_redirects_unauthenticated_to_login() {
    let session = session_with(None, false);
    assert_eq!(admin_outcome(&session), RouteOutcome::Redirect("/login"));
}

#[test]
fn admin_gate_bounces_standard_user_to_dashboard() {
    let session = session_with(Some(Role::User), false);
    assert_eq!(admin_outcome(&session), RouteOutcome::Redirect("/"));
}

#[test]
fn admin_gate_admits_admin() {
    let session = session_with(Some(Role::Admin), false);
    assert_eq!(admin_outcome(&session), RouteOutcome::Allow);
}

// =============================================================
// End-to-end guard scenarios over the session lifecycle
// =============================================================

#[test]
fn empty_storage_hydrate_then_guard_redirects_to_login() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    assert_eq!(protected_outcome(&session), RouteOutcome::Pending);

    session.hydrate(&store);
    assert_eq!(protected_outcome(&session), RouteOutcome::Redirect("/login"));
}

#[test]
fn login_then_guard_allows_protected_content() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);

    session.login(
        &store,
        AuthResponse {
            token: "abc".to_owned(),
            data: user(Role::User),
        },
    );
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(protected_outcome(&session), RouteOutcome::Allow);
    // Standard users land on the dashboard, not the admin overview.
    assert_eq!(
        crate::state::session::landing_path(session.user.as_ref().unwrap()),
        "/"
    );
}

#[test]
fn logout_then_guard_redirects_again() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);
    session.login(
        &store,
        AuthResponse {
            token: "abc".to_owned(),
            data: user(Role::User),
        },
    );

    session.logout(&store);
    assert_eq!(store.get(crate::state::session::TOKEN_KEY), None);
    assert_eq!(store.get(crate::state::session::USER_KEY), None);
    assert_eq!(protected_outcome(&session), RouteOutcome::Redirect("/login"));
}
