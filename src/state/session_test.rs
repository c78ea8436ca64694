use super::*;
use crate::util::persist::MemoryStore;

fn profile(id: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        bio: None,
        avatar_url: None,
    }
}

fn auth_response(token: &str, id: &str, role: Role) -> AuthResponse {
    AuthResponse {
        token: token.to_owned(),
        data: profile(id, role),
    }
}

fn token_user_invariant_holds(session: &Session) -> bool {
    session.token.is_none() == session.user.is_none()
}

// =============================================================
// Defaults and hydration
// =============================================================

#[test]
fn default_session_is_loading_and_logged_out() {
    let session = Session::default();
    assert!(session.loading);
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn hydrate_on_empty_storage_yields_logged_out_not_loading() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);
    assert!(!session.loading);
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert!(token_user_invariant_holds(&session));
}

#[test]
fn hydrate_restores_persisted_session() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "T");
    store.set(
        USER_KEY,
        &serde_json::to_string(&profile("u1", Role::User)).unwrap(),
    );

    let mut session = Session::default();
    session.hydrate(&store);
    assert_eq!(session.token.as_deref(), Some("T"));
    assert_eq!(session.user, Some(profile("u1", Role::User)));
    assert!(!session.loading);
}

#[test]
fn hydrate_with_malformed_user_json_degrades_to_logged_out() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "T");
    store.set(USER_KEY, "not json at all {{");

    let mut session = Session::default();
    session.hydrate(&store);
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert!(!session.loading);
    assert!(token_user_invariant_holds(&session));
}

#[test]
fn hydrate_with_token_but_no_user_stays_logged_out() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "T");

    let mut session = Session::default();
    session.hydrate(&store);
    assert!(session.token.is_none());
    assert!(token_user_invariant_holds(&session));
}

#[test]
fn hydrate_with_user_but_no_token_stays_logged_out() {
    let store = MemoryStore::new();
    store.set(
        USER_KEY,
        &serde_json::to_string(&profile("u1", Role::User)).unwrap(),
    );

    let mut session = Session::default();
    session.hydrate(&store);
    assert!(session.user.is_none());
    assert!(token_user_invariant_holds(&session));
}

#[test]
fn loading_never_returns_to_true_after_hydrate() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);
    assert!(!session.loading);

    session.login(&store, auth_response("abc", "u1", Role::User));
    assert!(!session.loading);
    session.logout(&store);
    assert!(!session.loading);
    session.hydrate(&store);
    assert!(!session.loading);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_replaces_token_and_user_atomically() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);

    session.login(&store, auth_response("abc", "u1", Role::User));
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(session.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert!(session.is_authenticated());
    assert!(token_user_invariant_holds(&session));
}

#[test]
fn login_persists_both_keys() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);

    session.login(&store, auth_response("abc", "u1", Role::User));
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
    let raw = store.get(USER_KEY).expect("user persisted");
    let persisted: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, profile("u1", Role::User));
}

#[test]
fn login_round_trips_through_fresh_hydrate() {
    let store = MemoryStore::new();
    let mut first = Session::default();
    first.hydrate(&store);
    first.login(&store, auth_response("T", "u1", Role::Admin));

    // Fresh process: new session hydrating from the same storage.
    let mut second = Session::default();
    second.hydrate(&store);
    assert_eq!(second.token.as_deref(), Some("T"));
    assert_eq!(second.user, Some(profile("u1", Role::Admin)));
}

#[test]
fn second_login_replaces_previous_session() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);

    session.login(&store, auth_response("t1", "u1", Role::User));
    session.login(&store, auth_response("t2", "u2", Role::Admin));
    assert_eq!(session.token.as_deref(), Some("t2"));
    assert_eq!(session.user.as_ref().map(|u| u.id.as_str()), Some("u2"));
    assert!(session.is_admin());
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t2"));
}

// =============================================================
// Profile updates
// =============================================================

#[test]
fn update_user_replaces_profile_and_persisted_copy() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);
    session.login(&store, auth_response("T", "u1", Role::User));

    let mut renamed = profile("u1", Role::User);
    renamed.name = "Alicia".to_owned();
    session.update_user(&store, renamed.clone());

    assert_eq!(session.user, Some(renamed.clone()));
    let raw = store.get(USER_KEY).expect("user persisted");
    let persisted: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, renamed);
    assert!(token_user_invariant_holds(&session));
}

#[test]
fn update_user_is_ignored_when_logged_out() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);

    session.update_user(&store, profile("u1", Role::User));
    assert!(session.user.is_none());
    assert_eq!(store.get(USER_KEY), None);
    assert!(token_user_invariant_holds(&session));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_state_and_storage() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);
    session.login(&store, auth_response("abc", "u1", Role::User));

    session.logout(&store);
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
    assert!(token_user_invariant_holds(&session));
}

#[test]
fn logout_when_already_logged_out_is_idempotent() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);

    session.logout(&store);
    let after_first = session.clone();
    session.logout(&store);
    assert_eq!(session, after_first);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

// =============================================================
// Role helpers and landing paths
// =============================================================

#[test]
fn is_admin_only_for_admin_role() {
    let store = MemoryStore::new();
    let mut session = Session::default();
    session.hydrate(&store);
    assert!(!session.is_admin());

    session.login(&store, auth_response("t", "u1", Role::User));
    assert!(!session.is_admin());
    session.login(&store, auth_response("t", "u2", Role::Admin));
    assert!(session.is_admin());
}

#[test]
fn landing_path_for_standard_user_is_dashboard() {
    assert_eq!(landing_path(&profile("1", Role::User)), "/");
}

#[test]
fn landing_path_for_admin_is_admin_overview() {
    assert_eq!(landing_path(&profile("2", Role::Admin)), "/admin");
}
