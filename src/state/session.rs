//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "is a user authenticated, and who are they".
//! The session is hydrated once from persisted storage at startup, replaced
//! wholesale by a successful login, and cleared wholesale by logout. Route
//! guards and identity-aware components read it through the shared
//! `RwSignal<Session>` context; nothing else writes the persisted keys.
//!
//! INVARIANTS
//! ==========
//! `token` and `user` are both present or both absent, never one without
//! the other. `loading` starts `true` and drops to `false` at the end of
//! the first hydrate, never to return to `true`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{AuthResponse, Role, User};
use crate::util::persist::KeyValueStore;

/// Persisted-storage key holding the opaque credential token.
pub const TOKEN_KEY: &str = "token";
/// Persisted-storage key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// The authenticated state of the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque credential issued by the backend; `None` when logged out.
    pub token: Option<String>,
    /// Profile of the authenticated user; `None` when logged out.
    pub user: Option<User>,
    /// True only between process start and the first completed hydrate.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

impl Session {
    /// Whether a user is currently logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the logged-in user holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Restore session state from persisted storage.
    ///
    /// Populates `token`/`user` only when both keys are present and the
    /// user record parses as a valid profile; anything else is treated as
    /// "no session" rather than an error. Always clears `loading`.
    pub fn hydrate<S: KeyValueStore>(&mut self, store: &S) {
        if let Some((token, user)) = read_persisted(store) {
            self.token = Some(token);
            self.user = Some(user);
        }
        self.loading = false;
    }

    /// Record a successful login: persist both keys, then replace both
    /// in-memory fields. Persistence is best-effort; the in-memory session
    /// updates even if the storage write is dropped.
    pub fn login<S: KeyValueStore>(&mut self, store: &S, response: AuthResponse) {
        store.set(TOKEN_KEY, &response.token);
        if let Ok(raw) = serde_json::to_string(&response.data) {
            store.set(USER_KEY, &raw);
        }
        self.token = Some(response.token);
        self.user = Some(response.data);
    }

    /// Replace the profile of an already-authenticated session, e.g. after
    /// a profile edit, keeping the persisted copy in sync. Ignored when
    /// logged out so the token/user pairing invariant holds.
    pub fn update_user<S: KeyValueStore>(&mut self, store: &S, user: User) {
        if self.token.is_none() {
            return;
        }
        if let Ok(raw) = serde_json::to_string(&user) {
            store.set(USER_KEY, &raw);
        }
        self.user = Some(user);
    }

    /// Clear the session: erase both persisted keys and both in-memory
    /// fields. Safe to call when already logged out.
    pub fn logout<S: KeyValueStore>(&mut self, store: &S) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.token = None;
        self.user = None;
    }
}

/// Read and validate both persisted keys; `None` unless both are usable.
fn read_persisted<S: KeyValueStore>(store: &S) -> Option<(String, User)> {
    let token = store.get(TOKEN_KEY)?;
    let raw = store.get(USER_KEY)?;
    let user = serde_json::from_str::<User>(&raw).ok()?;
    Some((token, user))
}

/// Post-login landing path: admins go to the admin overview, every other
/// role to the standard dashboard.
#[must_use]
pub fn landing_path(user: &User) -> &'static str {
    match user.role {
        Role::Admin => "/admin",
        Role::User => "/",
    }
}
