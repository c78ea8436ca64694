//! Route guards for protected and admin-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route component must apply identical gating: wait out hydration,
//! redirect the unauthenticated to `/login`, and (for the admin surface)
//! bounce non-admins back to the dashboard. The decision itself is a pure
//! function of the session so it can be tested without a browser; the
//! Leptos effect only executes the verdict.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Verdict for one navigation attempt at a guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Hydration has not completed; render a neutral waiting indicator and
    /// neither admit nor redirect yet.
    Pending,
    /// Send the visitor to the given path, discarding the attempted target.
    Redirect(&'static str),
    /// Render the requested view.
    Allow,
}

/// Gate for routes that require any authenticated user.
#[must_use]
pub fn protected_outcome(session: &Session) -> RouteOutcome {
    if session.loading {
        RouteOutcome::Pending
    } else if session.is_authenticated() {
        RouteOutcome::Allow
    } else {
        RouteOutcome::Redirect("/login")
    }
}

/// Gate for admin-only routes: unauthenticated visitors go to `/login`,
/// authenticated non-admins back to the dashboard.
#[must_use]
pub fn admin_outcome(session: &Session) -> RouteOutcome {
    match protected_outcome(session) {
        RouteOutcome::Allow if !session.is_admin() => RouteOutcome::Redirect("/"),
        other => other,
    }
}

/// Redirect to `/login` whenever the session has loaded and no user is
/// present.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    install_guard(session, protected_outcome, navigate);
}

/// Admin-page variant: also sends authenticated non-admins to `/`.
pub fn install_admin_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    install_guard(session, admin_outcome, navigate);
}

fn install_guard<F>(
    session: RwSignal<Session>,
    outcome: fn(&Session) -> RouteOutcome,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let RouteOutcome::Redirect(target) = outcome(&session.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
