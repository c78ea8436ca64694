//! Login page with email/password credentials.
//!
//! On success the session is replaced wholesale and the browser navigates
//! to the role-specific landing view: admins to the admin overview,
//! everyone else to the dashboard. Rejected credentials leave the session
//! untouched and show an inline error.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Trim and sanity-check the credential fields.
pub(crate) fn validate_login(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Already signed in: skip the form and go straight to the landing view.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.loading
                && let Some(user) = state.user.as_ref()
            {
                navigate(
                    crate::state::session::landing_path(user),
                    NavigateOptions::default(),
                );
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login(&email.get(), &password.get()) {
                Ok(fields) => fields,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::util::persist::BrowserStore;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) => {
                        let landing = crate::state::session::landing_path(&resp.data);
                        session.update(|s| s.login(&BrowserStore, resp));
                        navigate(landing, NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &session);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Finboard"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
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
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a class="login-link" href="/register">
                        "Create one"
                    </a>
                </p>
            </div>
        </div>
    }
}
