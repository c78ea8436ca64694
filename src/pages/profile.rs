//! Profile page: view and edit the logged-in user's details.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::notifications::NotificationsState;
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    install_unauth_redirect(session, use_navigate());

    let name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Seed the form once the hydrated user is available.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        if let Some(user) = session.get().user {
            name.set(user.name);
            bio.set(user.bio.unwrap_or_default());
            avatar_url.set(user.avatar_url.unwrap_or_default());
            seeded.set(true);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            notifications.update(|n| {
                n.error("Name cannot be empty.");
            });
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::util::persist::BrowserStore;

            let bio_value = bio.get().trim().to_owned();
            let avatar_value = avatar_url.get().trim().to_owned();
            leptos::task::spawn_local(async move {
                let bio_opt = (!bio_value.is_empty()).then_some(bio_value.as_str());
                let avatar_opt = (!avatar_value.is_empty()).then_some(avatar_value.as_str());
                match crate::net::api::update_profile(&name_value, bio_opt, avatar_opt).await {
                    Ok(user) => {
                        session.update(|s| s.update_user(&BrowserStore, user));
                        notifications.update(|n| {
                            n.success("Profile saved.");
                        });
                    }
                    Err(e) => notifications.update(|n| {
                        n.error(e);
                    }),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, &session);
            busy.set(false);
        }
    };

    let email = move || {
        session
            .get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.email.clone())
    };
    let role_label = move || {
        match session.get().user.as_ref().map(|u| u.role) {
            Some(Role::Admin) => "Admin",
            _ => "User",
        }
    };

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-loading">"Loading..."</p> }
        >
            <Show when=move || session.get().is_authenticated()>
                <div class="profile-page">
                    <h1>"Profile"</h1>
                    <div class="profile-page__meta">
                        <span class="profile-page__email">{email}</span>
                        <span class="profile-page__role">{role_label}</span>
                    </div>
                    <form class="profile-form" on:submit=on_save>
                        <label class="profile-form__label">
                            "Name"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-form__label">
                            "Bio"
                            <textarea
                                class="profile-form__textarea"
                                prop:value=move || bio.get()
                                on:input=move |ev| bio.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="profile-form__label">
                            "Avatar URL"
                            <input
                                class="profile-form__input"
                                type="url"
                                prop:value=move || avatar_url.get()
                                on:input=move |ev| avatar_url.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Save"
                        </button>
                    </form>
                </div>
            </Show>
        </Show>
    }
}
