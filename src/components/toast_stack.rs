//! Toast stack rendering transient notifications.

use leptos::prelude::*;

use crate::state::notifications::{NotificationsState, ToastLevel};

/// Fixed-position stack of dismissible toasts, newest at the bottom.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toast-stack">
            {move || {
                notifications
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.level {
                            ToastLevel::Info => "toast",
                            ToastLevel::Success => "toast toast--success",
                            ToastLevel::Error => "toast toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message.clone()}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| {
                                        let id = id.clone();
                                        notifications.update(|n| n.dismiss(&id));
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
