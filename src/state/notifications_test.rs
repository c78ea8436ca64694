use super::*;

#[test]
fn push_appends_with_unique_ids() {
    let mut state = NotificationsState::default();
    let a = state.error("login failed");
    let b = state.success("saved");
    assert_eq!(state.toasts.len(), 2);
    assert_ne!(a, b);
    assert_eq!(state.toasts[0].level, ToastLevel::Error);
    assert_eq!(state.toasts[1].level, ToastLevel::Success);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = NotificationsState::default();
    let a = state.error("one");
    let _b = state.error("two");
    state.dismiss(&a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "two");
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = NotificationsState::default();
    state.push(ToastLevel::Info, "hello");
    state.dismiss("nope");
    assert_eq!(state.toasts.len(), 1);
}
