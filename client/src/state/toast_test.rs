use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.success("Saved");
    let b = state.error("Login failed");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.success("one");
    let b = state.success("two");
    state.dismiss(a);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.success("one");
    state.dismiss(a);
    assert_ne!(state.success("two"), a);
}

#[test]
fn error_toasts_linger_longer() {
    assert_eq!(ToastKind::Success.duration(), Duration::from_millis(3000));
    assert_eq!(ToastKind::Error.duration(), Duration::from_millis(5000));
}
