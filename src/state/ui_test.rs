use super::*;

// =============================================================
// Filter
// =============================================================

#[test]
fn default_filter_is_empty() {
    let state = UiState::default();
    assert!(state.filter.is_empty());
    assert!(state.toasts.is_empty());
}

#[test]
fn set_filter_overwrites() {
    let mut state = UiState::default();
    state.set_filter("ann".to_owned());
    assert_eq!(state.filter, "ann");
    state.set_filter(String::new());
    assert!(state.filter.is_empty());
}

// =============================================================
// Toast queue
// =============================================================

#[test]
fn push_toast_queues_in_order() {
    let mut state = UiState::default();
    state.push_toast(ToastKind::Success, "first");
    state.push_toast(ToastKind::Error, "second");

    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "first");
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn push_toast_ids_are_unique() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Success, "a");
    let b = state.push_toast(ToastKind::Success, "b");
    assert_ne!(a, b);
}

#[test]
fn dismiss_toast_removes_only_the_target() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Success, "a");
    let _b = state.push_toast(ToastKind::Error, "b");

    state.dismiss_toast(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "b");
}

#[test]
fn dismiss_toast_unknown_id_is_a_no_op() {
    let mut state = UiState::default();
    state.push_toast(ToastKind::Success, "a");
    state.dismiss_toast(uuid::Uuid::new_v4());
    assert_eq!(state.toasts.len(), 1);
}
