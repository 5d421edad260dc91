use super::*;

#[test]
fn modal_state_default_closed() {
    assert!(ModalState::default().active.is_none());
}

#[test]
fn open_replaces_previous_modal() {
    let mut state = ModalState::default();
    state.open(ModalKind::Profile);
    state.open(ModalKind::GuestForm { guest_id: Some("g-1".to_owned()) });
    assert!(!state.is_open(&ModalKind::Profile));
    assert!(state.is_open(&ModalKind::GuestForm { guest_id: Some("g-1".to_owned()) }));
    assert!(!state.is_open(&ModalKind::GuestForm { guest_id: None }));

    state.close();
    assert!(state.active.is_none());
}
