//! Which modal dialog, if any, is open.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Dialogs that can sit above any page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Profile,
    /// Create (`None`) or edit a guest.
    GuestForm { guest_id: Option<String> },
    /// Create (`None`) or edit a room.
    RoomForm { room_id: Option<String> },
    ConfirmCancelReservation { reservation_id: String },
}

/// At most one modal is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub active: Option<ModalKind>,
}

impl ModalState {
    /// Open `kind`, replacing whatever was open.
    pub fn open(&mut self, kind: ModalKind) {
        self.active = Some(kind);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self, kind: &ModalKind) -> bool {
        self.active.as_ref() == Some(kind)
    }
}
