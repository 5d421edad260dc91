//! Booking draft shared between the rooms and reservations pages.
//!
//! DESIGN
//! ======
//! The draft collects a room, a guest, and a date range across pages before a
//! reservation exists. Validation lives here so both pages reject the same
//! inputs with the same messages.

#[cfg(test)]
#[path = "room_reservation_test.rs"]
mod room_reservation_test;

use chrono::NaiveDate;

use super::reservations::{Reservation, ReservationState, ReservationStatus};
use super::rooms::Room;

/// Why a draft cannot become a reservation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Select a room first.")]
    MissingRoom,
    #[error("Select a guest first.")]
    MissingGuest,
    #[error("Choose check-in and check-out dates.")]
    MissingDates,
    #[error("Check-out must be after check-in.")]
    InvalidRange,
    #[error("Room is already booked for those dates.")]
    RoomUnavailable,
}

/// In-progress booking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomReservationState {
    pub room_id: Option<String>,
    pub guest_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl RoomReservationState {
    pub fn select_room(&mut self, room_id: &str) {
        self.room_id = Some(room_id.to_owned());
    }

    pub fn select_guest(&mut self, guest_id: &str) {
        self.guest_id = Some(guest_id.to_owned());
    }

    /// Set the stay dates.
    ///
    /// # Errors
    ///
    /// [`DraftError::InvalidRange`] unless `check_out` is after `check_in`;
    /// the draft is left unchanged.
    pub fn set_dates(&mut self, check_in: NaiveDate, check_out: NaiveDate) -> Result<(), DraftError> {
        if check_out <= check_in {
            return Err(DraftError::InvalidRange);
        }
        self.check_in = Some(check_in);
        self.check_out = Some(check_out);
        Ok(())
    }

    pub fn nights(&self) -> Option<i64> {
        Some((self.check_out? - self.check_in?).num_days())
    }

    /// Total price for the stay in `room`, in the smallest currency unit.
    pub fn quote_cents(&self, room: &Room) -> Option<u64> {
        let nights = u64::try_from(self.nights()?).ok()?;
        Some(nights * u64::from(room.nightly_rate_cents))
    }

    /// Turn the draft into a pending reservation, checking availability.
    ///
    /// # Errors
    ///
    /// A [`DraftError`] naming the first missing or conflicting field.
    pub fn to_reservation(&self, id: &str, existing: &ReservationState) -> Result<Reservation, DraftError> {
        let room_id = self.room_id.clone().ok_or(DraftError::MissingRoom)?;
        let guest_id = self.guest_id.clone().ok_or(DraftError::MissingGuest)?;
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err(DraftError::MissingDates);
        };
        if check_out <= check_in {
            return Err(DraftError::InvalidRange);
        }
        if existing.is_room_booked(&room_id, check_in, check_out) {
            return Err(DraftError::RoomUnavailable);
        }
        Ok(Reservation { id: id.to_owned(), guest_id, room_id, check_in, check_out, status: ReservationStatus::Pending })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
