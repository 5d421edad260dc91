//! Reservation ledger state.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a reservation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    /// Whether the reservation still holds its room.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::CheckedIn)
    }
}

/// A booking of one room by one guest for a date range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub guest_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open `[check_in, check_out)` overlap test.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.check_in < check_out && check_in < self.check_out
    }
}

/// All reservations known to the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationState {
    pub reservations: Vec<Reservation>,
}

impl ReservationState {
    pub fn replace_all(&mut self, reservations: Vec<Reservation>) {
        self.reservations = reservations;
    }

    /// Insert a reservation or overwrite the one with the same id.
    pub fn upsert(&mut self, reservation: Reservation) {
        match self.reservations.iter_mut().find(|r| r.id == reservation.id) {
            Some(existing) => *existing = reservation,
            None => self.reservations.push(reservation),
        }
    }

    /// Move a reservation to `status`. Returns `false` for an unknown id.
    pub fn set_status(&mut self, id: &str, status: ReservationStatus) -> bool {
        match self.reservations.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                r.status = status;
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self, id: &str) -> bool {
        self.set_status(id, ReservationStatus::Cancelled)
    }

    pub fn get(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn for_guest<'a>(&'a self, guest_id: &'a str) -> impl Iterator<Item = &'a Reservation> + 'a {
        self.reservations.iter().filter(move |r| r.guest_id == guest_id)
    }

    /// Whether an active reservation holds `room_id` anywhere in the range.
    pub fn is_room_booked(&self, room_id: &str, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.reservations
            .iter()
            .any(|r| r.room_id == room_id && r.status.is_active() && r.overlaps(check_in, check_out))
    }

    /// Active reservations arriving on `day`.
    pub fn arrivals_on(&self, day: NaiveDate) -> usize {
        self.reservations
            .iter()
            .filter(|r| r.check_in == day && r.status.is_active())
            .count()
    }
}
