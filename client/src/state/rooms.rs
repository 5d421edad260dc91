//! Room inventory state.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use serde::{Deserialize, Serialize};

/// Room category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    #[default]
    Single,
    Double,
    Suite,
}

/// Housekeeping / occupancy status of a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Cleaning => "Cleaning",
            Self::Maintenance => "Maintenance",
        }
    }
}

/// A bookable room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Door number as shown to staff (e.g. `"204"`).
    pub number: String,
    pub kind: RoomKind,
    pub status: RoomStatus,
    /// Nightly rate in the smallest currency unit.
    pub nightly_rate_cents: u32,
}

/// Room inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomState {
    pub rooms: Vec<Room>,
}

impl RoomState {
    pub fn replace_all(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
    }

    /// Insert a room or overwrite the one with the same id.
    pub fn upsert(&mut self, room: Room) {
        match self.rooms.iter_mut().find(|r| r.id == room.id) {
            Some(existing) => *existing = room,
            None => self.rooms.push(room),
        }
    }

    /// Change a room's status. Returns `false` for an unknown id.
    pub fn set_status(&mut self, id: &str, status: RoomStatus) -> bool {
        match self.rooms.iter_mut().find(|r| r.id == id) {
            Some(room) => {
                room.status = status;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn available(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.status == RoomStatus::Available)
    }

    /// Count of rooms per status, in declaration order.
    pub fn status_counts(&self) -> [(RoomStatus, usize); 4] {
        [RoomStatus::Available, RoomStatus::Occupied, RoomStatus::Cleaning, RoomStatus::Maintenance]
            .map(|status| (status, self.rooms.iter().filter(|r| r.status == status).count()))
    }
}
