use super::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn reservation(id: &str, room: &str, from: u32, to: u32) -> Reservation {
    Reservation {
        id: id.to_owned(),
        guest_id: "g-1".to_owned(),
        room_id: room.to_owned(),
        check_in: day(from),
        check_out: day(to),
        status: ReservationStatus::Confirmed,
    }
}

#[test]
fn nights_counts_days_between_dates() {
    assert_eq!(reservation("x", "r-1", 3, 7).nights(), 4);
}

#[test]
fn overlap_is_half_open() {
    let r = reservation("x", "r-1", 3, 7);
    assert!(r.overlaps(day(6), day(9)));
    assert!(r.overlaps(day(1), day(4)));
    assert!(!r.overlaps(day(7), day(9)));
    assert!(!r.overlaps(day(1), day(3)));
}

#[test]
fn cancelled_reservation_frees_the_room() {
    let mut state = ReservationState::default();
    state.upsert(reservation("a", "r-1", 3, 7));
    assert!(state.is_room_booked("r-1", day(4), day(5)));
    assert!(!state.is_room_booked("r-2", day(4), day(5)));

    assert!(state.cancel("a"));
    assert!(!state.is_room_booked("r-1", day(4), day(5)));
    assert!(!state.cancel("missing"));
}

#[test]
fn for_guest_and_arrivals() {
    let mut state = ReservationState::default();
    let mut other = reservation("b", "r-2", 3, 4);
    other.guest_id = "g-2".to_owned();
    state.replace_all(vec![reservation("a", "r-1", 3, 7), other]);

    assert_eq!(state.for_guest("g-2").count(), 1);
    assert_eq!(state.arrivals_on(day(3)), 2);
    state.set_status("b", ReservationStatus::CheckedOut);
    assert_eq!(state.arrivals_on(day(3)), 1);
}

#[test]
fn status_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&ReservationStatus::CheckedIn).unwrap(), "\"checked_in\"");
}
