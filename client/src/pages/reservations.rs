//! Reservations page: booking draft on top, reservation list below.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::nav::AppNav;
use crate::components::room_form::format_cents;
use crate::state::modal::ModalKind;
use crate::state::reservations::{Reservation, ReservationStatus};
use crate::state::room_reservation::{DraftError, RoomReservationState};
use crate::state::rooms::RoomState;
use crate::state::stores::{AppStores, use_stores};

/// Parse the two `<input type="date">` values into a stay.
fn parse_stay(check_in: &str, check_out: &str) -> Result<(NaiveDate, NaiveDate), DraftError> {
    let parse = |raw: &str| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
    let (Some(check_in), Some(check_out)) = (parse(check_in), parse(check_out)) else {
        return Err(DraftError::MissingDates);
    };
    if check_out <= check_in {
        return Err(DraftError::InvalidRange);
    }
    Ok((check_in, check_out))
}

/// Summary of the stay the draft would book, e.g. `"3 night(s), 270.00"`.
fn quote_line(mut draft: RoomReservationState, rooms: &RoomState, check_in: &str, check_out: &str) -> Option<String> {
    let (from, to) = parse_stay(check_in, check_out).ok()?;
    draft.set_dates(from, to).ok()?;
    let room = rooms.get(draft.room_id.as_deref()?)?;
    let total = draft.quote_cents(room)?;
    Some(format!("{} night(s), {}", draft.nights()?, format_cents(total)))
}

fn status_label(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "Pending",
        ReservationStatus::Confirmed => "Confirmed",
        ReservationStatus::CheckedIn => "Checked in",
        ReservationStatus::CheckedOut => "Checked out",
        ReservationStatus::Cancelled => "Cancelled",
    }
}

fn submit_draft(stores: AppStores, check_in: &str, check_out: &str) -> Result<(), DraftError> {
    let (from, to) = parse_stay(check_in, check_out)?;
    stores.room_reservation.try_update(|d| d.set_dates(from, to)).unwrap_or(Ok(()))?;
    let id = uuid::Uuid::new_v4().to_string();
    let reservation = stores
        .room_reservation
        .with_untracked(|d| stores.reservations.with_untracked(|r| d.to_reservation(&id, r)))?;
    log::info!("reservation created: id={} room={}", reservation.id, reservation.room_id);
    stores.reservations.update(|r| r.upsert(reservation));
    stores.room_reservation.update(|d| d.clear());
    Ok(())
}

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let stores = use_stores();
    let check_in = RwSignal::new(String::new());
    let check_out = RwSignal::new(String::new());

    let draft_room = move || stores.room_reservation.with(|d| d.room_id.clone()).unwrap_or_default();
    let draft_guest = move || stores.room_reservation.with(|d| d.guest_id.clone()).unwrap_or_default();
    let quote = move || {
        let draft = stores.room_reservation.get();
        stores.rooms.with(|rooms| quote_line(draft, rooms, &check_in.get(), &check_out.get()))
    };

    let on_create = move |_| match submit_draft(stores, &check_in.get(), &check_out.get()) {
        Ok(()) => {
            check_in.set(String::new());
            check_out.set(String::new());
            stores.notify_success("Reservation created");
        }
        Err(e) => stores.notify_error(e.to_string()),
    };

    let reservations = move || stores.reservations.with(|r| r.reservations.clone());

    view! {
        <div class="app-page">
            <AppNav/>
            <main class="reservations-page">
                <h1>"Reservations"</h1>
                <section class="booking-draft">
                    <h2>"New booking"</h2>
                    <label>
                        "Room"
                        <select
                            prop:value=draft_room
                            on:change=move |ev| {
                                let id = event_target_value(&ev);
                                stores.room_reservation.update(|d| d.select_room(&id));
                            }
                        >
                            <option value="">"Select a room"</option>
                            {move || {
                                stores
                                    .rooms
                                    .with(|r| {
                                        r.available()
                                            .map(|room| {
                                                view! {
                                                    <option value=room.id.clone()>{room.number.clone()}</option>
                                                }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </select>
                    </label>
                    <label>
                        "Guest"
                        <select
                            prop:value=draft_guest
                            on:change=move |ev| {
                                let id = event_target_value(&ev);
                                stores.room_reservation.update(|d| d.select_guest(&id));
                            }
                        >
                            <option value="">"Select a guest"</option>
                            {move || {
                                stores
                                    .guests
                                    .with(|g| {
                                        g.guests
                                            .iter()
                                            .map(|guest| {
                                                view! {
                                                    <option value=guest.id.clone()>{guest.name.clone()}</option>
                                                }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </select>
                    </label>
                    <label>
                        "Check-in"
                        <input
                            type="date"
                            prop:value=move || check_in.get()
                            on:input=move |ev| check_in.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Check-out"
                        <input
                            type="date"
                            prop:value=move || check_out.get()
                            on:input=move |ev| check_out.set(event_target_value(&ev))
                        />
                    </label>
                    <p class="booking-draft__quote">{move || quote().unwrap_or_default()}</p>
                    <button class="btn btn--primary" on:click=on_create>"Create reservation"</button>
                </section>
                <table class="data-table">
                    <tbody>
                        <For each=reservations key=|r| (r.id.clone(), r.status) let:reservation>
                            <ReservationRow reservation=reservation/>
                        </For>
                    </tbody>
                </table>
            </main>
        </div>
    }
}

#[component]
fn ReservationRow(reservation: Reservation) -> impl IntoView {
    let stores = use_stores();
    let guest = stores
        .guests
        .with_untracked(|g| g.get(&reservation.guest_id).map(|g| g.name.clone()))
        .unwrap_or_else(|| reservation.guest_id.clone());
    let room = stores
        .rooms
        .with_untracked(|r| r.get(&reservation.room_id).map(|r| r.number.clone()))
        .unwrap_or_else(|| reservation.room_id.clone());
    let active = reservation.status.is_active();
    let id = reservation.id.clone();

    view! {
        <tr>
            <td>{guest}</td>
            <td>{room}</td>
            <td>{reservation.check_in.to_string()}" to "{reservation.check_out.to_string()}</td>
            <td>{reservation.nights()}" night(s)"</td>
            <td>{status_label(reservation.status)}</td>
            <td>
                {active
                    .then(|| {
                        view! {
                            <button
                                class="btn btn--danger"
                                on:click=move |_| {
                                    stores
                                        .modal
                                        .update(|m| {
                                            m.open(ModalKind::ConfirmCancelReservation {
                                                reservation_id: id.clone(),
                                            })
                                        })
                                }
                            >
                                "Cancel"
                            </button>
                        }
                    })}
            </td>
        </tr>
    }
}
