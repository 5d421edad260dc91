//! Room inventory page.
//!
//! Staff change housekeeping status inline and start a booking with "Book",
//! which seeds the shared booking draft and hands over to the reservations
//! page.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav::AppNav;
use crate::components::room_form::format_cents;
use crate::state::modal::ModalKind;
use crate::state::rooms::{Room, RoomStatus};
use crate::state::stores::use_stores;

const STATUSES: [RoomStatus; 4] =
    [RoomStatus::Available, RoomStatus::Occupied, RoomStatus::Cleaning, RoomStatus::Maintenance];

fn status_value(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "available",
        RoomStatus::Occupied => "occupied",
        RoomStatus::Cleaning => "cleaning",
        RoomStatus::Maintenance => "maintenance",
    }
}

fn parse_status(raw: &str) -> Option<RoomStatus> {
    STATUSES.into_iter().find(|s| status_value(*s) == raw)
}

#[component]
pub fn RoomsPage() -> impl IntoView {
    let stores = use_stores();
    let rooms = move || stores.rooms.with(|r| r.rooms.clone());

    view! {
        <div class="app-page">
            <AppNav/>
            <main class="rooms-page">
                <header class="page-header">
                    <h1>"Rooms"</h1>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| stores.modal.update(|m| m.open(ModalKind::RoomForm { room_id: None }))
                    >
                        "Add room"
                    </button>
                </header>
                <Show when=move || stores.rooms.with(|r| r.rooms.is_empty())>
                    <p class="empty-state">"No rooms yet. Add the first one."</p>
                </Show>
                <table class="data-table">
                    <tbody>
                        <For each=rooms key=|room| room.id.clone() let:room>
                            <RoomRow room=room/>
                        </For>
                    </tbody>
                </table>
            </main>
        </div>
    }
}

#[component]
fn RoomRow(room: Room) -> impl IntoView {
    let stores = use_stores();
    let navigate = use_navigate();
    let id = room.id.clone();
    let status_id = id.clone();
    let edit_id = id.clone();
    let bookable = room.status == RoomStatus::Available;

    let on_status = move |ev: leptos::ev::Event| {
        if let Some(status) = parse_status(&event_target_value(&ev)) {
            stores.rooms.update(|r| {
                r.set_status(&status_id, status);
            });
        }
    };
    let on_book = move |_| {
        stores.room_reservation.update(|d| d.select_room(&id));
        navigate("/reservations", NavigateOptions::default());
    };

    view! {
        <tr>
            <td>{room.number.clone()}</td>
            <td>{format!("{:?}", room.kind)}</td>
            <td>{format_cents(u64::from(room.nightly_rate_cents))}</td>
            <td>
                <select prop:value=status_value(room.status) on:change=on_status>
                    {STATUSES
                        .into_iter()
                        .map(|s| view! { <option value=status_value(s)>{s.label()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td>
                <button
                    class="btn"
                    on:click=move |_| {
                        stores.modal.update(|m| m.open(ModalKind::RoomForm { room_id: Some(edit_id.clone()) }))
                    }
                >
                    "Edit"
                </button>
                <button class="btn btn--primary" disabled=!bookable on:click=on_book>
                    "Book"
                </button>
            </td>
        </tr>
    }
}
