//! Signed-in overview: counts pulled from each store.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::nav::AppNav;
use crate::state::rooms::{RoomState, RoomStatus};
use crate::state::stores::use_stores;

/// Share of rooms currently occupied, rounded down. `None` with no rooms.
fn occupancy_percent(rooms: &RoomState) -> Option<usize> {
    let total = rooms.rooms.len();
    if total == 0 {
        return None;
    }
    let occupied = rooms.rooms.iter().filter(|r| r.status == RoomStatus::Occupied).count();
    Some(occupied * 100 / total)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stores = use_stores();
    let greeting = move || {
        stores
            .auth
            .with(|a| a.user.as_ref().map(|u| format!("Welcome, {}", u.display_name())))
            .unwrap_or_else(|| "Welcome".to_owned())
    };
    let occupancy = move || {
        stores
            .rooms
            .with(occupancy_percent)
            .map_or_else(|| "No rooms yet".to_owned(), |p| format!("{p}% occupied"))
    };
    let arrivals = move || {
        let today = chrono::Local::now().date_naive();
        stores.reservations.with(|r| r.arrivals_on(today))
    };
    let guest_count = move || stores.guests.with(|g| g.guests.len());

    view! {
        <div class="app-page">
            <AppNav/>
            <main class="dashboard">
                <h1>{greeting}</h1>
                <section class="dashboard__tiles">
                    <div class="tile">
                        <h3>"Occupancy"</h3>
                        <p>{occupancy}</p>
                    </div>
                    <div class="tile">
                        <h3>"Arrivals today"</h3>
                        <p>{arrivals}</p>
                    </div>
                    <div class="tile">
                        <h3>"Guests"</h3>
                        <p>{guest_count}</p>
                    </div>
                </section>
                <section class="dashboard__rooms">
                    <h2>"Rooms by status"</h2>
                    <ul>
                        {move || {
                            stores
                                .rooms
                                .with(RoomState::status_counts)
                                .into_iter()
                                .map(|(status, n)| view! { <li>{status.label()}": "{n}</li> })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </main>
        </div>
    }
}
