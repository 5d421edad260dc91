//! Guest directory page.

#[cfg(test)]
#[path = "guests_test.rs"]
mod guests_test;

use leptos::prelude::*;

use crate::components::nav::AppNav;
use crate::state::guests::Guest;
use crate::state::modal::ModalKind;
use crate::state::reservations::ReservationState;
use crate::state::stores::use_stores;

/// A guest with a pending, confirmed or in-house stay cannot be removed.
fn has_active_stay(reservations: &ReservationState, guest_id: &str) -> bool {
    reservations.for_guest(guest_id).any(|r| r.status.is_active())
}

#[component]
pub fn GuestsPage() -> impl IntoView {
    let stores = use_stores();
    let visible = move || stores.guests.with(|g| g.filtered().into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="app-page">
            <AppNav/>
            <main class="guests-page">
                <header class="page-header">
                    <h1>"Guests"</h1>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search by name or email"
                        prop:value=move || stores.guests.with(|g| g.filter.clone())
                        on:input=move |ev| {
                            let filter = event_target_value(&ev);
                            stores.guests.update(|g| g.set_filter(&filter));
                        }
                    />
                    <button
                        class="btn btn--primary"
                        on:click=move |_| stores.modal.update(|m| m.open(ModalKind::GuestForm { guest_id: None }))
                    >
                        "Add guest"
                    </button>
                </header>
                <ul class="guest-list">
                    <For each=visible key=|g| g.clone() let:guest>
                        <GuestRow guest=guest/>
                    </For>
                </ul>
                <SelectedGuestPanel/>
            </main>
        </div>
    }
}

#[component]
fn GuestRow(guest: Guest) -> impl IntoView {
    let stores = use_stores();
    let id = StoredValue::new(guest.id.clone());
    let selected = move || stores.guests.with(|g| g.selected.as_deref() == Some(id.get_value().as_str()));
    let stays = move || stores.reservations.with(|r| r.for_guest(&id.get_value()).count());

    view! {
        <li
            class="guest-list__item"
            class:guest-list__item--selected=selected
            on:click=move |_| stores.guests.update(|g| g.select(Some(&id.get_value())))
        >
            <span class="guest-list__name">{guest.name.clone()}</span>
            {guest.vip.then(|| view! { <span class="badge">"VIP"</span> })}
            <span class="guest-list__email">{guest.email.clone()}</span>
            <span class="guest-list__phone">{guest.phone.clone().unwrap_or_default()}</span>
            <span class="guest-list__stays">{stays}" stay(s)"</span>
            <button
                class="btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    stores.modal.update(|m| m.open(ModalKind::GuestForm { guest_id: Some(id.get_value()) }));
                }
            >
                "Edit"
            </button>
        </li>
    }
}

/// Details for the selected guest, with removal.
#[component]
fn SelectedGuestPanel() -> impl IntoView {
    let stores = use_stores();
    let selected = move || stores.guests.with(|g| g.selected_guest().cloned());

    move || {
        selected().map(|guest| {
            let id = guest.id.clone();
            let on_remove = move |_| {
                if stores.reservations.with_untracked(|r| has_active_stay(r, &id)) {
                    stores.notify_error("Guest has active reservations");
                    return;
                }
                if let Some(removed) = stores.guests.try_update(|g| g.remove(&id)).flatten() {
                    stores.notify_success(format!("Removed {}", removed.name));
                }
            };
            view! {
                <aside class="guest-detail">
                    <h2>{guest.name.clone()}</h2>
                    <p>{guest.email.clone()}</p>
                    <p>{guest.phone.clone().unwrap_or_default()}</p>
                    <button class="btn" on:click=move |_| stores.guests.update(|g| g.select(None))>
                        "Close"
                    </button>
                    <button class="btn btn--danger" on:click=on_remove>
                        "Remove guest"
                    </button>
                </aside>
            }
        })
    }
}
