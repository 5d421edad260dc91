//! Renders whichever modal the modal store has open.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never mount dialogs themselves; they call `ModalState::open` and this
//! host, mounted once under the router, draws the matching dialog.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guest_form::GuestFormDialog;
use crate::components::room_form::RoomFormDialog;
use crate::net::api::BrowserAuthClient;
use crate::net::types::User;
use crate::routes::LOGIN_PATH;
use crate::state::modal::ModalKind;
use crate::state::stores::{AppStores, use_stores};

#[component]
pub fn ModalHost() -> impl IntoView {
    let stores = use_stores();
    let on_close = Callback::new(move |_| stores.modal.update(|m| m.close()));

    move || {
        let active = stores.modal.with(|m| m.active.clone());
        match active {
            None => ().into_any(),
            Some(ModalKind::Profile) => view! { <ProfileDialog on_close=on_close/> }.into_any(),
            Some(ModalKind::GuestForm { guest_id }) => {
                view! { <GuestFormDialog guest_id=guest_id on_close=on_close/> }.into_any()
            }
            Some(ModalKind::RoomForm { room_id }) => {
                view! { <RoomFormDialog room_id=room_id on_close=on_close/> }.into_any()
            }
            Some(ModalKind::ConfirmCancelReservation { reservation_id }) => {
                view! { <ConfirmCancelDialog reservation_id=reservation_id on_close=on_close/> }.into_any()
            }
        }
    }
}

/// Shared dialog chrome: backdrop click and Escape both close.
#[component]
pub fn DialogFrame(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn ProfileDialog(on_close: Callback<()>) -> impl IntoView {
    let stores = use_stores();
    let client = expect_context::<BrowserAuthClient>();
    let navigate = use_navigate();

    let name = move || profile_field(stores, |u| Some(u.display_name().to_owned()));
    let email = move || profile_field(stores, |u| u.email.clone());
    let role = move || profile_field(stores, |u| u.role.clone());

    let on_sign_out = move |_| {
        client.logout();
        stores.auth.update(|a| a.sign_out());
        stores.modal.update(|m| m.close());
        stores.notify_success("Signed out");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <DialogFrame title="Profile" on_close=on_close>
            <div class="dialog__profile-row">
                <span class="dialog__profile-label">"Name"</span>
                <span class="dialog__profile-value">{name}</span>
            </div>
            <div class="dialog__profile-row">
                <span class="dialog__profile-label">"Email"</span>
                <span class="dialog__profile-value">{email}</span>
            </div>
            <div class="dialog__profile-row">
                <span class="dialog__profile-label">"Role"</span>
                <span class="dialog__profile-value">{role}</span>
            </div>
            <div class="dialog__actions">
                <a class="btn" href="/profile" on:click=move |_| on_close.run(())>"Open profile"</a>
                <button class="btn" on:click=on_sign_out>"Sign out"</button>
                <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
            </div>
        </DialogFrame>
    }
}

fn profile_field(stores: AppStores, pick: impl Fn(&User) -> Option<String>) -> String {
    stores
        .auth
        .with(|a| a.user.as_ref().and_then(|u| pick(u)))
        .unwrap_or_else(|| "-".to_owned())
}

#[component]
fn ConfirmCancelDialog(reservation_id: String, on_close: Callback<()>) -> impl IntoView {
    let stores = use_stores();
    let id = StoredValue::new(reservation_id);

    let on_confirm = move |_| {
        let cancelled = stores.reservations.try_update(|r| r.cancel(&id.get_value())).unwrap_or(false);
        if cancelled {
            stores.notify_success("Reservation cancelled");
        } else {
            stores.notify_error("Reservation not found");
        }
        on_close.run(());
    };

    view! {
        <DialogFrame title="Cancel reservation?" on_close=on_close>
            <p>"The room will be released for these dates."</p>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>"Keep"</button>
                <button class="btn btn--danger" on:click=on_confirm>"Cancel reservation"</button>
            </div>
        </DialogFrame>
    }
}
