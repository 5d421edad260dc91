//! Create/edit room dialog.

#[cfg(test)]
#[path = "room_form_test.rs"]
mod room_form_test;

use leptos::prelude::*;

use crate::components::modal_host::DialogFrame;
use crate::state::rooms::{Room, RoomKind, RoomStatus};
use crate::state::stores::use_stores;

/// Parse a rate like `"120"` or `"120.5"` into cents.
pub(crate) fn parse_rate_cents(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));
    if whole.is_empty() || frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: u32 = whole.parse().ok()?;
    let frac: u32 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u32>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac)
}

/// Format cents as `"120.50"`.
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn parse_kind(raw: &str) -> RoomKind {
    match raw {
        "double" => RoomKind::Double,
        "suite" => RoomKind::Suite,
        _ => RoomKind::Single,
    }
}

fn kind_value(kind: RoomKind) -> &'static str {
    match kind {
        RoomKind::Single => "single",
        RoomKind::Double => "double",
        RoomKind::Suite => "suite",
    }
}

#[component]
pub fn RoomFormDialog(room_id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let stores = use_stores();
    let existing = room_id
        .as_deref()
        .and_then(|id| stores.rooms.with_untracked(|r| r.get(id).cloned()));
    let editing = existing.is_some();
    let title = if editing { "Edit room" } else { "New room" };

    let number = RwSignal::new(existing.as_ref().map(|r| r.number.clone()).unwrap_or_default());
    let kind = RwSignal::new(existing.as_ref().map_or(RoomKind::Single, |r| r.kind));
    let rate = RwSignal::new(
        existing
            .as_ref()
            .map(|r| format_cents(u64::from(r.nightly_rate_cents)))
            .unwrap_or_default(),
    );
    let status = existing.as_ref().map_or(RoomStatus::Available, |r| r.status);
    let error = RwSignal::new(None::<&'static str>);
    let id = StoredValue::new(existing.map_or_else(|| uuid::Uuid::new_v4().to_string(), |r| r.id));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let door = number.get().trim().to_owned();
        if door.is_empty() {
            error.set(Some("Room number is required."));
            return;
        }
        let Some(nightly_rate_cents) = parse_rate_cents(&rate.get()) else {
            error.set(Some("Enter a nightly rate like 120 or 120.50."));
            return;
        };
        let room = Room { id: id.get_value(), number: door, kind: kind.get(), status, nightly_rate_cents };
        stores.rooms.update(|r| r.upsert(room));
        stores.notify_success(if editing { "Room updated" } else { "Room added" });
        on_close.run(());
    };

    view! {
        <DialogFrame title=title on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <input
                    class="dialog__input"
                    placeholder="Room number"
                    prop:value=move || number.get()
                    on:input=move |ev| number.set(event_target_value(&ev))
                />
                <select
                    class="dialog__input"
                    prop:value=move || kind_value(kind.get())
                    on:change=move |ev| kind.set(parse_kind(&event_target_value(&ev)))
                >
                    <option value="single">"Single"</option>
                    <option value="double">"Double"</option>
                    <option value="suite">"Suite"</option>
                </select>
                <input
                    class="dialog__input"
                    placeholder="Nightly rate"
                    prop:value=move || rate.get()
                    on:input=move |ev| rate.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" type="submit">"Save"</button>
                </div>
            </form>
        </DialogFrame>
    }
}
