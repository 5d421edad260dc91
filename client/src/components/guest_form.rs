//! Create/edit guest dialog.

#[cfg(test)]
#[path = "guest_form_test.rs"]
mod guest_form_test;

use leptos::prelude::*;

use crate::components::modal_host::DialogFrame;
use crate::state::guests::Guest;
use crate::state::stores::use_stores;

/// Validate raw form input into a guest record.
pub(crate) fn build_guest(id: String, name: &str, email: &str, phone: &str, vip: bool) -> Result<Guest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Guest name is required.");
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err("Enter a valid email address.");
    }
    let phone = Some(phone.trim()).filter(|p| !p.is_empty()).map(str::to_owned);
    Ok(Guest { id, name: name.to_owned(), email: email.to_owned(), phone, vip })
}

#[component]
pub fn GuestFormDialog(guest_id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let stores = use_stores();
    let existing = guest_id
        .as_deref()
        .and_then(|id| stores.guests.with_untracked(|g| g.get(id).cloned()));
    let editing = existing.is_some();
    let title = if editing { "Edit guest" } else { "New guest" };

    let name = RwSignal::new(existing.as_ref().map(|g| g.name.clone()).unwrap_or_default());
    let email = RwSignal::new(existing.as_ref().map(|g| g.email.clone()).unwrap_or_default());
    let phone = RwSignal::new(existing.as_ref().and_then(|g| g.phone.clone()).unwrap_or_default());
    let vip = RwSignal::new(existing.as_ref().is_some_and(|g| g.vip));
    let error = RwSignal::new(None::<&'static str>);
    let id = StoredValue::new(existing.map_or_else(|| uuid::Uuid::new_v4().to_string(), |g| g.id));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_guest(id.get_value(), &name.get(), &email.get(), &phone.get(), vip.get()) {
            Ok(guest) => {
                stores.guests.update(|g| g.upsert(guest));
                stores.notify_success(if editing { "Guest updated" } else { "Guest added" });
                on_close.run(());
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <DialogFrame title=title on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <input
                    class="dialog__input"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="email"
                    placeholder="guest@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    placeholder="Phone (optional)"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <label class="dialog__checkbox">
                    <input type="checkbox" prop:checked=move || vip.get() on:change=move |ev| vip.set(event_target_checked(&ev))/>
                    "VIP"
                </label>
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
