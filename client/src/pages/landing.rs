//! Marketing landing page.

use leptos::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    ("Rooms", "Track occupancy and housekeeping status for every room."),
    ("Reservations", "Book rooms against live availability and quote stays instantly."),
    ("Guests", "Keep guest contact details and VIP flags at hand."),
    ("Access control", "Approve staff accounts and manage roles."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Run your property from one screen"</h1>
            <ul class="landing-features">
                {FEATURES
                    .iter()
                    .map(|(title, blurb)| {
                        view! {
                            <li class="landing-feature">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a class="btn btn--primary" href="/request-access">"Request access"</a>
        </div>
    }
}
