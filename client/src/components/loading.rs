//! Loading fallback shown while a page or the session is resolving.

use leptos::prelude::*;

/// Full-page pulsing dots.
#[component]
pub fn LoadingFallback() -> impl IntoView {
    view! {
        <div class="loading-fallback" role="status" aria-label="Loading">
            <div class="loading-fallback__dots">
                <div class="loading-fallback__dot"></div>
                <div class="loading-fallback__dot"></div>
                <div class="loading-fallback__dot"></div>
            </div>
        </div>
    }
}
