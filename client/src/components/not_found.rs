//! Static page for unmatched paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__title">"404 - Page Not Found"</h1>
            <p class="not-found__lead">"The page you are looking for doesn't exist or has been moved."</p>
            <a href="/" class="btn btn--primary">"Go Home"</a>
            <div class="not-found__help">
                <p>"If you believe this is an error, please contact the system administrator."</p>
                <p>"You can also try clearing your browser cache and cookies."</p>
            </div>
        </div>
    }
}
