//! Route body for pages fetched through the page loader.
//!
//! SYSTEM CONTEXT
//! ==============
//! A cache hit renders immediately. A miss shows `LoadingFallback` and loads
//! in the browser; a failed load offers a retry instead of hanging.

use leptos::prelude::*;

use crate::components::loading::LoadingFallback;
use crate::loader::{LoadError, Visit};
use crate::pages::{AppPageLoader, PageView};
use crate::routes::PageId;

#[derive(Clone)]
enum LazyState {
    Loading,
    Ready(PageView),
    Failed(LoadError),
}

#[component]
pub fn LazyPage(page: PageId) -> impl IntoView {
    let loader = expect_context::<AppPageLoader>();
    let initial = match loader.visit(page) {
        Visit::Ready(render) => LazyState::Ready(render),
        Visit::Pending => LazyState::Loading,
    };
    let state = RwSignal::new(initial);
    let loader = StoredValue::new(loader);

    let start_load = move || {
        state.set(LazyState::Loading);
        #[cfg(feature = "hydrate")]
        {
            let loader = loader.get_value();
            leptos::task::spawn_local(async move {
                let next = match loader.load(page).await {
                    Ok(render) => LazyState::Ready(render),
                    Err(e) => LazyState::Failed(e),
                };
                state.set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (loader, page);
    };

    Effect::new(move || {
        if !loader.with_value(|l| l.is_cached(page)) {
            start_load();
        }
    });

    move || match state.get() {
        LazyState::Loading => view! { <LoadingFallback/> }.into_any(),
        LazyState::Ready(render) => render(),
        LazyState::Failed(err) => view! {
            <div class="load-failed" role="alert">
                <h2>"This page could not be loaded."</h2>
                <p class="load-failed__detail">{err.to_string()}</p>
                <button class="btn btn--primary" on:click=move |_| start_load()>"Try again"</button>
            </div>
        }
        .into_any(),
    }
}
