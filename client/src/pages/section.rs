//! Shared page for back-office sections that are listed in the navigation but
//! have no dedicated screen yet.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;

use crate::components::nav::AppNav;
use crate::routes::PageId;

fn section_summary(page: PageId) -> &'static str {
    match page {
        PageId::Tasks => "Housekeeping and maintenance tasks assigned to staff.",
        PageId::Billing => "Folios, payments and outstanding balances.",
        PageId::Services => "Extra services such as spa, dining and transfers.",
        PageId::Reports => "Occupancy and revenue reports.",
        PageId::AdminAccessControl => "Approve staff accounts and assign roles across the property.",
        PageId::ManagerAccessControl => "Manage access for the staff on your team.",
        PageId::TestAccessRequests => "Review pending access requests.",
        _ => "",
    }
}

#[component]
pub fn SectionPage(page: PageId) -> impl IntoView {
    view! {
        <div class="app-page">
            <AppNav/>
            <main class="section-page">
                <h1>{page.title()}</h1>
                <p>{section_summary(page)}</p>
            </main>
        </div>
    }
}
