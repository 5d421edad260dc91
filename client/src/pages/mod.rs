//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates chrome to
//! `components`. [`BundledPages`] is the page source behind the lazy loader:
//! the WASM build ships every page in one module, so fetches resolve at once.


pub mod dashboard;
pub mod guests;
pub mod home;
pub mod landing;
pub mod login;
pub mod profile;
pub mod request_access;
pub mod reservations;
pub mod rooms;
pub mod section;
pub mod settings;

use std::future::{Future, ready};

use leptos::prelude::*;

use crate::components::not_found::NotFoundPage;
use crate::loader::{LoadError, PageLoader, PageSource};
use crate::routes::PageId;

/// Render function for one page.
pub type PageView = fn() -> AnyView;

/// Loader type provided as context by `App`.
pub type AppPageLoader = PageLoader<BundledPages>;

/// Page source backed by the compiled-in page components.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledPages;

impl PageSource for BundledPages {
    type Module = PageView;

    fn fetch(&self, page: PageId) -> impl Future<Output = Result<PageView, LoadError>> {
        ready(Ok(page_view(page)))
    }
}

/// The component that renders `page`.
pub fn page_view(page: PageId) -> PageView {
    match page {
        PageId::Home => || view! { <home::HomePage/> }.into_any(),
        PageId::Landing => || view! { <landing::LandingPage/> }.into_any(),
        PageId::Login => || view! { <login::LoginPage/> }.into_any(),
        PageId::RequestAccess => || view! { <request_access::RequestAccessPage/> }.into_any(),
        PageId::Dashboard => || view! { <dashboard::DashboardPage/> }.into_any(),
        PageId::Rooms => || view! { <rooms::RoomsPage/> }.into_any(),
        PageId::Reservations => || view! { <reservations::ReservationsPage/> }.into_any(),
        PageId::Guests => || view! { <guests::GuestsPage/> }.into_any(),
        PageId::Profile => || view! { <profile::ProfilePage/> }.into_any(),
        PageId::Settings => || view! { <settings::SettingsPage/> }.into_any(),
        PageId::Tasks => || view! { <section::SectionPage page=PageId::Tasks/> }.into_any(),
        PageId::Billing => || view! { <section::SectionPage page=PageId::Billing/> }.into_any(),
        PageId::Services => || view! { <section::SectionPage page=PageId::Services/> }.into_any(),
        PageId::Reports => || view! { <section::SectionPage page=PageId::Reports/> }.into_any(),
        PageId::AdminAccessControl => {
            || view! { <section::SectionPage page=PageId::AdminAccessControl/> }.into_any()
        }
        PageId::ManagerAccessControl => {
            || view! { <section::SectionPage page=PageId::ManagerAccessControl/> }.into_any()
        }
        PageId::TestAccessRequests => {
            || view! { <section::SectionPage page=PageId::TestAccessRequests/> }.into_any()
        }
        PageId::NotFound => || view! { <NotFoundPage/> }.into_any(),
    }
}
