//! Static route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigable path is declared once in [`ROUTES`]: which page it shows,
//! whether it sits behind the session gate, and whether its page is loaded
//! eagerly or through the page loader. `App` declares one `<Route>` per entry
//! and leaves matching to `leptos_router`: segments match exactly and
//! case-sensitively, a single trailing `/` is tolerated, and anything else
//! falls through to the not-found page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the login page; the gate redirects here.
pub const LOGIN_PATH: &str = "/login";

/// Identifies one page of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Landing,
    Login,
    RequestAccess,
    Dashboard,
    Rooms,
    Reservations,
    Guests,
    Tasks,
    Billing,
    Services,
    Reports,
    Profile,
    Settings,
    AdminAccessControl,
    ManagerAccessControl,
    TestAccessRequests,
    NotFound,
}

impl PageId {
    /// Human-readable title used in the document `<title>` and page headers.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Landing => "Welcome",
            Self::Login => "Sign In",
            Self::RequestAccess => "Request Access",
            Self::Dashboard => "Dashboard",
            Self::Rooms => "Rooms",
            Self::Reservations => "Reservations",
            Self::Guests => "Guests",
            Self::Tasks => "Tasks",
            Self::Billing => "Billing",
            Self::Services => "Services",
            Self::Reports => "Reports",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::AdminAccessControl => "Admin Access Control",
            Self::ManagerAccessControl => "Manager Access Control",
            Self::TestAccessRequests => "Test Access Requests",
            Self::NotFound => "Page Not Found",
        }
    }
}

/// How a page's code is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loading {
    /// Rendered directly, part of the initial bundle.
    Eager,
    /// Fetched through the page loader on first navigation.
    Lazy,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub page: PageId,
    pub protected: bool,
    pub loading: Loading,
}

const fn public(path: &'static str, page: PageId, loading: Loading) -> RouteDescriptor {
    RouteDescriptor { path, page, protected: false, loading }
}

const fn protected(path: &'static str, page: PageId, loading: Loading) -> RouteDescriptor {
    RouteDescriptor { path, page, protected: true, loading }
}

/// The full application route table.
pub const ROUTES: &[RouteDescriptor] = &[
    public("/", PageId::Home, Loading::Eager),
    public("/landing", PageId::Landing, Loading::Lazy),
    public(LOGIN_PATH, PageId::Login, Loading::Lazy),
    public("/request-access", PageId::RequestAccess, Loading::Lazy),
    protected("/dashboard", PageId::Dashboard, Loading::Lazy),
    protected("/rooms", PageId::Rooms, Loading::Eager),
    protected("/reservations", PageId::Reservations, Loading::Eager),
    protected("/guests", PageId::Guests, Loading::Lazy),
    protected("/tasks", PageId::Tasks, Loading::Lazy),
    protected("/billing", PageId::Billing, Loading::Lazy),
    protected("/services", PageId::Services, Loading::Lazy),
    protected("/reports", PageId::Reports, Loading::Lazy),
    protected("/profile", PageId::Profile, Loading::Eager),
    protected("/settings", PageId::Settings, Loading::Eager),
    protected("/admin/access-control", PageId::AdminAccessControl, Loading::Lazy),
    protected("/manager/access-control", PageId::ManagerAccessControl, Loading::Lazy),
    protected("/test-access-requests", PageId::TestAccessRequests, Loading::Lazy),
];

/// Descriptor used for every unmatched path.
pub const NOT_FOUND: RouteDescriptor = public("*", PageId::NotFound, Loading::Eager);

/// Look up the descriptor for a page.
pub fn descriptor(page: PageId) -> &'static RouteDescriptor {
    ROUTES.iter().find(|r| r.page == page).unwrap_or(&NOT_FOUND)
}
