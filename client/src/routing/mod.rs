//! Route table and access policy.
//!
//! ARCHITECTURE
//! ============
//! `AppRoute` names every path the app serves. Each route carries an
//! [`Access`] policy; `app::App` builds its `<Routes>` through
//! [`guard::route_view`], which applies the guard wherever the policy asks
//! for one.

pub mod guard;
pub mod origin;


use crate::state::session::SessionState;

/// Query parameter carrying the origin path on the login URL.
pub const FROM_PARAM: &str = "from";

/// Session check a guarded route must pass.
pub type Predicate = fn(&SessionState) -> bool;

/// Routes served by the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Public,
    Login,
    Protected,
}

/// Who may see a route.
#[derive(Clone, Copy, Debug)]
pub enum Access {
    Open,
    /// Render only when `predicate` holds, else redirect to `fallback`.
    Guarded { predicate: Predicate, fallback: AppRoute },
}

impl AppRoute {
    pub const ALL: [Self; 4] = [Self::Home, Self::Public, Self::Login, Self::Protected];

    /// Absolute path, used for links and redirects.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Public => "/public",
            Self::Login => "/login",
            Self::Protected => "/protected",
        }
    }

    /// Path segment used when registering the route.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn access(self) -> Access {
        match self {
            Self::Home | Self::Public | Self::Login => Access::Open,
            Self::Protected => Access::Guarded { predicate: SessionState::is_authenticated, fallback: Self::Login },
        }
    }

    /// Look up the route registered at `path`, ignoring any query string.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}
