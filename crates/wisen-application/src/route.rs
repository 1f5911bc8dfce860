//! Page routes and the admin gate.

use std::fmt;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Portfolio,
    ProjectDetail(String),
    Pricing,
    Login,
    Admin,
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Admin)
    }

    /// Where a request for this route actually lands.
    pub fn resolve(self, authenticated: bool) -> Route {
        if self.requires_auth() && !authenticated {
            Route::Login
        } else {
            self
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Portfolio => write!(f, "/portfolio"),
            Route::ProjectDetail(id) => write!(f, "/portfolio/{id}"),
            Route::Pricing => write!(f, "/pricing"),
            Route::Login => write!(f, "/login"),
            Route::Admin => write!(f, "/admin"),
        }
    }
}
