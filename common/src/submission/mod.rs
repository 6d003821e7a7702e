//! Submission of the new product form and the collaborators it talks to.

mod coordinator;

pub use coordinator::{SubmissionCoordinator, SubmissionError};

use crate::model::identity::Identity;
use crate::model::product::Product;

/// Read access to the signed-in user.
pub trait IdentityProvider {
    fn current(&self) -> Option<Identity>;
}

/// Remote collection store. `create` is fire-and-forget: failures are
/// reported through the implementation's own error channel.
pub trait PersistenceStore {
    fn create(&self, collection: &str, product: Product);
}

/// Client-side routes the form can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    NewProduct,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::NewProduct => "/nuevo-producto",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/nuevo-producto" => Some(Route::NewProduct),
            _ => None,
        }
    }
}

pub trait Navigator {
    fn go_to(&self, route: Route);
}

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// `Clock` backed by `SystemTime`. Not usable on `wasm32-unknown-unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_paths() {
        for route in [Route::Home, Route::Login, Route::NewProduct] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/login/"), Some(Route::Login));
        assert_eq!(Route::from_path("/productos/1"), None);
    }
}
