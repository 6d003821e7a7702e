use common::submission::{Clock, Navigator, Route};
use wasm_bindgen::JsValue;
use web_sys::Event;

/// Name of the window event the app listens to for route changes.
pub const ROUTE_CHANGED: &str = "popstate";

/// Client-side navigation: pushes a history entry and fires `popstate` so
/// `App` swaps the page without unloading the document. Requests still in
/// flight, like a product create, keep running.
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn go_to(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route.path())))
            .and_then(|_| Event::new(ROUTE_CHANGED))
            .and_then(|event| window.dispatch_event(&event));
        if let Err(err) = pushed {
            gloo_console::error!(format!(
                "cannot navigate to {}: {}",
                route.path(),
                crate::helpers::describe_js_error(&err)
            ));
        }
    }
}

/// `Date.now()`; `SystemTime` is not available in the browser.
#[derive(Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}
