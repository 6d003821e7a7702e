use common::submission::{Navigator, Route};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::events::MouseEvent;
use yew::{html, Component, Context, Html};

use crate::components::products::list::ProductListComponent;
use crate::components::products::new::NewProductComponent;
use crate::components::session::login::LoginComponent;
use crate::services::browser::{BrowserNavigator, ROUTE_CHANGED};

pub enum Msg {
    RouteChanged,
}

/// Picks the page from `window.location` and re-reads it on every history
/// change.
pub struct App {
    route: Option<Route>,
    listener: Option<Closure<dyn Fn()>>,
}

fn current_route() -> Option<Route> {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Route::from_path(&path)
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::RouteChanged));
        let registered = web_sys::window().map(|window| {
            window.add_event_listener_with_callback(ROUTE_CHANGED, listener.as_ref().unchecked_ref())
        });
        if let Some(Err(err)) = registered {
            gloo_console::error!(format!(
                "cannot listen for route changes: {}",
                crate::helpers::describe_js_error(&err)
            ));
        }
        Self {
            route: current_route(),
            listener: Some(listener),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RouteChanged => {
                let route = current_route();
                if route == self.route {
                    return false;
                }
                self.route = route;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let page = match self.route {
            Some(Route::Home) => html! { <ProductListComponent /> },
            Some(Route::Login) => html! { <LoginComponent /> },
            Some(Route::NewProduct) => html! { <NewProductComponent /> },
            None => html! { <h1 style="text-align:center;">{"Página no encontrada"}</h1> },
        };

        let link = |route: Route, label: &'static str| {
            let onclick = move |e: MouseEvent| {
                e.prevent_default();
                BrowserNavigator.go_to(route);
            };
            html! { <a href={route.path()} {onclick}>{ label }</a> }
        };

        html! {
            <div>
                <nav style="display:flex;gap:1rem;padding:1rem;border-bottom:1px solid #e1e1e1;">
                    { link(Route::Home, "Inicio") }
                    { link(Route::NewProduct, "Nuevo Producto") }
                    { link(Route::Login, "Iniciar Sesión") }
                </nav>
                { page }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.listener.take()) {
            let _ = window.remove_event_listener_with_callback(ROUTE_CHANGED, listener.as_ref().unchecked_ref());
        }
    }
}
