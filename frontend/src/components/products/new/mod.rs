//! New product form: root module wiring the Yew `Component` implementation
//! with submodules for state, messages, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export `Msg` and `NewProductComponent`.
//! - Delegate to `update::update` and `view::view`.
//! - On first render, load the current session so the form knows whether
//!   somebody is signed in.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::NewProductComponent;

use crate::services::session::fetch_session;

impl Component for NewProductComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NewProductComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let identity = match fetch_session().await {
                    Ok(identity) => identity,
                    Err(e) => {
                        gloo_console::error!(format!("cannot load session: {}", e));
                        None
                    }
                };
                link.send_message(Msg::SessionLoaded(identity));
            });
        }
    }
}
