//! Sign-in page. A display name is all the local server asks for.

use common::model::identity::Identity;
use common::submission::{Navigator, Route};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::show_toast;
use crate::services::browser::BrowserNavigator;
use crate::services::session::{fetch_session, login, logout};

pub enum Msg {
    SessionLoaded(Option<Identity>),
    UpdateName(String),
    Submit,
    LoggedIn(Identity),
    Failed(String),
    Logout,
    LoggedOut,
}

pub struct LoginComponent {
    name: String,
    current: Option<Identity>,
    error: Option<String>,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
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
        Self {
            name: String::new(),
            current: None,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionLoaded(identity) => {
                self.current = identity;
                true
            }
            Msg::UpdateName(name) => {
                self.name = name;
                true
            }
            Msg::Submit => {
                if self.name.trim().is_empty() {
                    self.error = Some("El nombre es obligatorio".to_string());
                    return true;
                }
                let name = self.name.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match login(&name).await {
                        Ok(identity) => link.send_message(Msg::LoggedIn(identity)),
                        Err(e) => link.send_message(Msg::Failed(e)),
                    }
                });
                false
            }
            Msg::LoggedIn(identity) => {
                show_toast(&format!("Hola, {}", identity.display_name));
                BrowserNavigator.go_to(Route::Home);
                false
            }
            Msg::Failed(e) => {
                self.error = Some(e);
                true
            }
            Msg::Logout => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match logout().await {
                        Ok(()) => link.send_message(Msg::LoggedOut),
                        Err(e) => link.send_message(Msg::Failed(e)),
                    }
                });
                false
            }
            Msg::LoggedOut => {
                self.current = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateName(input.value())
        });

        html! {
            <div style="max-width:600px;margin:5rem auto;">
                <h1 style="text-align:center;">{"Iniciar Sesión"}</h1>
                {
                    if let Some(identity) = &self.current {
                        html! {
                            <p>
                                { format!("Sesión iniciada como {}. ", identity.display_name) }
                                <button onclick={link.callback(|_| Msg::Logout)}>{"Cerrar sesión"}</button>
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={on_submit} novalidate={true}>
                    <label for="displayName">{"Nombre"}</label>
                    <input type="text" id="displayName" name="displayName" placeholder="Tu nombre"
                        value={self.name.clone()} oninput={on_input} />
                    {
                        match &self.error {
                            Some(e) => html! { <p style="color:red;">{ e.clone() }</p> },
                            None => html! {},
                        }
                    }
                    <input type="submit" value="Iniciar Sesión" />
                </form>
            </div>
        }
    }
}
