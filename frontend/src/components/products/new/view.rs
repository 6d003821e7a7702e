//! View rendering for the new product form.
//!
//! Two fieldsets, as in the rest of the app the labels and messages are in
//! Spanish. Every input is controlled: its value comes from the `FieldStore`
//! and each keystroke is sent back as `Msg::Edit`. Errors are shown under the
//! field that owns them.

use common::form::FieldKey;
use common::submission::{IdentityProvider, Route};
use common::upload::UploadState;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::NewProductComponent;

#[derive(Clone, Copy, PartialEq)]
enum InputKind {
    Text,
    Url,
    TextArea,
}

pub fn view(component: &NewProductComponent, ctx: &Context<NewProductComponent>) -> Html {
    let link = ctx.link();

    if !component.session_loaded {
        return html! { <p style="text-align:center;margin-top:5rem;">{"Cargando..."}</p> };
    }
    if component.identity.current().is_none() {
        return html! {
            <div style="text-align:center;margin-top:5rem;">
                <h1>{"No se puede mostrar"}</h1>
                <p>{"Debes "}<a href={Route::Login.path()}>{"iniciar sesión"}</a>{" para crear un producto."}</p>
            </div>
        };
    }

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <>
            <h1 style="text-align:center;margin-top:5rem;">{"Nuevo Producto"}</h1>
            <form onsubmit={on_submit} novalidate={true} style="max-width:600px;margin:5rem auto 0 auto;">
                <fieldset>
                    <legend>{"Información General"}</legend>
                    { field(component, link, FieldKey::Name, InputKind::Text, "Nombre del Producto") }
                    { field(component, link, FieldKey::Company, InputKind::Text, "Nombre Empresa o Compañia") }
                    { image_field(component, link) }
                    { field(component, link, FieldKey::SourceUrl, InputKind::Url, "URL de tu producto") }
                </fieldset>

                <fieldset>
                    <legend>{"Sobre tu Receta"}</legend>
                    { field(component, link, FieldKey::Description, InputKind::TextArea, "") }
                    { field(component, link, FieldKey::Ingredients, InputKind::TextArea, "") }
                    { field(component, link, FieldKey::Preparation, InputKind::TextArea, "") }
                    { field(component, link, FieldKey::FatPct, InputKind::Text, "") }
                    { field(component, link, FieldKey::ProteinPct, InputKind::Text, "") }
                    { field(component, link, FieldKey::CarbPct, InputKind::Text, "") }
                </fieldset>

                {
                    if component.upload.is_busy() {
                        html! { <p style="color:#b26a00;">{"La imagen todavía se está subiendo."}</p> }
                    } else {
                        html! {}
                    }
                }

                <input type="submit" value="Crear Producto"
                    style="background:#DA552F;width:100%;padding:1.5rem;color:#fff;font-weight:700;border:none;margin-top:2rem;cursor:pointer;" />
            </form>
        </>
    }
}

/// One labelled, controlled input followed by its error message.
fn field(
    component: &NewProductComponent,
    link: &Scope<NewProductComponent>,
    key: FieldKey,
    kind: InputKind,
    placeholder: &'static str,
) -> Html {
    let value = component.fields.value(key).to_string();
    let onblur = link.callback(move |_: FocusEvent| Msg::Blur(key));
    let required = component.fields.rules().is_required(key);

    let control = match kind {
        InputKind::TextArea => {
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                Msg::Edit(key, input.value())
            });
            html! {
                <textarea id={key.as_str()} name={key.as_str()} {value} {oninput} {onblur} />
            }
        }
        InputKind::Text | InputKind::Url => {
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Edit(key, input.value())
            });
            let input_type = if kind == InputKind::Url { "url" } else { "text" };
            html! {
                <input type={input_type} id={key.as_str()} name={key.as_str()} {placeholder} {required}
                    {value} {oninput} {onblur} />
            }
        }
    };

    html! {
        <>
            <div style="margin-bottom:2rem;display:flex;align-items:center;">
                <label for={key.as_str()} style="flex:0 0 150px;font-size:1.2rem;">{ key.label() }</label>
                { control }
            </div>
            { error_message(component.fields.error(key)) }
        </>
    }
}

fn image_field(component: &NewProductComponent, link: &Scope<NewProductComponent>) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.files().and_then(|files| files.get(0)).map(Msg::FileSelected)
    });

    let status = match component.upload.state() {
        UploadState::Idle => html! {},
        UploadState::InProgress { percent } if component.upload.is_resolving() => {
            html! { <p>{ format!("Subida completa ({}%), obteniendo la URL...", percent) }</p> }
        }
        UploadState::InProgress { percent } => html! {
            <p>
                <progress max="100" value={percent.to_string()} />
                { format!(" {}%", percent) }
            </p>
        },
        UploadState::Succeeded { file_name, .. } => {
            html! { <p style="color:#2e7d32;">{ format!("Imagen {} lista", file_name) }</p> }
        }
        UploadState::Failed { reason } => error_message(Some(format!("Error al subir la imagen: {}", reason).as_str())),
    };

    html! {
        <>
            <div style="margin-bottom:2rem;display:flex;align-items:center;">
                <label for="image" style="flex:0 0 150px;font-size:1.2rem;">{"Imagen"}</label>
                <input type="file" accept="image/*" id="image" name="image" {onchange} />
            </div>
            { status }
        </>
    }
}

fn error_message(message: Option<&str>) -> Html {
    match message {
        Some(message) => html! {
            <p style="background:red;padding:1rem;font-family:'PT Sans',sans-serif;font-weight:700;font-size:1.4rem;color:#fff;text-align:center;text-transform:uppercase;margin:2rem 0;">
                { message.to_string() }
            </p>
        },
        None => html! {},
    }
}
