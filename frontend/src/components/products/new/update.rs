//! Update function for the new product form.
//!
//! Field edits and upload callbacks are independent message streams; the only
//! point where they meet is `Msg::Submit`, which hands a snapshot of both to
//! the submission coordinator.

use common::submission::SubmissionError;
use common::upload::{EventSink, UploadEvent, UploadState};
use std::rc::Rc;
use yew::prelude::*;

use super::messages::Msg;
use super::state::NewProductComponent;
use crate::helpers::show_toast;

pub fn update(component: &mut NewProductComponent, ctx: &Context<NewProductComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SessionLoaded(identity) => {
            component.identity.set(identity);
            component.session_loaded = true;
            true
        }
        Msg::Edit(key, value) => {
            component.fields.set_field(key, value);
            true
        }
        Msg::Blur(key) => {
            component.fields.touch_field(key);
            true
        }
        Msg::FileSelected(file) => {
            let link = ctx.link().clone();
            let sink: EventSink = Rc::new(move |event: UploadEvent| link.send_message(Msg::Upload(event)));
            component.upload.begin_upload(file, sink);
            true
        }
        Msg::Upload(event) => {
            let changed = component.upload.handle(event);
            if changed {
                if let UploadState::Failed { reason } = component.upload.state() {
                    gloo_console::error!(format!("image upload failed: {}", reason));
                }
            }
            changed
        }
        Msg::Submit => {
            let snapshot = component.fields.snapshot();
            match component.coordinator.submit(&snapshot, component.upload.state()) {
                Ok(product) => {
                    show_toast(&format!("Producto \"{}\" creado", product.name));
                    component.fields.reset();
                }
                Err(SubmissionError::ValidationFailed(errors)) => component.fields.show_errors(errors),
                // The coordinator already sent the browser to the login page.
                Err(SubmissionError::Unauthenticated) => {}
            }
            true
        }
    }
}
