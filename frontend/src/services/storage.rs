//! Product image storage over the backend's `/api/storage` endpoints.
//!
//! Uploads go through `XMLHttpRequest` instead of `fetch` because only the
//! former reports upload progress. All results are pushed into the
//! `UploadEvents` handle of the attempt; the controller decides whether they
//! are still relevant.

use common::requests::{ResolveUrlResponse, UploadResponse};
use common::upload::{StorageService, UploadEvents};
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};
use yew::platform::spawn_local;

use crate::helpers::describe_js_error;

const STORAGE_PATH: &str = "/api/storage";

#[derive(Clone, Copy, Default)]
pub struct HttpStorage;

impl StorageService for HttpStorage {
    type File = File;

    fn upload(&self, namespace: &str, file: File, events: UploadEvents) {
        if let Err(err) = start_upload(namespace, &file, events.clone()) {
            let reason = describe_js_error(&err);
            gloo_console::error!(format!("cannot start upload of {}: {}", file.name(), reason));
            events.failed(reason);
        }
    }

    fn resolve_url(&self, namespace: &str, file_name: &str, events: UploadEvents) {
        let url = format!("{}/{}/{}/url", STORAGE_PATH, namespace, file_name);
        spawn_local(async move {
            match fetch_url(&url).await {
                Ok(resource_url) => events.resolved(resource_url),
                Err(reason) => {
                    gloo_console::error!(format!("cannot resolve {}: {}", url, reason));
                    events.resolve_failed(reason);
                }
            }
        });
    }
}

fn start_upload(namespace: &str, file: &File, events: UploadEvents) -> Result<(), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", file, &file.name())?;

    let xhr = XmlHttpRequest::new()?;
    xhr.open_with_async("POST", &format!("{}/{}", STORAGE_PATH, namespace), true)?;

    let progress_events = events.clone();
    let on_progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |e: ProgressEvent| {
        if e.length_computable() && e.total() > 0.0 {
            progress_events.progress((e.loaded() / e.total() * 100.0).round() as u8);
        }
    });
    xhr.upload()?.set_onprogress(Some(on_progress.as_ref().unchecked_ref()));
    on_progress.forget();

    let request = xhr.clone();
    let load_events = events.clone();
    let on_load = Closure::once_into_js(move || match finish_upload(&request) {
        Ok(file_name) => load_events.transferred(file_name),
        Err(reason) => load_events.failed(reason),
    });
    xhr.set_onload(Some(on_load.unchecked_ref()));

    let on_error = Closure::once_into_js(move || events.failed("Error de red al subir la imagen"));
    xhr.set_onerror(Some(on_error.unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form))
}

/// Reads the stored name out of a finished upload request.
fn finish_upload(xhr: &XmlHttpRequest) -> Result<String, String> {
    let status = xhr.status().map_err(|e| describe_js_error(&e))?;
    let body = xhr.response_text().ok().flatten().unwrap_or_default();
    if status != 200 {
        return Err(body);
    }
    serde_json::from_str::<UploadResponse>(&body)
        .map(|response| response.file_name)
        .map_err(|e| e.to_string())
}

async fn fetch_url(url: &str) -> Result<String, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<ResolveUrlResponse>()
        .await
        .map(|resolved| resolved.url)
        .map_err(|e| e.to_string())
}
