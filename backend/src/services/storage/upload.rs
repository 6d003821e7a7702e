use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::requests::UploadResponse;
use futures_util::StreamExt;
use log::info;
use std::fs;
use std::path::Path;

use super::validate_namespace;
use crate::config::{ServerConfig, MAX_PAYLOAD_BYTES};

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with the stored file name.
/// - On failure: `400 Bad Request` with the error message.
pub async fn process(
    namespace: web::Path<String>,
    payload: Multipart,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match store_upload(&config.storage_dir, &namespace, payload).await {
        Ok(file_name) => {
            info!("stored `{}` in namespace `{}`", file_name, namespace);
            HttpResponse::Ok().json(UploadResponse { file_name })
        }
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Reads the `file` part of `payload`, checks that it is an image and writes
/// it to `<storage_dir>/<namespace>/<uuid>.<ext>`.
///
/// The extension comes from the sniffed format, not from the client name.
pub async fn store_upload(
    storage_dir: &Path,
    namespace: &str,
    mut payload: Multipart,
) -> Result<String, Box<dyn std::error::Error>> {
    validate_namespace(namespace)?;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if part_name.as_deref() != Some("file") {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > MAX_PAYLOAD_BYTES {
                return Err("The file exceeds the 10 MB limit".into());
            }
            bytes.extend_from_slice(&chunk);
        }

        let format = image::guess_format(&bytes).map_err(|_| "The file is not a supported image")?;
        let extension = format.extensions_str().first().copied().unwrap_or("img");
        let file_name = format!("{}.{}", uuid::Uuid::new_v4(), extension);

        let dir = storage_dir.join(namespace);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(&file_name), &bytes)?;
        return Ok(file_name);
    }

    Err("Missing file".into())
}
