//! File storage used for product images.
//!
//! Objects live in `<storage_dir>/<namespace>/<file_name>` and are served
//! back under `/files/<namespace>/<file_name>`.
//!
//! - `POST /api/storage/{namespace}`: multipart upload. The `file` part must be
//!   an image; it is stored under a random name which is returned as
//!   `UploadResponse`.
//! - `GET /api/storage/{namespace}/{file_name}/url`: resolves the public URL of
//!   a stored object, `404` if it does not exist.

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use regex::Regex;

mod resolve;
mod upload;

const API_PATH: &str = "/api/storage";

/// Mount point of the stored objects.
pub const FILES_PATH: &str = "/files";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{namespace}", post().to(upload::process))
        .route("/{namespace}/{file_name}/url", get().to(resolve::process))
}

/// Namespaces are lowercase slugs so they map to a single directory.
fn validate_namespace(namespace: &str) -> Result<(), String> {
    let re = Regex::new(r"^[a-z0-9_-]+$").map_err(|e| format!("Regex error: {}", e))?;
    if !re.is_match(namespace) {
        return Err(format!("Invalid storage namespace `{}`", namespace));
    }
    Ok(())
}

/// Stored names are `<uuid>.<ext>`; anything else never reaches the disk.
fn validate_file_name(file_name: &str) -> Result<(), String> {
    let re = Regex::new(r"^[A-Za-z0-9-]+\.[a-z0-9]+$").map_err(|e| format!("Regex error: {}", e))?;
    if !re.is_match(file_name) {
        return Err(format!("Invalid file name `{}`", file_name));
    }
    Ok(())
}
