use actix_web::{web, HttpResponse, Responder};
use common::requests::ResolveUrlResponse;
use std::path::Path;

use super::{validate_file_name, validate_namespace, FILES_PATH};
use crate::config::ServerConfig;

pub async fn process(path: web::Path<(String, String)>, config: web::Data<ServerConfig>) -> impl Responder {
    let (namespace, file_name) = path.into_inner();
    match resolve_url(&config.storage_dir, &namespace, &file_name) {
        Ok(Some(url)) => HttpResponse::Ok().json(ResolveUrlResponse { url }),
        Ok(None) => HttpResponse::NotFound().body("Object not found"),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Public URL of a stored object, `None` when nothing is stored under that name.
pub fn resolve_url(storage_dir: &Path, namespace: &str, file_name: &str) -> Result<Option<String>, String> {
    validate_namespace(namespace)?;
    validate_file_name(file_name)?;

    if !storage_dir.join(namespace).join(file_name).is_file() {
        return Ok(None);
    }
    Ok(Some(format!("{}/{}/{}", FILES_PATH, namespace, file_name)))
}
