//! Request and response bodies of the HTTP API shared by backend and frontend.

use serde::{Deserialize, Serialize};

/// `POST /api/session/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub display_name: String,
}

/// Reply of `POST /api/storage/{namespace}`: the randomized name the object
/// was stored under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_name: String,
}

/// Reply of `GET /api/storage/{namespace}/{file_name}/url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveUrlResponse {
    pub url: String,
}

/// Reply of `POST /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub id: String,
}
