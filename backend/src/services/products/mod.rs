//! # Products Service Module
//!
//! The `products` collection that new product forms write into.
//!
//! ## Sub-modules:
//! - `create`: stores a `Product` under a fresh UUID (`POST /api/products`).
//!   Requires a signed-in user, and the record's creator must be that user.
//! - `list`: every stored product, newest first (`GET /api/products`).

mod create;
mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/products";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
}
