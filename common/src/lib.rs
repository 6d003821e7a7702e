//! Shared types and the client-side core of the new product form.
//!
//! - `model`: records exchanged with the backend (`Product`, `Identity`, ...).
//! - `requests`: small request/response payloads of the HTTP API.
//! - `form`: field keys, snapshots, validation rules and the field store.
//! - `upload`: the generation-tagged upload state machine.
//! - `submission`: the coordinator that turns a form into a `Product`.

pub mod form;
pub mod model;
pub mod requests;
pub mod submission;
pub mod upload;

/// Collection that receives new products.
pub const PRODUCTS_COLLECTION: &str = "products";

/// Storage namespace for product images.
pub const PRODUCTS_NAMESPACE: &str = "products";
