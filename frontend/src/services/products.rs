use common::model::product::{Product, StoredProduct};
use common::requests::CreateProductResponse;
use common::submission::PersistenceStore;
use gloo_net::http::Request;
use yew::platform::spawn_local;

use crate::helpers::show_toast;

/// Writes products through `POST /api/{collection}`.
///
/// Fire-and-forget: the request outlives the form page because navigation
/// is client-side, so failures still reach the console and a toast.
#[derive(Clone, Copy, Default)]
pub struct HttpProductStore;

impl PersistenceStore for HttpProductStore {
    fn create(&self, collection: &str, product: Product) {
        let url = format!("/api/{}", collection);
        spawn_local(async move {
            match post_product(&url, &product).await {
                Ok(id) => gloo_console::log!(format!("product `{}` stored as {}", product.name, id)),
                Err(e) => {
                    gloo_console::error!(format!("cannot store product `{}`: {}", product.name, e));
                    show_toast(&format!("Error al guardar el producto: {}", e));
                }
            }
        });
    }
}

async fn post_product(url: &str, product: &Product) -> Result<String, String> {
    let response = Request::post(url)
        .json(product)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(response.text().await.unwrap_or_default());
    }
    response
        .json::<CreateProductResponse>()
        .await
        .map(|created| created.id)
        .map_err(|e| e.to_string())
}

pub async fn fetch_products() -> Result<Vec<StoredProduct>, String> {
    let response = Request::get("/api/products")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(response.text().await.unwrap_or_default());
    }
    response
        .json::<Vec<StoredProduct>>()
        .await
        .map_err(|e| e.to_string())
}
