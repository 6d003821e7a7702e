use actix_web::{web, HttpResponse, Responder};
use common::model::product::{Creator, Product, StoredProduct};
use std::path::Path;

use crate::config::ServerConfig;
use crate::db;

pub async fn process(config: web::Data<ServerConfig>) -> impl Responder {
    match list_products(&config.database_path) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error al leer los productos: {}", e)),
    }
}

/// Every stored product, most recent `created_at` first.
pub fn list_products(db_path: &Path) -> Result<Vec<StoredProduct>, String> {
    let conn = db::open(db_path).map_err(|e| e.to_string())?;
    let mut stmt = conn
        .prepare(
            "SELECT id, name, company, source_url, image_url, description, ingredients,
                    preparation, fat_pct, protein_pct, carb_pct, vote_count, comments,
                    created_at, creator_id, creator_name, voted_by
             FROM products ORDER BY created_at DESC",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map([], |row| {
            let comments: String = row.get(12)?;
            let voted_by: String = row.get(16)?;
            Ok((
                row.get::<_, String>(0)?,
                Product {
                    name: row.get(1)?,
                    company: row.get(2)?,
                    source_url: row.get(3)?,
                    image_url: row.get(4)?,
                    description: row.get(5)?,
                    ingredients: row.get(6)?,
                    preparation: row.get(7)?,
                    fat_pct: row.get(8)?,
                    protein_pct: row.get(9)?,
                    carb_pct: row.get(10)?,
                    vote_count: row.get(11)?,
                    comments: Vec::new(),
                    created_at: row.get(13)?,
                    creator: Creator {
                        id: row.get(14)?,
                        display_name: row.get(15)?,
                    },
                    voted_by: Vec::new(),
                },
                comments,
                voted_by,
            ))
        })
        .map_err(|e| e.to_string())?;

    let mut products = Vec::new();
    for row in rows {
        let (id, mut product, comments, voted_by) = row.map_err(|e| e.to_string())?;
        product.comments = serde_json::from_str(&comments).map_err(|e| e.to_string())?;
        product.voted_by = serde_json::from_str(&voted_by).map_err(|e| e.to_string())?;
        products.push(StoredProduct { id, product });
    }
    Ok(products)
}
