use actix_web::{web, HttpResponse, Responder};
use common::model::product::Product;
use common::requests::CreateProductResponse;
use log::{error, info};
use rusqlite::params;
use std::path::Path;

use crate::config::ServerConfig;
use crate::db;
use crate::session_controller::state::SessionState;

pub async fn process(
    payload: web::Json<Product>,
    config: web::Data<ServerConfig>,
    session: web::Data<SessionState>,
) -> impl Responder {
    let Some(identity) = session.current().await else {
        return HttpResponse::Unauthorized().body("Inicia sesión para crear productos");
    };
    if payload.creator.id != identity.id {
        return HttpResponse::Forbidden().body("El creador no coincide con la sesión");
    }

    match create_product(&config.database_path, &payload) {
        Ok(id) => {
            info!("product `{}` stored as {}", payload.name, id);
            HttpResponse::Ok().json(CreateProductResponse { id })
        }
        Err(e) => {
            error!("cannot store product `{}`: {}", payload.name, e);
            HttpResponse::ServiceUnavailable().body(format!("Error al guardar el producto: {}", e))
        }
    }
}

/// Inserts `product` under a new UUID and returns that id.
pub fn create_product(db_path: &Path, product: &Product) -> Result<String, String> {
    let conn = db::open(db_path).map_err(|e| e.to_string())?;
    let id = uuid::Uuid::new_v4().to_string();
    let comments = serde_json::to_string(&product.comments).map_err(|e| e.to_string())?;
    let voted_by = serde_json::to_string(&product.voted_by).map_err(|e| e.to_string())?;

    conn.execute(
        "INSERT INTO products (
            id, name, company, source_url, image_url, description, ingredients, preparation,
            fat_pct, protein_pct, carb_pct, vote_count, comments, created_at,
            creator_id, creator_name, voted_by
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        params![
            &id,
            &product.name,
            &product.company,
            &product.source_url,
            &product.image_url,
            &product.description,
            &product.ingredients,
            &product.preparation,
            &product.fat_pct,
            &product.protein_pct,
            &product.carb_pct,
            product.vote_count,
            comments,
            product.created_at,
            &product.creator.id,
            &product.creator.display_name,
            voted_by,
        ],
    )
        .map_err(|e| e.to_string())?;

    Ok(id)
}
