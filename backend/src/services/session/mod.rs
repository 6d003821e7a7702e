//! Sign-in endpoints backing the identity provider of the frontend.
//!
//! - `GET /api/session`: the current `Identity`, or `null`.
//! - `POST /api/session/login`: signs in a display name, returns the new `Identity`.
//! - `POST /api/session/logout`: clears the session.

use actix_web::web::{get, post, scope, Data, Json};
use actix_web::{HttpResponse, Responder, Scope};
use common::requests::LoginRequest;
use log::info;

use crate::session_controller::state::SessionState;

const API_PATH: &str = "/api/session";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(current))
        .route("/login", post().to(login))
        .route("/logout", post().to(logout))
}

async fn current(state: Data<SessionState>) -> impl Responder {
    HttpResponse::Ok().json(state.current().await)
}

async fn login(payload: Json<LoginRequest>, state: Data<SessionState>) -> impl Responder {
    match state.sign_in(&payload.display_name).await {
        Ok(identity) => {
            info!("user {} signed in as `{}`", identity.id, identity.display_name);
            HttpResponse::Ok().json(identity)
        }
        Err(e) => HttpResponse::BadRequest().body(e),
    }
}

async fn logout(state: Data<SessionState>) -> impl Responder {
    state.sign_out().await;
    HttpResponse::Ok().finish()
}
