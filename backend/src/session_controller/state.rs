//! Identity of the person using this local server.
//!
//! The server is a single-user desktop tool (it opens the browser on start),
//! so the session is one shared slot rather than a cookie store:
//! - `SessionState` is cloned into every Actix worker as `web::Data`.
//! - Reads (`GET /api/session`, the product create guard) take the read lock,
//!   sign-in and sign-out take the write lock.

use common::model::identity::Identity;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct SessionState {
    /// `None` while nobody is signed in.
    pub identity: Arc<RwLock<Option<Identity>>>,
}

impl SessionState {
    pub async fn current(&self) -> Option<Identity> {
        self.identity.read().await.clone()
    }

    /// Signs in `display_name` under a fresh id, replacing any previous user.
    pub async fn sign_in(&self, display_name: &str) -> Result<Identity, String> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err("El nombre es obligatorio".to_string());
        }
        let identity = Identity {
            id: uuid::Uuid::new_v4().to_string(),
            display_name: display_name.to_string(),
        };
        *self.identity.write().await = Some(identity.clone());
        Ok(identity)
    }

    pub async fn sign_out(&self) {
        *self.identity.write().await = None;
    }
}
