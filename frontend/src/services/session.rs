use common::model::identity::Identity;
use common::requests::LoginRequest;
use common::submission::IdentityProvider;
use gloo_net::http::Request;
use std::cell::RefCell;
use std::rc::Rc;

const SESSION_PATH: &str = "/api/session";

/// Identity slot shared between a component and its submission coordinator.
///
/// Starts empty and is filled once `GET /api/session` answers.
#[derive(Clone, Default)]
pub struct SessionIdentity(Rc<RefCell<Option<Identity>>>);

impl SessionIdentity {
    pub fn set(&self, identity: Option<Identity>) {
        *self.0.borrow_mut() = identity;
    }
}

impl IdentityProvider for SessionIdentity {
    fn current(&self) -> Option<Identity> {
        self.0.borrow().clone()
    }
}

pub async fn fetch_session() -> Result<Option<Identity>, String> {
    let response = Request::get(SESSION_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<Option<Identity>>().await.map_err(|e| e.to_string())
}

pub async fn login(display_name: &str) -> Result<Identity, String> {
    let response = Request::post(&format!("{}/login", SESSION_PATH))
        .json(&LoginRequest {
            display_name: display_name.to_string(),
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(response.text().await.unwrap_or_default());
    }
    response.json::<Identity>().await.map_err(|e| e.to_string())
}

pub async fn logout() -> Result<(), String> {
    let response = Request::post(&format!("{}/logout", SESSION_PATH))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
