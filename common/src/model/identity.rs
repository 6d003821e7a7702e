use serde::{Deserialize, Serialize};

/// The signed-in user. `None` wherever an `Option<Identity>` appears means
/// nobody is authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub display_name: String,
}
