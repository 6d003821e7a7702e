//! Runtime state of the new product form.
//!
//! The component only wires the core pieces together: `FieldStore` owns the
//! values and errors, `UploadController` owns the image upload, and the
//! `SubmissionCoordinator` reads both when the form is submitted.

use common::form::{FieldStore, RuleSet};
use common::submission::SubmissionCoordinator;
use common::upload::UploadController;
use common::PRODUCTS_NAMESPACE;

use crate::services::browser::{BrowserNavigator, JsClock};
use crate::services::products::HttpProductStore;
use crate::services::session::SessionIdentity;
use crate::services::storage::HttpStorage;

pub type Coordinator = SubmissionCoordinator<SessionIdentity, HttpProductStore, BrowserNavigator, JsClock>;

pub struct NewProductComponent {
    pub fields: FieldStore,
    pub upload: UploadController<HttpStorage>,
    pub coordinator: Coordinator,
    /// Same slot the coordinator reads; filled by `Msg::SessionLoaded`.
    pub identity: SessionIdentity,
    /// `false` until `GET /api/session` has answered.
    pub session_loaded: bool,
}

impl NewProductComponent {
    pub fn new() -> Self {
        let identity = SessionIdentity::default();
        Self {
            fields: FieldStore::new(RuleSet::product()),
            upload: UploadController::new(HttpStorage, PRODUCTS_NAMESPACE),
            coordinator: SubmissionCoordinator::new(identity.clone(), HttpProductStore, BrowserNavigator, JsClock),
            identity,
            session_loaded: false,
        }
    }
}
