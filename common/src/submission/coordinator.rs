use thiserror::Error;

use super::{Clock, IdentityProvider, Navigator, PersistenceStore, Route};
use crate::form::{ErrorMap, FieldSnapshot, RuleSet};
use crate::model::product::Product;
use crate::upload::UploadState;
use crate::PRODUCTS_COLLECTION;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Nobody is signed in. The redirect to the login page was already
    /// requested.
    #[error("no authenticated user, redirected to login")]
    Unauthenticated,
    #[error("{} field(s) failed validation", .0.len())]
    ValidationFailed(ErrorMap),
}

/// Turns a form snapshot into a `Product` and hands it to the store.
///
/// Holds no form state: values and upload state are read from the snapshots
/// passed to `submit`.
pub struct SubmissionCoordinator<I, P, N, C> {
    identity: I,
    store: P,
    navigator: N,
    clock: C,
    rules: RuleSet,
}

impl<I, P, N, C> SubmissionCoordinator<I, P, N, C>
where
    I: IdentityProvider,
    P: PersistenceStore,
    N: Navigator,
    C: Clock,
{
    pub fn new(identity: I, store: P, navigator: N, clock: C) -> Self {
        Self {
            identity,
            store,
            navigator,
            clock,
            rules: RuleSet::product(),
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Validates and dispatches the form.
    ///
    /// Order matters: the identity gate runs before validation, and the
    /// error map is always recomputed from `fields`. The upload is not waited
    /// for: without a resolved locator the record gets an empty `imageUrl`.
    pub fn submit(&self, fields: &FieldSnapshot, upload: &UploadState) -> Result<Product, SubmissionError> {
        let Some(identity) = self.identity.current() else {
            log::warn!("submit without an authenticated user, redirecting to login");
            self.navigator.go_to(Route::Login);
            return Err(SubmissionError::Unauthenticated);
        };

        let errors = self.rules.validate(fields);
        if !errors.is_empty() {
            return Err(SubmissionError::ValidationFailed(errors));
        }

        if upload.is_in_progress() {
            log::warn!("submitting while the image upload is still in progress");
        }
        let image_url = upload.resource_url().unwrap_or_default();
        let product = Product::from_form(fields, image_url, &identity, self.clock.now_millis());

        log::info!("creating product `{}` for user {}", product.name, identity.id);
        self.store.create(PRODUCTS_COLLECTION, product.clone());
        self.navigator.go_to(Route::Home);
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldKey;
    use crate::model::identity::Identity;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FixedIdentity(Option<Identity>);

    impl IdentityProvider for FixedIdentity {
        fn current(&self) -> Option<Identity> {
            self.0.clone()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingStore(Rc<RefCell<Vec<(String, Product)>>>);

    impl PersistenceStore for RecordingStore {
        fn create(&self, collection: &str, product: Product) {
            self.0.borrow_mut().push((collection.to_string(), product));
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator(Rc<RefCell<Vec<Route>>>);

    impl Navigator for RecordingNavigator {
        fn go_to(&self, route: Route) {
            self.0.borrow_mut().push(route);
        }
    }

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    type Coordinator = SubmissionCoordinator<FixedIdentity, RecordingStore, RecordingNavigator, FixedClock>;

    fn ana() -> Identity {
        Identity {
            id: "u1".to_string(),
            display_name: "Ana".to_string(),
        }
    }

    fn coordinator(identity: Option<Identity>) -> (Coordinator, RecordingStore, RecordingNavigator) {
        let store = RecordingStore::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(
            FixedIdentity(identity),
            store.clone(),
            navigator.clone(),
            FixedClock(1_700_000_000_000),
        );
        (coordinator, store, navigator)
    }

    fn cake() -> FieldSnapshot {
        FieldSnapshot::new()
            .with(FieldKey::Name, "Cake")
            .with(FieldKey::Company, "Acme")
            .with(FieldKey::SourceUrl, "http://x")
    }

    fn uploaded() -> UploadState {
        UploadState::Succeeded {
            file_name: "f.png".to_string(),
            resource_url: "http://img/f.png".to_string(),
        }
    }

    #[test]
    fn dispatches_one_create_and_navigates_home() {
        let (coordinator, store, navigator) = coordinator(Some(ana()));

        let product = coordinator.submit(&cake(), &uploaded()).unwrap();

        let created = store.0.borrow();
        assert_eq!(created.len(), 1);
        let (collection, record) = &created[0];
        assert_eq!(collection, "products");
        assert_eq!(record, &product);
        assert_eq!(record.image_url, "http://img/f.png");
        assert_eq!(record.vote_count, 0);
        assert!(record.comments.is_empty());
        assert!(record.voted_by.is_empty());
        assert_eq!(record.created_at, 1_700_000_000_000);
        assert_eq!(record.creator.id, "u1");
        assert_eq!(record.creator.display_name, "Ana");
        assert_eq!(record.description, "");
        assert_eq!(*navigator.0.borrow(), vec![Route::Home]);
    }

    #[test]
    fn missing_name_blocks_submission() {
        let (coordinator, store, navigator) = coordinator(Some(ana()));

        let result = coordinator.submit(&cake().with(FieldKey::Name, ""), &uploaded());

        match result {
            Err(SubmissionError::ValidationFailed(errors)) => assert!(errors.contains(FieldKey::Name)),
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
        assert!(store.0.borrow().is_empty());
        assert!(navigator.0.borrow().is_empty());
    }

    #[test]
    fn unauthenticated_redirects_to_login_without_creating() {
        for fields in [cake(), FieldSnapshot::new()] {
            let (coordinator, store, navigator) = coordinator(None);

            let result = coordinator.submit(&fields, &uploaded());

            assert_eq!(result, Err(SubmissionError::Unauthenticated));
            assert!(store.0.borrow().is_empty());
            assert_eq!(*navigator.0.borrow(), vec![Route::Login]);
        }
    }

    #[test]
    fn submits_with_empty_image_while_upload_pending() {
        for upload in [
            UploadState::Idle,
            UploadState::InProgress { percent: 100 },
            UploadState::Failed { reason: "boom".to_string() },
        ] {
            let (coordinator, store, _) = coordinator(Some(ana()));

            let product = coordinator.submit(&cake(), &upload).unwrap();

            assert_eq!(product.image_url, "");
            assert_eq!(store.0.borrow().len(), 1);
        }
    }

    #[test]
    fn custom_rules_are_applied_at_submit() {
        let (coordinator, store, _) = coordinator(Some(ana()));
        let coordinator =
            coordinator.with_rules(RuleSet::product().require(FieldKey::Description, "Agrega una descripción"));

        let result = coordinator.submit(&cake(), &uploaded());

        assert!(matches!(result, Err(SubmissionError::ValidationFailed(ref e)) if e.contains(FieldKey::Description)));
        assert!(store.0.borrow().is_empty());
    }

    /// Records how many creates had been dispatched when navigation happened.
    struct SnoopingNavigator(RecordingStore, Rc<RefCell<Vec<usize>>>);

    impl Navigator for SnoopingNavigator {
        fn go_to(&self, _route: Route) {
            self.1.borrow_mut().push(self.0.0.borrow().len());
        }
    }

    #[test]
    fn create_is_dispatched_before_navigating_home() {
        let store = RecordingStore::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let coordinator = SubmissionCoordinator::new(
            FixedIdentity(Some(ana())),
            store.clone(),
            SnoopingNavigator(store.clone(), seen.clone()),
            FixedClock(1),
        );

        coordinator.submit(&cake(), &uploaded()).unwrap();

        assert_eq!(*seen.borrow(), vec![1]);
    }
}
