use super::{EventSink, Generation, StorageService, UploadEvent, UploadEventKind, UploadEvents, UploadState};

/// State machine driving one image upload at a time.
///
/// ```text
/// Idle --begin--> InProgress{0} --progress--> InProgress{p}
///                      |                          |
///                      +--failure--> Failed       +--transferred--> InProgress{100} (resolving)
///                                                                      |
///                                                  Succeeded <--resolved+--resolve failure--> Failed
/// ```
///
/// Every `report_*` call carries the generation of the attempt it belongs to.
/// Anything but the current generation is ignored and the call returns
/// `false`.
pub struct UploadController<S: StorageService> {
    storage: S,
    namespace: String,
    generation: Generation,
    state: UploadState,
    /// Stored name of a finished transfer whose locator is still pending.
    resolving: Option<String>,
    events: Option<UploadEvents>,
}

impl<S: StorageService> UploadController<S> {
    pub fn new(storage: S, namespace: impl Into<String>) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
            generation: Generation::default(),
            state: UploadState::Idle,
            resolving: None,
            events: None,
        }
    }

    /// Starts a new attempt, superseding any previous one. The previous
    /// locator is discarded.
    pub fn begin_upload(&mut self, file: S::File, sink: EventSink) -> Generation {
        self.generation = self.generation.next();
        self.state = UploadState::InProgress { percent: 0 };
        self.resolving = None;

        let events = UploadEvents::new(self.generation, sink);
        self.events = Some(events.clone());
        log::debug!("upload {} started in `{}`", self.generation, self.namespace);
        self.storage.upload(&self.namespace, file, events);
        self.generation
    }

    /// Stores the reported percentage as is. Out-of-order values are not
    /// sorted or clamped.
    pub fn report_progress(&mut self, generation: Generation, percent: u8) -> bool {
        if !self.accepts(generation) || !self.transferring() {
            return false;
        }
        self.state = UploadState::InProgress { percent };
        true
    }

    pub fn report_failure(&mut self, generation: Generation, reason: impl Into<String>) -> bool {
        if !self.accepts(generation) || !self.transferring() {
            return false;
        }
        let reason = reason.into();
        log::warn!("upload {} failed: {}", generation, reason);
        self.state = UploadState::Failed { reason };
        true
    }

    /// The bytes are stored. The attempt stays `InProgress{100}` until the
    /// locator lookup answers.
    pub fn report_success(&mut self, generation: Generation, file_name: impl Into<String>) -> bool {
        if !self.accepts(generation) || !self.transferring() {
            return false;
        }
        let file_name = file_name.into();
        self.state = UploadState::InProgress { percent: 100 };
        self.resolving = Some(file_name.clone());

        if let Some(events) = self.events.clone() {
            self.storage.resolve_url(&self.namespace, &file_name, events);
        }
        true
    }

    pub fn report_resolved(&mut self, generation: Generation, url: impl Into<String>) -> bool {
        if !self.accepts(generation) {
            return false;
        }
        let Some(file_name) = self.resolving.take() else {
            return false;
        };
        self.state = UploadState::Succeeded {
            file_name,
            resource_url: url.into(),
        };
        true
    }

    pub fn report_resolve_failure(&mut self, generation: Generation, reason: impl Into<String>) -> bool {
        if !self.accepts(generation) || self.resolving.take().is_none() {
            return false;
        }
        let reason = reason.into();
        log::warn!("locator lookup for upload {} failed: {}", generation, reason);
        self.state = UploadState::Failed { reason };
        true
    }

    /// Routes a tagged callback to the matching `report_*` method. Returns
    /// whether the state changed.
    pub fn handle(&mut self, event: UploadEvent) -> bool {
        let UploadEvent { generation, kind } = event;
        match kind {
            UploadEventKind::Progress(percent) => self.report_progress(generation, percent),
            UploadEventKind::Failed(reason) => self.report_failure(generation, reason),
            UploadEventKind::Transferred(file_name) => self.report_success(generation, file_name),
            UploadEventKind::Resolved(url) => self.report_resolved(generation, url),
            UploadEventKind::ResolveFailed(reason) => self.report_resolve_failure(generation, reason),
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn resource_url(&self) -> Option<&str> {
        self.state.resource_url()
    }

    /// `true` while bytes are moving or the locator is pending.
    pub fn is_busy(&self) -> bool {
        self.state.is_in_progress()
    }

    pub fn is_resolving(&self) -> bool {
        self.resolving.is_some()
    }

    fn accepts(&self, generation: Generation) -> bool {
        if generation != self.generation {
            log::debug!(
                "ignoring event of upload {} (current is {})",
                generation,
                self.generation
            );
            return false;
        }
        true
    }

    fn transferring(&self) -> bool {
        self.state.is_in_progress() && self.resolving.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeStorage {
        calls: Rc<RefCell<Vec<String>>>,
        handles: Rc<RefCell<Vec<UploadEvents>>>,
    }

    impl FakeStorage {
        fn last_handle(&self) -> UploadEvents {
            self.handles.borrow().last().cloned().expect("no storage call yet")
        }
    }

    impl StorageService for FakeStorage {
        type File = &'static str;

        fn upload(&self, namespace: &str, file: Self::File, events: UploadEvents) {
            self.calls.borrow_mut().push(format!("upload {namespace}/{file}"));
            self.handles.borrow_mut().push(events);
        }

        fn resolve_url(&self, namespace: &str, file_name: &str, events: UploadEvents) {
            self.calls.borrow_mut().push(format!("resolve {namespace}/{file_name}"));
            self.handles.borrow_mut().push(events);
        }
    }

    struct Harness {
        controller: UploadController<FakeStorage>,
        storage: FakeStorage,
        inbox: Rc<RefCell<Vec<UploadEvent>>>,
    }

    impl Harness {
        fn new() -> Self {
            let storage = FakeStorage::default();
            Self {
                controller: UploadController::new(storage.clone(), "products"),
                storage,
                inbox: Rc::default(),
            }
        }

        fn begin(&mut self, file: &'static str) -> UploadEvents {
            let inbox = self.inbox.clone();
            self.controller
                .begin_upload(file, Rc::new(move |event: UploadEvent| inbox.borrow_mut().push(event)));
            self.storage.last_handle()
        }

        /// Feeds queued callbacks to the controller, like the event loop does.
        fn deliver(&mut self) -> Vec<bool> {
            let events: Vec<_> = self.inbox.borrow_mut().drain(..).collect();
            events
                .into_iter()
                .map(|event| self.controller.handle(event))
                .collect()
        }
    }

    #[test]
    fn begin_moves_to_in_progress_and_starts_transfer() {
        let mut h = Harness::new();
        assert_eq!(h.controller.state(), &UploadState::Idle);

        h.begin("cake.png");

        assert_eq!(h.controller.state(), &UploadState::InProgress { percent: 0 });
        assert_eq!(h.controller.generation(), Generation(1));
        assert_eq!(*h.storage.calls.borrow(), vec!["upload products/cake.png".to_string()]);
    }

    #[test]
    fn progress_is_stored_verbatim() {
        let mut h = Harness::new();
        let upload = h.begin("cake.png");

        upload.progress(60);
        upload.progress(30);
        assert_eq!(h.deliver(), vec![true, true]);

        assert_eq!(h.controller.state(), &UploadState::InProgress { percent: 30 });
    }

    #[test]
    fn transfer_then_resolution_succeeds() {
        let mut h = Harness::new();
        let upload = h.begin("cake.png");

        upload.transferred("f.png");
        h.deliver();

        // Bytes are stored but the locator is not known yet.
        assert_eq!(h.controller.state(), &UploadState::InProgress { percent: 100 });
        assert!(h.controller.is_resolving());
        assert_eq!(h.controller.resource_url(), None);
        assert_eq!(h.storage.calls.borrow().last().unwrap(), "resolve products/f.png");

        h.storage.last_handle().resolved("http://img/f.png");
        h.deliver();

        assert_eq!(
            h.controller.state(),
            &UploadState::Succeeded {
                file_name: "f.png".to_string(),
                resource_url: "http://img/f.png".to_string(),
            }
        );
        assert!(!h.controller.is_busy());
    }

    #[test]
    fn failure_is_terminal_for_the_attempt() {
        let mut h = Harness::new();
        let upload = h.begin("cake.png");

        upload.failed("storage/unauthorized");
        upload.progress(50);
        upload.transferred("f.png");

        assert_eq!(h.deliver(), vec![true, false, false]);
        assert_eq!(
            h.controller.state(),
            &UploadState::Failed { reason: "storage/unauthorized".to_string() }
        );
    }

    #[test]
    fn resolution_failure_surfaces_as_failed() {
        let mut h = Harness::new();
        h.begin("cake.png").transferred("f.png");
        h.deliver();

        h.storage.last_handle().resolve_failed("not found");
        h.deliver();

        assert_eq!(
            h.controller.state(),
            &UploadState::Failed { reason: "not found".to_string() }
        );
    }

    #[test]
    fn stale_transfer_does_not_touch_newer_attempt() {
        let mut h = Harness::new();
        let first = h.begin("old.png");
        let second = h.begin("new.png");

        first.transferred("old-stored.png");
        first.failed("late failure");
        first.progress(99);
        assert_eq!(h.deliver(), vec![false, false, false]);
        assert_eq!(h.controller.state(), &UploadState::InProgress { percent: 0 });
        assert!(!h.controller.is_resolving());

        second.transferred("new-stored.png");
        h.deliver();
        h.storage.last_handle().resolved("http://img/new.png");
        h.deliver();

        assert_eq!(h.controller.resource_url(), Some("http://img/new.png"));
    }

    #[test]
    fn stale_resolution_is_ignored() {
        let mut h = Harness::new();
        h.begin("old.png").transferred("old.png");
        h.deliver();
        let old_lookup = h.storage.last_handle();

        h.begin("new.png");
        old_lookup.resolved("http://img/old.png");

        assert_eq!(h.deliver(), vec![false]);
        assert_eq!(h.controller.state(), &UploadState::InProgress { percent: 0 });
        assert_eq!(h.controller.resource_url(), None);
    }

    #[test]
    fn new_attempt_discards_previous_locator() {
        let mut h = Harness::new();
        h.begin("a.png").transferred("a.png");
        h.deliver();
        h.storage.last_handle().resolved("http://img/a.png");
        h.deliver();
        assert_eq!(h.controller.resource_url(), Some("http://img/a.png"));

        h.begin("b.png");

        assert_eq!(h.controller.resource_url(), None);
        assert_eq!(h.controller.generation(), Generation(2));
    }

    #[test]
    fn resolved_without_pending_lookup_is_ignored() {
        let mut h = Harness::new();
        let upload = h.begin("a.png");
        upload.resolved("http://img/forged.png");
        assert_eq!(h.deliver(), vec![false]);
        assert_eq!(h.controller.resource_url(), None);
    }
}
