use std::fmt;
use std::rc::Rc;

/// Lifecycle of the current upload attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    /// No file selected yet.
    #[default]
    Idle,
    /// Bytes are moving, or the transfer finished and the locator lookup is
    /// still pending (reported as 100).
    InProgress { percent: u8 },
    /// The object is stored and its locator is known.
    Succeeded {
        file_name: String,
        resource_url: String,
    },
    /// Terminal for this attempt; a new upload is needed to retry.
    Failed { reason: String },
}

impl UploadState {
    pub fn resource_url(&self) -> Option<&str> {
        match self {
            UploadState::Succeeded { resource_url, .. } => Some(resource_url.as_str()),
            _ => None,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, UploadState::InProgress { .. })
    }
}

/// Tag of one upload attempt. Strictly increasing within a controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEventKind {
    Progress(u8),
    Failed(String),
    /// The transfer finished; carries the name the object was stored under.
    Transferred(String),
    Resolved(String),
    ResolveFailed(String),
}

/// A lifecycle callback, tagged with the attempt it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEvent {
    pub generation: Generation,
    pub kind: UploadEventKind,
}

/// Receiver of upload events, typically a component callback.
pub type EventSink = Rc<dyn Fn(UploadEvent)>;

/// Callback handle given to the storage service for one attempt.
#[derive(Clone)]
pub struct UploadEvents {
    generation: Generation,
    sink: EventSink,
}

impl UploadEvents {
    pub fn new(generation: Generation, sink: EventSink) -> Self {
        Self { generation, sink }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn progress(&self, percent: u8) {
        self.emit(UploadEventKind::Progress(percent));
    }

    pub fn failed(&self, reason: impl Into<String>) {
        self.emit(UploadEventKind::Failed(reason.into()));
    }

    pub fn transferred(&self, file_name: impl Into<String>) {
        self.emit(UploadEventKind::Transferred(file_name.into()));
    }

    pub fn resolved(&self, url: impl Into<String>) {
        self.emit(UploadEventKind::Resolved(url.into()));
    }

    pub fn resolve_failed(&self, reason: impl Into<String>) {
        self.emit(UploadEventKind::ResolveFailed(reason.into()));
    }

    fn emit(&self, kind: UploadEventKind) {
        (self.sink)(UploadEvent {
            generation: self.generation,
            kind,
        });
    }
}

impl fmt::Debug for UploadEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadEvents")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
