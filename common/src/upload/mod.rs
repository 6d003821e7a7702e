//! Asynchronous upload of the product image.
//!
//! The storage collaborator reports the lifecycle of a transfer through an
//! `UploadEvents` handle. Each handle is tagged with the `Generation` of the
//! attempt that created it, so callbacks of a superseded attempt can be told
//! apart from the current one and dropped by `UploadController`.

mod controller;
mod state;

pub use controller::UploadController;
pub use state::{EventSink, Generation, UploadEvent, UploadEventKind, UploadEvents, UploadState};

/// File storage backend.
///
/// Both operations are fire-and-forget: results come back later through the
/// `events` handle, usually on the next turn of the event loop.
pub trait StorageService {
    /// Whatever the platform hands over when the user picks a file.
    type File;

    /// Starts sending `file` into `namespace`. Implementations report
    /// `progress`, then either `transferred(file_name)` or `failed(reason)`.
    fn upload(&self, namespace: &str, file: Self::File, events: UploadEvents);

    /// Looks up the public locator of a stored object and reports
    /// `resolved(url)` or `resolve_failed(reason)`.
    fn resolve_url(&self, namespace: &str, file_name: &str, events: UploadEvents);
}
