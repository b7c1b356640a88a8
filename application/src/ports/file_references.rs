//! File reference port
//!
//! External bookkeeping of files attached to a conversation. The pipeline
//! only reads the current set at settlement time to annotate the outcome.

use promptgate_domain::{FileReference, SessionId};

/// Port for reading the files attached to a session.
pub trait FileReferencePort: Send + Sync {
    /// Files currently attached to the session.
    fn files(&self, session: &SessionId) -> Vec<FileReference>;

    fn is_empty(&self, session: &SessionId) -> bool {
        self.files(session).is_empty()
    }
}

/// Default implementation with no attached files.
pub struct NoFileReferences;

impl FileReferencePort for NoFileReferences {
    fn files(&self, _session: &SessionId) -> Vec<FileReference> {
        Vec::new()
    }
}
