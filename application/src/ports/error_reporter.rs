//! Error reporter port
//!
//! External error-presentation collaborator. Receives every non-cancelled
//! query failure with its human-readable message; cancellation is never
//! reported.

use promptgate_domain::{QueryError, SessionId};

/// Port for surfacing query failures to the user.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, session: &SessionId, error: &QueryError);
}

/// No-op reporter used when no collaborator is wired in.
pub struct NoErrorReporter;

impl ErrorReporter for NoErrorReporter {
    fn report(&self, _session: &SessionId, _error: &QueryError) {}
}
