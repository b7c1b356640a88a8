//! Error reporter backed by tracing.

use promptgate_application::ErrorReporter;
use promptgate_domain::{QueryError, SessionId};
use tracing::error;

/// [`ErrorReporter`] that emits query failures as `error!` events.
///
/// Useful for headless deployments where no UI collaborator is wired in.
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, session: &SessionId, err: &QueryError) {
        error!("Query failed for session {}: {}", session, err);
    }
}
