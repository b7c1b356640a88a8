//! Session memory port
//!
//! Per-session ordered message history. The pipeline reads and rolls back
//! through this interface only; it never owns the history.
//!
//! Single-flight execution guarantees that at most one worker mutates a
//! given session's memory at a time, so implementations need no ordering
//! guarantees beyond plain thread-safety.

use promptgate_domain::{Message, SessionId};

/// Port for per-session conversation history.
///
/// Contract with the execution pipeline:
/// - the caller appends the pending user turn *before* submitting a query;
/// - on `ModelUnavailable` / `ModelNotActive` / `Provider` failure the
///   runner removes that dangling turn via [`remove_last`](Self::remove_last);
/// - on `Cancelled` the runner leaves memory completely untouched;
/// - on success the runner appends the assistant reply.
pub trait SessionMemoryPort: Send + Sync {
    /// The full ordered history for a session (empty if unknown).
    fn history(&self, session: &SessionId) -> Vec<Message>;

    /// Append a message to the session's history.
    fn append(&self, session: &SessionId, message: Message);

    /// Remove the most recently appended message, if any.
    fn remove_last(&self, session: &SessionId);

    /// Drop the session's entire history.
    fn clear(&self, session: &SessionId);

    /// Number of messages currently stored for the session.
    fn len(&self, session: &SessionId) -> usize;

    fn is_empty(&self, session: &SessionId) -> bool {
        self.len(session) == 0
    }
}
