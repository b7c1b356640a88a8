//! Query entities: the request for one conversation turn and its outcome.

use crate::core::model::Model;
use crate::session::entities::SessionId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One request to execute a conversation turn (Entity)
///
/// Owned exclusively by the execution pipeline from submission until the
/// handle settles. The caller is expected to have appended the user turn to
/// the session memory before submitting; on non-cancelled failure the
/// pipeline removes that dangling turn again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// Originating session.
    pub session: SessionId,
    /// Raw user text. Treated as untrusted data: it is escaped for
    /// template-safety before being sent to the model.
    pub user_text: String,
    /// Model (and thereby provider) selection.
    pub model: Model,
    /// Per-query timeout override. `None` falls back to the configured
    /// default (60 seconds).
    pub timeout: Option<Duration>,
}

impl Query {
    pub fn new(session: impl Into<SessionId>, user_text: impl Into<String>, model: Model) -> Self {
        Self {
            session: session.into(),
            user_text: user_text.into(),
            model,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// A file attached to the conversation context (Value Object)
///
/// Produced by an external file-reference collaborator; the pipeline only
/// forwards these annotations into the settled outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub path: String,
}

impl FileReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// The settled result of a query (Value Object)
///
/// Filled in once, when the query settles successfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcome {
    /// Text generated by the model.
    pub text: String,
    /// Wall-clock execution time.
    pub elapsed: Duration,
    /// File references attached to the conversation at settlement time.
    pub file_references: Vec<FileReference>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults_to_no_timeout() {
        let query = Query::new("s1", "hello", Model::default());
        assert!(query.timeout.is_none());
        assert_eq!(query.session.as_str(), "s1");
    }

    #[test]
    fn test_with_timeout() {
        let query =
            Query::new("s1", "hello", Model::default()).with_timeout(Duration::from_secs(5));
        assert_eq!(query.timeout, Some(Duration::from_secs(5)));
    }
}
