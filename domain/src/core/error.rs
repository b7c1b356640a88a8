//! Query error taxonomy

use thiserror::Error;

/// Classified outcome of a failed query.
///
/// Every failure inside the execution pipeline is converted to one of these
/// variants before the query handle settles; raw provider errors never reach
/// the caller. `Cancelled` is an intentional non-error outcome: it is never
/// reported through the error-presentation collaborator and never triggers
/// memory rollback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query cancelled")]
    Cancelled,

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// The selected provider requires an externally-activated runtime
    /// (e.g. a local Jan server) and the failure matched that provider.
    /// Carries actionable guidance for the user.
    #[error("{0}")]
    ModelNotActive(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

impl QueryError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, QueryError::Cancelled)
    }

    /// Whether this error should be surfaced to the user.
    ///
    /// Cancellation produces silence; everything else is reported.
    pub fn is_reportable(&self) -> bool {
        !self.is_cancelled()
    }
}
