//! Human approval port for tool execution.
//!
//! [`ApprovalPort`] abstracts the synchronous rendezvous with a human before
//! a tool is allowed to run. The wait suspends the calling worker task (not
//! the runtime) until a decision arrives from a separate, UI-owned thread of
//! control.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ApprovalPort`] - defined here in the application layer
//! - **Adapter**: `ChannelApprovalBridge` - implemented in the infrastructure layer
//!
//! # Built-in Implementations
//!
//! - [`AutoApprove`] - always approves; for sandboxed or trusted setups
//! - [`AutoDeny`] - always denies; the safest non-interactive mode

use async_trait::async_trait;
use promptgate_domain::SessionId;
use thiserror::Error;

/// Error type for approval operations.
///
/// These represent failures of the approval mechanism itself, not decisions.
/// The approval gate treats any of them as a denial rather than propagating
/// a fault into the model-invocation pipeline.
#[derive(Error, Debug)]
pub enum ApprovalError {
    /// The approval consumer is gone (e.g. the UI closed).
    #[error("Approval channel closed")]
    ChannelClosed,

    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for requesting a human approval decision for one tool call.
///
/// Implementations must be callable from a worker task and must not
/// deadlock against UI update threads; the infrastructure channel bridge
/// achieves this by handing the request to a UI-owned consumer and awaiting
/// a one-shot reply.
#[async_trait]
pub trait ApprovalPort: Send + Sync {
    /// Request a decision for the given (tool name, arguments) pair.
    ///
    /// Blocks the calling worker until a decision is made or the request is
    /// abandoned. `arguments` is the rendered JSON argument object, for
    /// display.
    async fn request_approval(
        &self,
        session: &SessionId,
        tool_name: &str,
        arguments: &str,
    ) -> Result<bool, ApprovalError>;
}

/// Approval policy that approves every request.
///
/// # Warning
///
/// Bypasses the human gate entirely. Only use in sandboxed environments or
/// tests.
pub struct AutoApprove;

#[async_trait]
impl ApprovalPort for AutoApprove {
    async fn request_approval(
        &self,
        _session: &SessionId,
        _tool_name: &str,
        _arguments: &str,
    ) -> Result<bool, ApprovalError> {
        Ok(true)
    }
}

/// Approval policy that denies every request.
pub struct AutoDeny;

#[async_trait]
impl ApprovalPort for AutoDeny {
    async fn request_approval(
        &self,
        _session: &SessionId,
        _tool_name: &str,
        _arguments: &str,
    ) -> Result<bool, ApprovalError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_approve() {
        let session = SessionId::new("s1");
        let approved = AutoApprove
            .request_approval(&session, "search", "{}")
            .await
            .unwrap();
        assert!(approved);
    }

    #[tokio::test]
    async fn test_auto_deny() {
        let session = SessionId::new("s1");
        let approved = AutoDeny
            .request_approval(&session, "search", "{}")
            .await
            .unwrap();
        assert!(!approved);
    }
}
