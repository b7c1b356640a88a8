//! Approval gate: wraps every tool executor behind a human decision.
//!
//! Neither the model nor the tool implementations are aware of the
//! interception: [`gate_tools`] produces an equivalent [`ToolSet`] where each
//! executor is replaced by a wrapper that requests approval before
//! delegating. Denial returns a fixed sentinel result so the model can react
//! to the refusal instead of stalling.
//!
//! The mapping is rebuilt on every provisioning call — tools are resolved
//! per query since registries can change between queries — and the gate
//! holds no per-tool state.

use crate::ports::approval::ApprovalPort;
use async_trait::async_trait;
use promptgate_domain::{SessionId, ToolCall, ToolExecutor, ToolResult, ToolSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Sentinel result text returned for a denied tool call.
pub const DENIED_TOOL_RESULT: &str = "Tool execution was denied by the user.";

struct ApprovalGatedExecutor {
    delegate: Arc<dyn ToolExecutor>,
    approval: Arc<dyn ApprovalPort>,
}

#[async_trait]
impl ToolExecutor for ApprovalGatedExecutor {
    async fn execute(&self, call: &ToolCall, session: &SessionId) -> ToolResult {
        let arguments = call.arguments_json();

        // A failing approval collaborator (e.g. the UI went away) is a
        // denial, never a fault in the invocation pipeline.
        let approved = match self
            .approval
            .request_approval(session, &call.tool_name, &arguments)
            .await
        {
            Ok(decision) => decision,
            Err(e) => {
                warn!(
                    "Approval request failed for tool '{}', treating as denial: {}",
                    call.tool_name, e
                );
                false
            }
        };

        if approved {
            debug!("Tool execution approved: {}", call.tool_name);
            self.delegate.execute(call, session).await
        } else {
            debug!("Tool execution denied: {}", call.tool_name);
            ToolResult::success(&call.tool_name, DENIED_TOOL_RESULT)
        }
    }
}

/// Build an approval-gated view of a tool set.
///
/// Every executor in `tools` is replaced by a wrapper that consults
/// `approval` with the concrete (tool name, arguments) pair before invoking
/// the delegate. Approved calls return the delegate's result verbatim.
pub fn gate_tools(tools: &ToolSet, approval: &Arc<dyn ApprovalPort>) -> ToolSet {
    let mut gated = ToolSet::new();
    for (definition, executor) in tools.iter() {
        gated = gated.register(
            definition.clone(),
            Arc::new(ApprovalGatedExecutor {
                delegate: Arc::clone(executor),
                approval: Arc::clone(approval),
            }),
        );
    }
    gated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::approval::{ApprovalError, AutoApprove, AutoDeny};
    use promptgate_domain::ToolDefinition;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Delegate that counts its invocations.
    struct CountingExecutor {
        calls: AtomicUsize,
    }

    impl CountingExecutor {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ToolExecutor for CountingExecutor {
        async fn execute(&self, call: &ToolCall, _session: &SessionId) -> ToolResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            ToolResult::success(&call.tool_name, "real search output")
        }
    }

    /// Approval port that records what it was asked about.
    struct RecordingApproval {
        decision: bool,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl RecordingApproval {
        fn new(decision: bool) -> Arc<Self> {
            Arc::new(Self {
                decision,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ApprovalPort for RecordingApproval {
        async fn request_approval(
            &self,
            _session: &SessionId,
            tool_name: &str,
            arguments: &str,
        ) -> Result<bool, ApprovalError> {
            self.seen
                .lock()
                .unwrap()
                .push((tool_name.to_string(), arguments.to_string()));
            Ok(self.decision)
        }
    }

    /// Approval port whose collaborator has failed.
    struct BrokenApproval;

    #[async_trait]
    impl ApprovalPort for BrokenApproval {
        async fn request_approval(
            &self,
            _session: &SessionId,
            _tool_name: &str,
            _arguments: &str,
        ) -> Result<bool, ApprovalError> {
            Err(ApprovalError::ChannelClosed)
        }
    }

    fn set_with(executor: Arc<dyn ToolExecutor>) -> ToolSet {
        ToolSet::new().register(ToolDefinition::new("search", "Search the web"), executor)
    }

    #[tokio::test]
    async fn test_denied_call_never_reaches_delegate() {
        let delegate = CountingExecutor::new();
        let approval: Arc<dyn ApprovalPort> = Arc::new(AutoDeny);
        let gated = gate_tools(&set_with(delegate.clone()), &approval);

        let call = ToolCall::new("search").with_arg("query", "rust");
        let result = gated
            .executor("search")
            .unwrap()
            .execute(&call, &SessionId::new("s1"))
            .await;

        assert!(result.is_success());
        assert_eq!(result.output(), Some(DENIED_TOOL_RESULT));
        assert_eq!(delegate.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_approved_call_returns_delegate_result_verbatim() {
        let delegate = CountingExecutor::new();
        let approval: Arc<dyn ApprovalPort> = Arc::new(AutoApprove);
        let gated = gate_tools(&set_with(delegate.clone()), &approval);

        let call = ToolCall::new("search").with_arg("query", "rust");
        let result = gated
            .executor("search")
            .unwrap()
            .execute(&call, &SessionId::new("s1"))
            .await;

        assert!(result.is_success());
        assert_eq!(result.output(), Some("real search output"));
        assert_eq!(delegate.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_gate_passes_exact_name_and_arguments() {
        let delegate = CountingExecutor::new();
        let recording = RecordingApproval::new(true);
        let approval: Arc<dyn ApprovalPort> = recording.clone();
        let gated = gate_tools(&set_with(delegate), &approval);

        let call = ToolCall::new("search")
            .with_arg("query", "tokio select")
            .with_arg("limit", 3);
        gated
            .executor("search")
            .unwrap()
            .execute(&call, &SessionId::new("s1"))
            .await;

        let seen = recording.seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[(
                "search".to_string(),
                r#"{"limit":3,"query":"tokio select"}"#.to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_broken_approval_collaborator_means_denial() {
        let delegate = CountingExecutor::new();
        let approval: Arc<dyn ApprovalPort> = Arc::new(BrokenApproval);
        let gated = gate_tools(&set_with(delegate.clone()), &approval);

        let result = gated
            .executor("search")
            .unwrap()
            .execute(&ToolCall::new("search"), &SessionId::new("s1"))
            .await;

        assert_eq!(result.output(), Some(DENIED_TOOL_RESULT));
        assert_eq!(delegate.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gating_preserves_definitions_and_holds_no_state() {
        let delegate = CountingExecutor::new();
        let approval: Arc<dyn ApprovalPort> = Arc::new(AutoApprove);
        let original = set_with(delegate);

        let first = gate_tools(&original, &approval);
        let second = gate_tools(&original, &approval);

        assert_eq!(first.len(), original.len());
        assert_eq!(second.len(), original.len());
        assert_eq!(
            first.definitions().map(|d| &d.name).collect::<Vec<_>>(),
            original.definitions().map(|d| &d.name).collect::<Vec<_>>()
        );
    }
}
