//! Query runner: the unit of work executed for one query.
//!
//! Builds the model-invocation context (memory + tools + system
//! instructions), performs the blocking model call, and classifies any
//! failure into a [`QueryError`]. The model call is the point where
//! cooperative cancellation takes effect: the invoker future is raced
//! against the cancellation token.

use crate::config::ExecutionParams;
use crate::ports::approval::ApprovalPort;
use crate::ports::model_invoker::{InvocationContext, InvokeError, ModelInvoker};
use crate::ports::session_memory::SessionMemoryPort;
use crate::ports::tool_registry::ToolRegistryPort;
use crate::use_cases::approval_gate::gate_tools;
use crate::use_cases::tool_cache::ToolClientCache;
use promptgate_domain::util::{escape_template_markers, truncate_str};
use promptgate_domain::{Message, Model, Query, QueryError, SessionId, ToolSet};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Executes one query inside the worker: context assembly, model call,
/// error classification, and memory rollback.
pub struct QueryRunner {
    invoker: Arc<dyn ModelInvoker>,
    memory: Arc<dyn SessionMemoryPort>,
    registry: Arc<dyn ToolRegistryPort>,
    approval: Arc<dyn ApprovalPort>,
    tool_cache: Arc<ToolClientCache>,
    params: ExecutionParams,
}

impl QueryRunner {
    pub fn new(
        invoker: Arc<dyn ModelInvoker>,
        memory: Arc<dyn SessionMemoryPort>,
        registry: Arc<dyn ToolRegistryPort>,
        approval: Arc<dyn ApprovalPort>,
        tool_cache: Arc<ToolClientCache>,
        params: ExecutionParams,
    ) -> Self {
        Self {
            invoker,
            memory,
            registry,
            approval,
            tool_cache,
            params,
        }
    }

    /// Run the query to completion or failure.
    ///
    /// On success the assistant reply is appended to the session memory. On
    /// non-cancelled failure the dangling user turn is rolled back. On
    /// cancellation — whether from an explicit `cancel()` or a timeout, both
    /// fire the same token — memory is left untouched.
    pub async fn run(&self, query: &Query, cancel: &CancellationToken) -> Result<String, QueryError> {
        debug!(
            "Running query for session {}: {}",
            query.session,
            truncate_str(&query.user_text, 80)
        );

        if cancel.is_cancelled() {
            return Err(QueryError::Cancelled);
        }

        match self.run_inner(query, cancel).await {
            Ok(text) => {
                self.memory
                    .append(&query.session, Message::assistant(&text));
                Ok(text)
            }
            Err(QueryError::Cancelled) => Err(QueryError::Cancelled),
            Err(err) => {
                // A cancellation that surfaced as a provider failure is
                // still a cancellation; do not roll back.
                if cancel.is_cancelled() {
                    return Err(QueryError::Cancelled);
                }
                error!("Query failed for session {}: {}", query.session, err);
                self.memory.remove_last(&query.session);
                Err(err)
            }
        }
    }

    async fn run_inner(
        &self,
        query: &Query,
        cancel: &CancellationToken,
    ) -> Result<String, QueryError> {
        let history = self.memory.history(&query.session);
        let tools = self.provision_tools(&query.session).await?;

        let context = InvocationContext {
            model: query.model.clone(),
            system_prompt: self.params.system_prompt.clone(),
            history,
            tools,
        };

        // User text is untrusted data, never template syntax.
        let clean_text = escape_template_markers(&query.user_text);

        let invoked = tokio::select! {
            _ = cancel.cancelled() => return Err(QueryError::Cancelled),
            result = self.invoker.invoke(&context, &clean_text) => result,
        };

        invoked.map_err(|e| classify_failure(&query.model, e))
    }

    /// Resolve the session's tools and wrap them with the approval gate.
    ///
    /// Returns `None` for a bare invocation context: tool support disabled,
    /// or the registry resolved an empty set. The resolved (ungated) set is
    /// cached per session; the gate is rebuilt on every call.
    async fn provision_tools(&self, session: &SessionId) -> Result<Option<ToolSet>, QueryError> {
        if !self.params.tools_enabled {
            return Ok(None);
        }

        let resolved = match self.tool_cache.get(session) {
            Some(cached) => cached,
            None => {
                let resolved = self
                    .registry
                    .resolve_tools(session)
                    .await
                    .map_err(|e| QueryError::Provider(e.to_string()))?;
                self.tool_cache.store(session, resolved.clone());
                resolved
            }
        };

        if resolved.is_empty() {
            return Ok(None);
        }

        debug!(
            "Provisioned {} approval-gated tools for session {}",
            resolved.len(),
            session
        );
        Ok(Some(gate_tools(&resolved, &self.approval)))
    }
}

/// Classify an invocation failure into the query error taxonomy.
///
/// A provider that requires an externally-activated runtime gets a guidance
/// message instead of the raw failure.
fn classify_failure(model: &Model, err: InvokeError) -> QueryError {
    let provider = model.provider();
    if provider.requires_activation() {
        return QueryError::ModelNotActive(format!(
            "Selected {} model '{}' is not active. Start the {} runtime and load the model, \
             or configure an API key in its settings.",
            provider, model, provider
        ));
    }
    match err {
        InvokeError::Unavailable(msg) => QueryError::ModelUnavailable(msg),
        InvokeError::RequestFailed(msg) | InvokeError::Other(msg) => QueryError::Provider(msg),
    }
}
