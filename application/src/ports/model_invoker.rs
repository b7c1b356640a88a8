//! Model invoker port
//!
//! Defines the interface for performing one blocking model invocation.
//! Implementations (provider clients) live in the infrastructure layer.

use async_trait::async_trait;
use promptgate_domain::{Message, Model, ToolSet};
use thiserror::Error;

/// Errors that can occur during a model invocation
#[derive(Error, Debug)]
pub enum InvokeError {
    /// The provider endpoint could not be reached or is down.
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    /// The provider rejected or failed the request.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Everything the invoker needs for one model call.
///
/// `history` is the full ordered message history for the session, including
/// the pending user turn the caller appended before submission. `user_text`
/// on [`ModelInvoker::invoke`] is passed separately because it has been
/// escaped for template-safety; adapters substitute it into their prompt
/// template rather than re-reading it from history.
#[derive(Clone)]
pub struct InvocationContext {
    /// Model (and provider) to invoke.
    pub model: Model,
    /// System instructions for this invocation.
    pub system_prompt: String,
    /// Ordered conversation history.
    pub history: Vec<Message>,
    /// Tools offered to the model, already wrapped by the approval gate.
    /// `None` means a bare invocation (no tool support).
    pub tools: Option<ToolSet>,
}

/// Port for the blocking call to a language model provider.
///
/// This is the suspension point where cooperative cancellation takes effect:
/// the runner races `invoke` against its cancellation token, so
/// implementations must be cancel-safe at their await points (dropping the
/// future abandons the request).
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Invoke the model and return the generated text.
    async fn invoke(
        &self,
        context: &InvocationContext,
        user_text: &str,
    ) -> Result<String, InvokeError>;
}
