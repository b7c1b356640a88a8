//! Static tool registry.
//!
//! Serves a fixed tool set assembled at construction time. Resolution is
//! infallible and session-independent; sessions that should see no tools at
//! all can use an empty registry.

use async_trait::async_trait;
use promptgate_application::{RegistryError, ToolRegistryPort};
use promptgate_domain::{SessionId, ToolDefinition, ToolExecutor, ToolSet};
use std::sync::Arc;
use tracing::debug;

/// [`ToolRegistryPort`] implementation over a fixed tool set.
#[derive(Default)]
pub struct StaticToolRegistry {
    tools: ToolSet,
}

impl StaticToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool to the registry.
    pub fn register(mut self, definition: ToolDefinition, executor: Arc<dyn ToolExecutor>) -> Self {
        self.tools = self.tools.register(definition, executor);
        self
    }
}

#[async_trait]
impl ToolRegistryPort for StaticToolRegistry {
    async fn resolve_tools(&self, session: &SessionId) -> Result<ToolSet, RegistryError> {
        debug!(
            "Resolved {} static tools for session {}",
            self.tools.len(),
            session
        );
        Ok(self.tools.clone())
    }
}
