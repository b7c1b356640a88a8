//! Tool executor abstraction and the per-query tool set.
//!
//! The tool set available to a query is not known statically: it is resolved
//! at runtime from an external registry (CLI tools, MCP servers, ...) as a
//! mapping from [`ToolDefinition`] to [`ToolExecutor`]. The approval gate in
//! the application layer decorates any concrete executor without knowing
//! tool identities ahead of time.

use async_trait::async_trait;
use std::sync::Arc;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ToolResult;
use crate::session::entities::SessionId;

/// A named, model-invocable external action.
///
/// Executors never return errors through `Result`; failures are carried
/// inside [`ToolResult`] so the model always receives something to react to.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a concrete tool call for the given session.
    async fn execute(&self, call: &ToolCall, session: &SessionId) -> ToolResult;
}

/// The tools provisioned for one query: an ordered mapping from tool
/// definition to executor.
///
/// Rebuilt on every provisioning call, since registries can change between
/// queries. Cloning is cheap (executors are shared via `Arc`).
#[derive(Clone, Default)]
pub struct ToolSet {
    entries: Vec<(ToolDefinition, Arc<dyn ToolExecutor>)>,
}

impl ToolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool with its executor (builder style).
    pub fn register(mut self, definition: ToolDefinition, executor: Arc<dyn ToolExecutor>) -> Self {
        self.entries.push((definition, executor));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up the executor for a tool by name.
    pub fn executor(&self, name: &str) -> Option<&Arc<dyn ToolExecutor>> {
        self.entries
            .iter()
            .find(|(def, _)| def.name == name)
            .map(|(_, exec)| exec)
    }

    /// Iterate over (definition, executor) pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(ToolDefinition, Arc<dyn ToolExecutor>)> {
        self.entries.iter()
    }

    /// The definitions only, for advertising tools to the model.
    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.entries.iter().map(|(def, _)| def)
    }
}

impl std::fmt::Debug for ToolSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSet")
            .field(
                "tools",
                &self.definitions().map(|d| &d.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoExecutor;

    #[async_trait]
    impl ToolExecutor for EchoExecutor {
        async fn execute(&self, call: &ToolCall, _session: &SessionId) -> ToolResult {
            ToolResult::success(&call.tool_name, call.arguments_json())
        }
    }

    #[test]
    fn test_empty_set() {
        let set = ToolSet::new();
        assert!(set.is_empty());
        assert!(set.executor("search").is_none());
    }

    #[test]
    fn test_register_and_lookup() {
        let set = ToolSet::new().register(
            ToolDefinition::new("search", "Search the web"),
            Arc::new(EchoExecutor),
        );
        assert_eq!(set.len(), 1);
        assert!(set.executor("search").is_some());
        assert!(set.executor("other").is_none());
    }

    #[tokio::test]
    async fn test_executor_dispatch() {
        let set = ToolSet::new().register(
            ToolDefinition::new("search", "Search the web"),
            Arc::new(EchoExecutor),
        );
        let call = ToolCall::new("search").with_arg("query", "rust");
        let session = SessionId::new("s1");
        let result = set
            .executor("search")
            .unwrap()
            .execute(&call, &session)
            .await;
        assert!(result.is_success());
        assert_eq!(result.output(), Some(r#"{"query":"rust"}"#));
    }
}
