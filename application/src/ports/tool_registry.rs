//! Tool registry port
//!
//! Resolves the tools available to a session at query time. Registries can
//! change between queries (servers connect and disconnect), so resolution
//! happens per query; the [`ToolClientCache`](crate::use_cases::tool_cache::ToolClientCache)
//! short-circuits repeated resolution for the same session.

use async_trait::async_trait;
use promptgate_domain::{SessionId, ToolSet};
use thiserror::Error;

/// Errors that can occur while resolving tools
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Tool resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("Registry not available: {0}")]
    NotAvailable(String),
}

/// Port for resolving the tools available to a session.
#[async_trait]
pub trait ToolRegistryPort: Send + Sync {
    /// Resolve the tool set for a session. May be empty.
    async fn resolve_tools(&self, session: &SessionId) -> Result<ToolSet, RegistryError>;
}
