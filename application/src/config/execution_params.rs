//! Execution parameters — query pipeline control.
//!
//! [`ExecutionParams`] groups the static parameters that control query
//! execution in [`QueryExecutor`](crate::use_cases::execute_query::QueryExecutor).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout applied when a query carries none.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(60);

const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful coding assistant. Answer precisely and cite file paths where relevant.";

/// Query execution control parameters.
///
/// Controls the default timeout, whether tool support is enabled, and the
/// system instructions sent with every invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Timeout applied when the query specifies none.
    pub default_timeout: Duration,
    /// Whether tools resolved for the session are offered to the model.
    pub tools_enabled: bool,
    /// System instructions included in every invocation context.
    pub system_prompt: String,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            default_timeout: DEFAULT_QUERY_TIMEOUT,
            tools_enabled: true,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_tools_enabled(mut self, enabled: bool) -> Self {
        self.tools_enabled = enabled;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ExecutionParams::default();
        assert_eq!(params.default_timeout, Duration::from_secs(60));
        assert!(params.tools_enabled);
        assert!(!params.system_prompt.is_empty());
    }

    #[test]
    fn test_builder() {
        let params = ExecutionParams::default()
            .with_default_timeout(Duration::from_secs(5))
            .with_tools_enabled(false)
            .with_system_prompt("be terse");

        assert_eq!(params.default_timeout, Duration::from_secs(5));
        assert!(!params.tools_enabled);
        assert_eq!(params.system_prompt, "be terse");
    }
}
