//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use promptgate_application::{DEFAULT_QUERY_TIMEOUT, ExecutionParams};
use promptgate_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("system_prompt cannot be blank")]
    BlankSystemPrompt,
}

/// Raw execution configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    /// Per-query timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Whether tools are offered to the model at all
    pub tools_enabled: bool,
    /// System prompt prepended to every conversation
    pub system_prompt: Option<String>,
}

impl Default for FileExecutionConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            tools_enabled: true,
            system_prompt: None,
        }
    }
}

/// Raw model configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Default model for queries that don't specify one
    pub default: Model,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path to the JSONL settlement log (disabled when unset)
    pub settlement_log: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Execution settings
    pub execution: FileExecutionConfig,
    /// Model settings
    pub model: FileModelConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.execution.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if let Some(prompt) = &self.execution.system_prompt
            && prompt.trim().is_empty()
        {
            return Err(ConfigValidationError::BlankSystemPrompt);
        }

        Ok(())
    }

    /// Derive the execution parameters the pipeline runs with.
    pub fn execution_params(&self) -> ExecutionParams {
        let timeout = self
            .execution
            .timeout_seconds
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_QUERY_TIMEOUT);

        let mut params = ExecutionParams::default()
            .with_default_timeout(timeout)
            .with_tools_enabled(self.execution.tools_enabled);
        if let Some(prompt) = &self.execution.system_prompt {
            params = params.with_system_prompt(prompt.clone());
        }
        params
    }
}
