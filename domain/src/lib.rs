//! Domain layer for promptgate
//!
//! This crate contains the core entities and value objects of the prompt
//! execution pipeline. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Single-flight execution
//!
//! At most one query is in flight per session at any instant. A new query
//! supersedes (cancels) the prior one before its handle is installed.
//!
//! ## Approval gating
//!
//! Every model-invoked tool call passes through an explicit human approval
//! decision before the real tool implementation runs. Denial is a normal,
//! model-visible outcome, not an error.

pub mod core;
pub mod query;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use core::{
    error::QueryError,
    model::{Model, ModelProvider},
};
pub use query::entities::{FileReference, Query, QueryOutcome};
pub use session::entities::{Message, Role, SessionId};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    provider::{ToolExecutor, ToolSet},
    value_objects::{ToolError, ToolResult},
};
pub use util::{escape_template_markers, truncate_str};
