//! Application layer for promptgate
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.
//!
//! The central use case is [`QueryExecutor`](use_cases::execute_query::QueryExecutor):
//! single-flight asynchronous query execution per session, with cooperative
//! cancellation, a default 60-second timeout, and an approval gate wrapping
//! every model-invoked tool call.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_QUERY_TIMEOUT, ExecutionParams};
pub use ports::{
    approval::{ApprovalError, ApprovalPort, AutoApprove, AutoDeny},
    error_reporter::{ErrorReporter, NoErrorReporter},
    file_references::{FileReferencePort, NoFileReferences},
    model_invoker::{InvocationContext, InvokeError, ModelInvoker},
    result_sink::{NoResultSink, ResultSink},
    session_memory::SessionMemoryPort,
    tool_registry::{RegistryError, ToolRegistryPort},
};
pub use use_cases::approval_gate::{DENIED_TOOL_RESULT, gate_tools};
pub use use_cases::execute_query::{QueryExecutor, QueryHandle};
pub use use_cases::run_query::QueryRunner;
pub use use_cases::tool_cache::ToolClientCache;
