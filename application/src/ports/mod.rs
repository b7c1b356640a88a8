//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod approval;
pub mod error_reporter;
pub mod file_references;
pub mod model_invoker;
pub mod result_sink;
pub mod session_memory;
pub mod tool_registry;
