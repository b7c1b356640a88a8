//! Use cases of the prompt execution pipeline.

pub mod approval_gate;
pub mod execute_query;
pub mod run_query;
pub mod tool_cache;
