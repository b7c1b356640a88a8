//! Infrastructure layer for promptgate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod approval;
pub mod config;
pub mod logging;
pub mod memory;
pub mod registry;

// Re-export commonly used types
pub use approval::{ApprovalRequest, ChannelApprovalBridge};
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileExecutionConfig, FileLoggingConfig,
    FileModelConfig,
};
pub use logging::{JsonlSettlementLog, TracingErrorReporter, init_logging};
pub use memory::InMemorySessionMemory;
pub use registry::StaticToolRegistry;
