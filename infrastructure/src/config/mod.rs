//! Configuration loading and validation

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileExecutionConfig, FileLoggingConfig, FileModelConfig,
};
pub use loader::ConfigLoader;
