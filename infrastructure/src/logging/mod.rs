//! Logging adapters

mod init;
mod reporter;
mod settlement_log;

pub use init::init_logging;
pub use reporter::TracingErrorReporter;
pub use settlement_log::JsonlSettlementLog;
