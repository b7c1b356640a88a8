//! Global tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize logging based on verbosity level.
///
/// 0 is warnings only; each additional level widens the filter. `RUST_LOG`
/// is ignored in favor of the explicit level. Call once at startup.
pub fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
