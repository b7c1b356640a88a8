//! Tool registry adapters

mod static_registry;

pub use static_registry::StaticToolRegistry;
