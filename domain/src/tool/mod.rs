//! Tool domain: definitions, invocation requests, results, and the
//! executor abstraction that the approval gate decorates.

pub mod entities;
pub mod provider;
pub mod value_objects;
