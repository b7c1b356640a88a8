//! Core domain concepts: models, providers, and the query error taxonomy.

pub mod error;
pub mod model;
