//! Session domain: conversation identity and message history entities.

pub mod entities;
