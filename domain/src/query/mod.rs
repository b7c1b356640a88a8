//! Query domain: one conversation turn and its settled outcome.

pub mod entities;
