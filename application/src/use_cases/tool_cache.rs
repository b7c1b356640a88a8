//! Per-session cache of resolved tool sets.
//!
//! Resolving tools can be expensive (connecting to external servers), so the
//! registry result is cached per session and reused across queries. The
//! cache is an explicit object passed into the executor's construction — no
//! ambient global state — and is invalidated from the cancellation path so a
//! cancelled session starts clean next time.
//!
//! The cache stores the *ungated* resolved set; the approval wrapping is
//! rebuilt on every query.

use promptgate_domain::{SessionId, ToolSet};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Session-keyed cache of resolved [`ToolSet`]s.
#[derive(Default)]
pub struct ToolClientCache {
    entries: Mutex<HashMap<SessionId, ToolSet>>,
}

impl ToolClientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached tool set for a session, if any.
    pub fn get(&self, session: &SessionId) -> Option<ToolSet> {
        self.entries.lock().expect("tool cache lock").get(session).cloned()
    }

    /// Store the resolved tool set for a session.
    pub fn store(&self, session: &SessionId, tools: ToolSet) {
        self.entries
            .lock()
            .expect("tool cache lock")
            .insert(session.clone(), tools);
    }

    /// Drop the cached tool set for a session. Idempotent.
    pub fn invalidate(&self, session: &SessionId) {
        if self
            .entries
            .lock()
            .expect("tool cache lock")
            .remove(session)
            .is_some()
        {
            debug!("Invalidated tool cache for session {}", session);
        }
    }

    /// Drop all cached tool sets.
    pub fn clear(&self) {
        self.entries.lock().expect("tool cache lock").clear();
    }
}
