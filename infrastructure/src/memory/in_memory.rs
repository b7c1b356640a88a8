//! Process-local session memory.
//!
//! Histories live in a mutex-guarded map keyed by session. Single-flight
//! execution already serializes mutation per session, so a plain mutex over
//! the whole map is sufficient.

use promptgate_application::SessionMemoryPort;
use promptgate_domain::{Message, SessionId};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process [`SessionMemoryPort`] implementation.
#[derive(Default)]
pub struct InMemorySessionMemory {
    histories: Mutex<HashMap<SessionId, Vec<Message>>>,
}

impl InMemorySessionMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionMemoryPort for InMemorySessionMemory {
    fn history(&self, session: &SessionId) -> Vec<Message> {
        self.histories
            .lock()
            .expect("session memory lock")
            .get(session)
            .cloned()
            .unwrap_or_default()
    }

    fn append(&self, session: &SessionId, message: Message) {
        self.histories
            .lock()
            .expect("session memory lock")
            .entry(session.clone())
            .or_default()
            .push(message);
    }

    fn remove_last(&self, session: &SessionId) {
        if let Some(messages) = self
            .histories
            .lock()
            .expect("session memory lock")
            .get_mut(session)
        {
            messages.pop();
        }
    }

    fn clear(&self, session: &SessionId) {
        self.histories
            .lock()
            .expect("session memory lock")
            .remove(session);
    }

    fn len(&self, session: &SessionId) -> usize {
        self.histories
            .lock()
            .expect("session memory lock")
            .get(session)
            .map_or(0, Vec::len)
    }
}
