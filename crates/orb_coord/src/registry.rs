//! Client registry
//!
//! Ordered map of live sessions, owned exclusively by the coordinator task.
//! Every mutation and every snapshot serializes through that one task, so a
//! solver tick or a routing decision can never observe a partial update.
//!
//! Ids come from a monotonic counter keyed into a BTreeMap, so "registry
//! order" (neighbor ordering, first-match routing) is id order, which equals
//! insertion order.

use orb_core::{ClientId, Rect};
use tracing::trace;

use crate::session::{ClientSession, SessionState};

pub struct Registry<C> {
    sessions: std::collections::BTreeMap<ClientId, ClientSession<C>>,
    next_id: u64,
}

impl<C> Registry<C> {
    pub fn new() -> Self {
        Self {
            sessions: std::collections::BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Admit a new client: assign a fresh id and create an active session
    /// with placeholder bounds, so the solver is well-defined before the
    /// first heartbeat arrives.
    pub fn register(&mut self, channel: C) -> ClientId {
        let id = ClientId(self.next_id);
        self.next_id += 1;

        let mut session = ClientSession::new(id, channel);
        session.state.activate();
        self.sessions.insert(id, session);

        trace!(%id, total = self.sessions.len(), "session registered");
        id
    }

    /// Remove a session. Idempotent: returns false if the id is not present.
    pub fn unregister(&mut self, id: ClientId) -> bool {
        match self.sessions.remove(&id) {
            Some(mut session) => {
                session.state.disconnect();
                trace!(%id, total = self.sessions.len(), "session unregistered");
                true
            }
            None => false,
        }
    }

    /// Replace a session's bounds with whatever the client reported.
    ///
    /// No sanity validation: zero or negative sizes are stored as-is and the
    /// solver/router are defensive about them. Returns false for unknown ids
    /// (transient lookup miss, silently absorbed by the caller).
    pub fn update_bounds(&mut self, id: ClientId, bounds: Rect) -> bool {
        match self.sessions.get_mut(&id) {
            Some(session) => {
                session.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Consistent view of all live sessions, in registry order.
    ///
    /// The solver and router work from this owned copy; registry mutations
    /// after the snapshot is taken do not affect an in-flight computation.
    pub fn snapshot(&self) -> Vec<(ClientId, Rect)> {
        self.sessions
            .values()
            .filter(|s| s.state.is_active())
            .map(|s| (s.id, s.bounds))
            .collect()
    }

    pub fn channel(&self, id: ClientId) -> Option<&C> {
        self.sessions.get(&id).map(|s| s.channel())
    }

    pub fn contains(&self, id: ClientId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn state(&self, id: ClientId) -> Option<SessionState> {
        self.sessions.get(&id).map(|s| s.state)
    }
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}
