//! Client session lifecycle
//!
//! `Connecting → Active → Disconnected`, with `Disconnected` terminal. A
//! client that reconnects after disconnecting is a brand-new session with a
//! fresh id; there is no resume.

use orb_core::{ClientId, Rect};

/// Session lifecycle state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    Connecting,
    Active,
    Disconnected,
}

impl SessionState {
    /// `Connecting → Active`. Returns false if the session was not connecting.
    pub fn activate(&mut self) -> bool {
        if *self == SessionState::Connecting {
            *self = SessionState::Active;
            true
        } else {
            false
        }
    }

    /// Transition to `Disconnected`. Idempotent: returns false if already
    /// disconnected.
    pub fn disconnect(&mut self) -> bool {
        if *self == SessionState::Disconnected {
            false
        } else {
            *self = SessionState::Disconnected;
            true
        }
    }

    pub fn is_active(&self) -> bool {
        *self == SessionState::Active
    }
}

/// One connected window/tab, as the coordinator sees it
///
/// `bounds` is whatever the client last reported; it may lag the true window
/// position by up to one heartbeat period, which routing tolerates.
pub struct ClientSession<C> {
    pub id: ClientId,
    pub bounds: Rect,
    pub state: SessionState,
    channel: C,
}

impl<C> ClientSession<C> {
    pub fn new(id: ClientId, channel: C) -> Self {
        Self {
            id,
            bounds: Rect::ZERO,
            state: SessionState::Connecting,
            channel,
        }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_is_linear() {
        let mut state = SessionState::Connecting;
        assert!(state.activate());
        assert!(state.is_active());
        assert!(state.disconnect());
        assert_eq!(state, SessionState::Disconnected);
    }

    #[test]
    fn disconnect_is_idempotent() {
        let mut state = SessionState::Active;
        assert!(state.disconnect());
        assert!(!state.disconnect());
        assert_eq!(state, SessionState::Disconnected);
    }

    #[test]
    fn disconnected_never_reactivates() {
        let mut state = SessionState::Disconnected;
        assert!(!state.activate());
        assert_eq!(state, SessionState::Disconnected);
    }

    #[test]
    fn new_session_has_placeholder_bounds() {
        let session = ClientSession::new(ClientId(1), ());
        assert_eq!(session.bounds, Rect::ZERO);
        assert_eq!(session.state, SessionState::Connecting);
    }
}
