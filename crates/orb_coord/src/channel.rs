//! Client channel abstraction
//!
//! The original system ran two structurally identical coordinators, one over
//! native window handles and one over a browser shared-worker port. The
//! coordinator here is generic over `ClientChannel` instead; hosts plug in
//! whatever send handle their environment provides. Pushes are best-effort
//! and never block: a full or closed channel is a skip, not an error.

use orb_proto::CoordinatorMessage;
use thiserror::Error;
use tokio::sync::mpsc;

/// Why a best-effort push did not go through
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("client channel is closed")]
    Closed,
    #[error("client channel is full")]
    Full,
}

/// Coordinator-side send handle for one client
///
/// The coordinator is the sole writer. Implementations must not block.
pub trait ClientChannel: Send + 'static {
    fn try_send(&self, msg: CoordinatorMessage) -> Result<(), ChannelError>;
}

impl ClientChannel for mpsc::Sender<CoordinatorMessage> {
    fn try_send(&self, msg: CoordinatorMessage) -> Result<(), ChannelError> {
        mpsc::Sender::try_send(self, msg).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => ChannelError::Full,
            mpsc::error::TrySendError::Closed(_) => ChannelError::Closed,
        })
    }
}

impl ClientChannel for mpsc::UnboundedSender<CoordinatorMessage> {
    fn try_send(&self, msg: CoordinatorMessage) -> Result<(), ChannelError> {
        self.send(msg).map_err(|_| ChannelError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_proto::GravityVector;

    fn update() -> CoordinatorMessage {
        CoordinatorMessage::UpdateState {
            gravity: GravityVector::default(),
            neighbors: Vec::new(),
        }
    }

    #[test]
    fn bounded_sender_reports_full_and_closed() {
        let (tx, rx) = mpsc::channel(1);
        assert_eq!(ClientChannel::try_send(&tx, update()), Ok(()));
        assert_eq!(
            ClientChannel::try_send(&tx, update()),
            Err(ChannelError::Full)
        );

        drop(rx);
        assert_eq!(
            ClientChannel::try_send(&tx, update()),
            Err(ChannelError::Closed)
        );
    }

    #[test]
    fn unbounded_sender_reports_closed() {
        let (tx, rx) = mpsc::unbounded_channel();
        assert_eq!(ClientChannel::try_send(&tx, update()), Ok(()));
        drop(rx);
        assert_eq!(
            ClientChannel::try_send(&tx, update()),
            Err(ChannelError::Closed)
        );
    }
}
