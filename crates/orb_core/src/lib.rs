//! Orbfield Core
//!
//! Shared primitives for the cross-window coordinator:
//! - Client identity
//! - Screen-space geometry
//! - Solver tick timing

pub mod rect;
pub mod time;

pub use rect::Rect;

pub use glam;

use serde::{Deserialize, Serialize};

/// Coordinator version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client session ID (one per connected window/tab)
///
/// Assigned by the coordinator from a monotonic counter; never reused while
/// the coordinator is running.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClientId(pub u64);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "client-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn client_ids_order_by_value() {
        assert!(ClientId(1) < ClientId(2));
        assert_eq!(ClientId(7).to_string(), "client-7");
    }
}
