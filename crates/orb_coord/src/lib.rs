//! Orbfield Coordinator
//!
//! The cross-window spatial coordination core:
//! - Client registry (sessions and their reported screen bounds)
//! - Gravity field solver (all-pairs forces on a fixed tick)
//! - Particle transfer router (boundary exits to containing siblings)
//! - Session protocol driven by a single tokio event loop
//!
//! Presentation concerns (rendering, audio reactivity, window management)
//! live in the hosts; this crate only coordinates geometry and messages.

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod registry;
pub mod router;
pub mod session;
pub mod solver;

pub use channel::{ChannelError, ClientChannel};
pub use config::CoordinatorConfig;
pub use coordinator::{Command, Coordinator, CoordinatorClosed, CoordinatorHandle};
pub use registry::Registry;
pub use router::{resolve, RoutedTransfer};
pub use session::{ClientSession, SessionState};
pub use solver::{solve, ForceUpdate, SolverParams, TickForces};
