//! Orbfield Protocol
//!
//! The message contract between the coordinator and its clients. One module
//! holds the whole vocabulary: inbound client messages (heartbeat, particle
//! exit), outbound coordinator pushes (state updates, particle spawns), and
//! the particle transfer payload with its opaque cosmetic metadata.
//!
//! The coordinator never interprets cosmetic metadata; it only forwards it.

use orb_core::{ClientId, Rect};
use serde::{Deserialize, Serialize};

/// Protocol version
pub const PROTOCOL_VERSION: u32 = 1;

/// Cosmetic particle behavior modes
///
/// A closed set dispatched by explicit match on the client side. The
/// coordinator carries the tag through transfers untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    Orbit,
    Swirl,
    Scatter,
    Pulse,
}

/// A particle's transfer payload: exit point in the sender's local frame
/// (or spawn point in the destination's local frame), velocity, and
/// presentation metadata forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferPayload {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<Behavior>,
    /// Phase offset driving the client-side animation cycle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Color hue in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<f32>,
}

/// Accumulated pseudo-gravitational force on a client for one tick
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GravityVector {
    pub x: f64,
    pub y: f64,
}

/// Relative-position descriptor for one live sibling, recomputed every tick
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborVector {
    pub id: ClientId,
    /// Center-to-center displacement, sibling minus self
    pub dx: f64,
    pub dy: f64,
    /// Euclidean distance between centers
    pub dist: f64,
}

/// Messages from a client to the coordinator
///
/// Connect and disconnect are implicit in the channel lifecycle and carry no
/// payload of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// Periodic report of the window's absolute screen-space bounds
    Heartbeat { bounds: Rect },
    /// A particle crossed the window's local boundary at the given point
    ParticleExit(TransferPayload),
}

/// Messages pushed from the coordinator to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CoordinatorMessage {
    /// Per-tick gravity force and neighbor vectors for this client
    UpdateState {
        gravity: GravityVector,
        neighbors: Vec<NeighborVector>,
    },
    /// A particle routed from a sibling window, in this client's local frame
    SpawnParticle(TransferPayload),
}
