//! Particle transfer router
//!
//! Resolves a particle's exit point from one client's local frame to absolute
//! screen space and finds the sibling window that contains it. First match in
//! registry order wins; there is no distance tie-break when windows overlap.
//! Rects are as last reported, so the containment test may lag true window
//! position by up to one heartbeat period.

use orb_core::{glam::DVec2, ClientId, Rect};
use orb_proto::TransferPayload;

/// A routed transfer: destination client plus the payload rewritten into the
/// destination's local frame. Velocity and cosmetic metadata are untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedTransfer {
    pub dest: ClientId,
    pub payload: TransferPayload,
}

/// Find the receiving client for a particle exiting `sender`.
///
/// Returns None when the sender is gone from the snapshot or no sibling
/// contains the absolute exit point; the particle is lost either way and the
/// caller absorbs that silently (fire-and-forget).
pub fn resolve(
    snapshot: &[(ClientId, Rect)],
    sender: ClientId,
    payload: &TransferPayload,
) -> Option<RoutedTransfer> {
    let (_, sender_rect) = snapshot.iter().find(|(id, _)| *id == sender)?;

    let abs = DVec2::new(sender_rect.x + payload.x, sender_rect.y + payload.y);

    let (dest, dest_rect) = snapshot
        .iter()
        .find(|(id, rect)| *id != sender && rect.contains(abs))?;

    Some(RoutedTransfer {
        dest: *dest,
        payload: TransferPayload {
            x: abs.x - dest_rect.x,
            y: abs.y - dest_rect.y,
            ..payload.clone()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_proto::Behavior;

    fn exit_at(x: f64, y: f64) -> TransferPayload {
        TransferPayload {
            x,
            y,
            vx: 5.0,
            vy: 0.0,
            behavior: Some(Behavior::Orbit),
            offset: Some(0.5),
            hue: Some(120.0),
        }
    }

    #[test]
    fn delivers_across_a_shared_edge() {
        // A and B adjacent, touching at x=800
        let snapshot = vec![
            (ClientId(1), Rect::new(0.0, 0.0, 800.0, 600.0)),
            (ClientId(2), Rect::new(800.0, 0.0, 800.0, 600.0)),
        ];

        let routed = resolve(&snapshot, ClientId(1), &exit_at(800.0, 300.0))
            .expect("adjacent window should receive the particle");

        assert_eq!(routed.dest, ClientId(2));
        assert_eq!((routed.payload.x, routed.payload.y), (0.0, 300.0));
        // Velocity and metadata pass through unchanged
        assert_eq!((routed.payload.vx, routed.payload.vy), (5.0, 0.0));
        assert_eq!(routed.payload.behavior, Some(Behavior::Orbit));
        assert_eq!(routed.payload.hue, Some(120.0));
    }

    #[test]
    fn first_match_wins_when_windows_overlap() {
        let snapshot = vec![
            (ClientId(1), Rect::new(0.0, 0.0, 100.0, 100.0)),
            (ClientId(2), Rect::new(100.0, 0.0, 200.0, 200.0)),
            (ClientId(3), Rect::new(100.0, 0.0, 400.0, 400.0)),
        ];

        let routed = resolve(&snapshot, ClientId(1), &exit_at(150.0, 50.0)).unwrap();
        assert_eq!(routed.dest, ClientId(2));
    }

    #[test]
    fn sender_never_receives_its_own_particle() {
        // Sender's rect contains the exit point, but only siblings count
        let snapshot = vec![
            (ClientId(1), Rect::new(0.0, 0.0, 800.0, 600.0)),
            (ClientId(2), Rect::new(400.0, 0.0, 800.0, 600.0)),
        ];

        let routed = resolve(&snapshot, ClientId(1), &exit_at(500.0, 300.0)).unwrap();
        assert_eq!(routed.dest, ClientId(2));
        assert_eq!((routed.payload.x, routed.payload.y), (100.0, 300.0));
    }

    #[test]
    fn drops_when_no_window_contains_the_point() {
        let snapshot = vec![
            (ClientId(1), Rect::new(0.0, 0.0, 800.0, 600.0)),
            (ClientId(2), Rect::new(2000.0, 0.0, 800.0, 600.0)),
        ];

        assert_eq!(resolve(&snapshot, ClientId(1), &exit_at(900.0, 300.0)), None);
    }

    #[test]
    fn drops_when_sender_disconnected_mid_flight() {
        let snapshot = vec![(ClientId(2), Rect::new(0.0, 0.0, 800.0, 600.0))];
        assert_eq!(resolve(&snapshot, ClientId(1), &exit_at(10.0, 10.0)), None);
    }

    #[test]
    fn sender_offset_shifts_the_absolute_point() {
        let snapshot = vec![
            (ClientId(1), Rect::new(100.0, 200.0, 300.0, 300.0)),
            (ClientId(2), Rect::new(400.0, 200.0, 300.0, 300.0)),
        ];

        // Local (300, 150) -> absolute (400, 350) -> B-local (0, 150)
        let routed = resolve(&snapshot, ClientId(1), &exit_at(300.0, 150.0)).unwrap();
        assert_eq!(routed.dest, ClientId(2));
        assert_eq!((routed.payload.x, routed.payload.y), (0.0, 150.0));
    }
}
