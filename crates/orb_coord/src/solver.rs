//! Gravity field solver
//!
//! All-pairs pseudo-gravity over one registry snapshot. Quadratic per tick,
//! accepted because the expected client count is single-digit to low tens
//! and the tick must stay responsive to window movement.

use orb_core::{ClientId, Rect};
use orb_proto::{GravityVector, NeighborVector};

/// Centers closer than this are treated as coincident
pub const COINCIDENT_EPSILON: f64 = 1e-9;

/// Solver tunables. The absolute values shape the visuals, not physics.
#[derive(Debug, Clone, Copy)]
pub struct SolverParams {
    /// Pseudo-gravitational constant K in `magnitude = K / dist²`
    pub gravity_k: f64,
    /// Minimum effective center distance; dist² is floored to this squared
    /// before computing magnitude, so overlapping windows cannot explode
    pub min_distance: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            gravity_k: 500_000.0,
            min_distance: 100.0,
        }
    }
}

/// Per-client output of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct ForceUpdate {
    pub id: ClientId,
    pub gravity: GravityVector,
    pub neighbors: Vec<NeighborVector>,
}

/// Everything one tick computed from a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct TickForces {
    pub updates: Vec<ForceUpdate>,
    /// Ordered pairs whose centers were coincident this tick
    pub degenerate_pairs: u64,
}

/// Run one solver tick over a registry snapshot.
///
/// For every ordered pair (source, target) the target pulls the source with
/// `K / max(dist², min_distance²)` along the center-to-center direction.
/// Coincident centers have no direction; such pairs contribute the floor
/// magnitude along a fixed +x axis so the force is finite and deterministic,
/// and are reported in `degenerate_pairs`.
pub fn solve(snapshot: &[(ClientId, Rect)], params: &SolverParams) -> TickForces {
    let min_dist_sq = params.min_distance * params.min_distance;
    let mut degenerate_pairs = 0u64;

    let updates = snapshot
        .iter()
        .map(|&(source_id, source_rect)| {
            let source_center = source_rect.center();
            let mut fx = 0.0;
            let mut fy = 0.0;
            let mut neighbors = Vec::with_capacity(snapshot.len().saturating_sub(1));

            for &(target_id, target_rect) in snapshot {
                if target_id == source_id {
                    continue;
                }

                let delta = target_rect.center() - source_center;
                let dist_sq = delta.length_squared();
                let dist = dist_sq.sqrt();

                let magnitude = params.gravity_k / dist_sq.max(min_dist_sq);
                if dist < COINCIDENT_EPSILON {
                    // No direction to pull along; use the fixed +x axis
                    degenerate_pairs += 1;
                    fx += magnitude;
                } else {
                    fx += (delta.x / dist) * magnitude;
                    fy += (delta.y / dist) * magnitude;
                }

                neighbors.push(NeighborVector {
                    id: target_id,
                    dx: delta.x,
                    dy: delta.y,
                    dist,
                });
            }

            ForceUpdate {
                id: source_id,
                gravity: GravityVector { x: fx, y: fy },
                neighbors,
            }
        })
        .collect();

    TickForces {
        updates,
        degenerate_pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: Rect, b: Rect) -> Vec<(ClientId, Rect)> {
        vec![(ClientId(1), a), (ClientId(2), b)]
    }

    fn magnitude(g: GravityVector) -> f64 {
        (g.x * g.x + g.y * g.y).sqrt()
    }

    #[test]
    fn force_follows_inverse_square_beyond_floor() {
        // A centered at (400,300), B at (1600,300): dist 1200 along +x
        let snapshot = pair(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Rect::new(1200.0, 0.0, 800.0, 600.0),
        );
        let forces = solve(&snapshot, &SolverParams::default());

        let expected = 500_000.0 / (1200.0 * 1200.0);
        let a = &forces.updates[0];
        assert!((a.gravity.x - expected).abs() < 1e-12);
        assert_eq!(a.gravity.y, 0.0);

        // Equal magnitude, opposite direction on B
        let b = &forces.updates[1];
        assert!((b.gravity.x + expected).abs() < 1e-12);
        assert_eq!(b.gravity.y, 0.0);

        assert_eq!(forces.degenerate_pairs, 0);
    }

    #[test]
    fn neighbor_vectors_cover_every_other_client() {
        let snapshot = vec![
            (ClientId(1), Rect::new(0.0, 0.0, 100.0, 100.0)),
            (ClientId(2), Rect::new(500.0, 0.0, 100.0, 100.0)),
            (ClientId(3), Rect::new(0.0, 500.0, 100.0, 100.0)),
        ];
        let forces = solve(&snapshot, &SolverParams::default());

        let first = &forces.updates[0];
        assert_eq!(first.id, ClientId(1));
        // Registry order, source excluded
        let ids: Vec<_> = first.neighbors.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![ClientId(2), ClientId(3)]);

        let n = &first.neighbors[0];
        assert_eq!((n.dx, n.dy), (500.0, 0.0));
        assert_eq!(n.dist, 500.0);
    }

    #[test]
    fn distance_floor_caps_magnitude() {
        // Centers 50 apart, inside the 100-unit floor
        let snapshot = pair(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(50.0, 0.0, 100.0, 100.0),
        );
        let forces = solve(&snapshot, &SolverParams::default());

        let g = forces.updates[0].gravity;
        assert!((magnitude(g) - 50.0).abs() < 1e-12);
        assert!(g.x > 0.0 && g.y == 0.0);
        assert_eq!(forces.degenerate_pairs, 0);
    }

    #[test]
    fn coincident_centers_stay_finite_at_floor_magnitude() {
        let rect = Rect::new(100.0, 100.0, 400.0, 400.0);
        let snapshot = pair(rect, rect);
        let forces = solve(&snapshot, &SolverParams::default());

        for update in &forces.updates {
            let g = update.gravity;
            assert!(g.x.is_finite() && g.y.is_finite());
            assert!((magnitude(g) - 50.0).abs() < 1e-12);
            assert_eq!(update.neighbors[0].dist, 0.0);
        }
        assert_eq!(forces.degenerate_pairs, 2);
    }

    #[test]
    fn zero_size_rects_do_not_break_the_solver() {
        let snapshot = pair(
            Rect::new(0.0, 0.0, 0.0, 0.0),
            Rect::new(0.0, 0.0, -50.0, -50.0),
        );
        let forces = solve(&snapshot, &SolverParams::default());

        for update in &forces.updates {
            assert!(update.gravity.x.is_finite());
            assert!(update.gravity.y.is_finite());
        }
    }

    #[test]
    fn single_client_feels_nothing() {
        let snapshot = vec![(ClientId(1), Rect::new(0.0, 0.0, 800.0, 600.0))];
        let forces = solve(&snapshot, &SolverParams::default());

        assert_eq!(forces.updates[0].gravity, GravityVector::default());
        assert!(forces.updates[0].neighbors.is_empty());
    }
}
