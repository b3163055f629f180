//! Neighbour sensing.
//!
//! Every other agent is checked exhaustively each tick. An agent is "close"
//! when the direct distance is inside the vision radius, or when either
//! per-axis wrap-around distance is. The per-axis test is looser than a
//! real toroidal metric and the flock's emergent shape depends on it.

use crate::agent::Agent;
use crate::bounds::Bounds;
use crate::vector::Vector2D;

/// Distance along each axis measured across the wrapping edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapDistance {
    pub horizontal: f64,
    pub vertical: f64,
}

/// `bound - max + min` on each axis, with no `min` against the direct
/// distance: that would make every agent in the same column a neighbour.
pub fn wrap_distance(a: Vector2D, b: Vector2D, bounds: &Bounds) -> WrapDistance {
    WrapDistance {
        horizontal: bounds.width - a.x.max(b.x) + a.x.min(b.x),
        vertical: bounds.height - a.y.max(b.y) + a.y.min(b.y),
    }
}

pub fn is_close(a: &Agent, b: &Agent, bounds: &Bounds, radius: f64) -> bool {
    if a.distance_vector(b).magnitude() < radius {
        return true;
    }
    let wrap = wrap_distance(a.position, b.position, bounds);
    wrap.horizontal < radius || wrap.vertical < radius
}

/// Aggregates over every close neighbour of one agent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NeighborSummary {
    pub count: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_heading: f64,
}

impl NeighborSummary {
    fn add(&mut self, other: &Agent) {
        self.count += 1;
        self.sum_x += other.position.x;
        self.sum_y += other.position.y;
        self.sum_heading += other.heading;
    }

    pub fn centroid(&self) -> Vector2D {
        Vector2D::new(self.sum_x, self.sum_y) / self.count as f64
    }

    pub fn mean_heading(&self) -> f64 {
        self.sum_heading / self.count as f64
    }
}

/// Summarise the neighbours of `agents[index]`, or `None` if it has none.
///
/// The agent itself is skipped by index, so two agents sharing a position
/// still see each other.
pub fn sense(index: usize, agents: &[Agent], bounds: &Bounds, radius: f64) -> Option<NeighborSummary> {
    let agent = &agents[index];
    let mut summary = NeighborSummary::default();

    for (j, other) in agents.iter().enumerate() {
        if j != index && is_close(agent, other, bounds, radius) {
            summary.add(other);
        }
    }

    (summary.count > 0).then_some(summary)
}
