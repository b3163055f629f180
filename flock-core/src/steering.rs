//! Steering blend: turns neighbour aggregates into one goal vector.

use crate::agent::Agent;
use crate::bounds::Bounds;
use crate::config::SteeringConfig;
use crate::sensing::{sense, NeighborSummary};
use crate::vector::Vector2D;

/// The three flocking cues before they are summed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringTerms {
    pub cohesion: Vector2D,
    pub separation: Vector2D,
    pub alignment: Vector2D,
}

impl SteeringTerms {
    /// Unnormalised goal vector; its magnitude is meaningful downstream
    pub fn total(&self) -> Vector2D {
        self.cohesion + self.separation + self.alignment
    }
}

pub fn blend(agent: &Agent, summary: &NeighborSummary, config: &SteeringConfig) -> SteeringTerms {
    let pos = agent.position;
    let count = summary.count as f64;
    let centroid = summary.centroid();

    // x scales only the agent's coordinate, y scales the whole difference
    let cohesion = Vector2D::new(
        centroid.x - pos.x * config.cohesion_factor,
        (centroid.y - pos.y) * config.cohesion_factor,
    );

    let separation = -Vector2D::new(
        summary.sum_x - pos.x * count * config.separation_factor,
        summary.sum_y - pos.y * count * config.separation_factor,
    );

    let alignment = Vector2D::from_angle(summary.mean_heading())
        * (config.angle_factor * config.alignment_factor);

    SteeringTerms {
        cohesion,
        separation,
        alignment,
    }
}

/// Goal for an agent with no neighbours: head for the middle of the world.
pub fn center_seeking(agent: &Agent, bounds: &Bounds) -> Vector2D {
    bounds.center() - agent.position
}

/// Goal vector for `agents[index]`, read against the whole collection.
pub fn goal_vector(index: usize, agents: &[Agent], bounds: &Bounds, config: &SteeringConfig) -> Vector2D {
    let agent = &agents[index];
    match sense(index, agents, bounds, config.vision_radius) {
        Some(summary) => blend(agent, &summary, config).total(),
        None => {
            log::trace!("agent {} is isolated, seeking centre", index);
            center_seeking(agent, bounds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    fn bounds() -> Bounds {
        Bounds::new(900.0, 900.0).unwrap()
    }

    #[test]
    fn test_blend_single_neighbour() {
        let config = SteeringConfig::default();
        let agent = Agent::new(Vector2D::new(400.0, 470.0), 20.0, PI);
        let summary = NeighborSummary {
            count: 1,
            sum_x: 500.0,
            sum_y: 500.0,
            sum_heading: 0.0,
        };

        let terms = blend(&agent, &summary, &config);
        assert_eq!(terms.cohesion, Vector2D::new(500.0 - 2000.0, 30.0 * 5.0));
        assert!((terms.separation.x - (-496.0)).abs() < 1e-9);
        assert!((terms.separation.y - (-495.3)).abs() < 1e-9);
        assert!((terms.alignment.x - 200.0).abs() < 1e-9);
        assert!(terms.alignment.y.abs() < 1e-9);

        let total = terms.total();
        assert!((total.x - (-1796.0)).abs() < 1e-9);
        assert!((total.y - (150.0 - 495.3)).abs() < 1e-9);
    }

    #[test]
    fn test_alignment_scales_with_both_factors() {
        let config = SteeringConfig {
            angle_factor: 0.5,
            alignment_factor: 10.0,
            ..SteeringConfig::default()
        };
        let agent = Agent::new(Vector2D::new(0.0, 0.0), 1.0, 0.0);
        let summary = NeighborSummary {
            count: 2,
            sum_x: 0.0,
            sum_y: 0.0,
            sum_heading: PI,
        };
        let alignment = blend(&agent, &summary, &config).alignment;
        // mean heading pi/2, magnitude 0.5 * 10
        assert!(alignment.x.abs() < 1e-9);
        assert!((alignment.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_isolated_agent_seeks_center() {
        let config = SteeringConfig::default();
        let agents = [Agent::new(Vector2D::new(100.0, 700.0), 20.0, 0.0)];
        let goal = goal_vector(0, &agents, &bounds(), &config);
        assert_eq!(goal, Vector2D::new(350.0, -250.0));
    }

    #[test]
    fn test_goal_vector_matches_blend_when_neighbours_exist() {
        let config = SteeringConfig::default();
        let agents = [
            Agent::new(Vector2D::new(400.0, 470.0), 20.0, PI),
            Agent::new(Vector2D::new(500.0, 500.0), 5.0, 0.0),
        ];
        let summary = sense(0, &agents, &bounds(), config.vision_radius).unwrap();
        assert_eq!(
            goal_vector(0, &agents, &bounds(), &config),
            blend(&agents[0], &summary, &config).total()
        );
    }
}
