//! Drawable shape of an agent and the seam to whatever draws it.

use crate::agent::Agent;
use crate::config::SteeringConfig;
use crate::vector::{cos, sin, Vector2D};

/// Isosceles triangle with its nose on the agent's position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub nose: Vector2D,
    pub left: Vector2D,
    pub right: Vector2D,
}

impl Triangle {
    pub fn vertices(&self) -> [Vector2D; 3] {
        [self.nose, self.left, self.right]
    }
}

/// Base corners are `(∓boid_leg, boid_height)` rotated by the heading.
pub fn triangle(agent: &Agent, config: &SteeringConfig) -> Triangle {
    let (s, c) = (sin(agent.heading), cos(agent.heading));
    let corner = |leg: f64| {
        Vector2D::new(
            leg * c - config.boid_height * s,
            leg * s + config.boid_height * c,
        ) + agent.position
    };

    Triangle {
        nose: agent.position,
        left: corner(-config.boid_leg),
        right: corner(config.boid_leg),
    }
}

/// Consumer of agent shapes, one frame at a time
pub trait Renderer {
    type Error;

    fn begin_frame(&mut self, tick: u64) -> Result<(), Self::Error>;
    fn draw(&mut self, agent: &Agent, shape: &Triangle) -> Result<(), Self::Error>;
    fn end_frame(&mut self) -> Result<(), Self::Error>;
}

/// Draw a whole frame through `renderer`
pub fn draw_agents<R: Renderer>(
    tick: u64,
    agents: &[Agent],
    config: &SteeringConfig,
    renderer: &mut R,
) -> Result<(), R::Error> {
    renderer.begin_frame(tick)?;
    for agent in agents {
        renderer.draw(agent, &triangle(agent, config))?;
    }
    renderer.end_frame()
}
