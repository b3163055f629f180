#[cfg(feature = "std")]
use rand::Rng;

use core::f64::consts::TAU;

use crate::config::SteeringConfig;
#[cfg(feature = "std")]
use crate::{bounds::Bounds, config::SpawnConfig};
use crate::vector::{rem_euclid, Vector2D};

/// Kinematic state of a single boid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    pub position: Vector2D,
    /// Magnitude of the current velocity, never negative
    pub speed: f64,
    /// Radians. Accumulates without wrapping; reduce at read time.
    pub heading: f64,
}

impl Agent {
    pub fn new(position: Vector2D, speed: f64, heading: f64) -> Self {
        Self {
            position,
            speed,
            heading,
        }
    }

    #[cfg(feature = "std")]
    pub fn random<R: Rng + ?Sized>(bounds: &Bounds, spawn: &SpawnConfig, rng: &mut R) -> Self {
        let position = Vector2D::new(
            rng.gen_range(0.0..bounds.width),
            rng.gen_range(0.0..bounds.height),
        );
        let speed = rng.gen_range(spawn.speed_min..=spawn.speed_max);
        let heading =
            spawn.default_heading + rng.gen_range(-spawn.heading_jitter..=spawn.heading_jitter);
        Self::new(position, speed, heading)
    }

    /// Direction of travel in `[0, 2π)`
    pub fn corrected_theta(&self, config: &SteeringConfig) -> f64 {
        rem_euclid(self.heading + config.heading_offset(), TAU)
    }

    pub fn velocity(&self, config: &SteeringConfig) -> Vector2D {
        Vector2D::from_angle(self.corrected_theta(config)) * self.speed
    }

    pub fn distance_vector(&self, other: &Agent) -> Vector2D {
        self.position - other.position
    }
}
