use core::f64::consts::PI;

use crate::error::FlockError;
use crate::vector::atan;

/// Tunables for sensing, steering and integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringConfig {
    /// Scale applied in the cohesion term
    pub cohesion_factor: f64,
    /// Scale applied to the agent's own position in the separation term
    pub separation_factor: f64,
    /// Magnitude of the alignment term
    pub alignment_factor: f64,
    pub angle_factor: f64,
    pub vision_radius: f64,
    /// Speed reached when the agent needs no turn
    pub velocity_factor: f64,
    /// Fixed tick duration in seconds
    pub dt: f64,
    /// Half-width of the drawn triangle
    pub boid_leg: f64,
    /// Nose length of the drawn triangle
    pub boid_height: f64,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            cohesion_factor: 5.0,
            separation_factor: 0.01,
            alignment_factor: 200.0,
            angle_factor: 1.0,
            vision_radius: 250.0,
            velocity_factor: 100.0,
            dt: 1.0 / 60.0,
            boid_leg: 8.0,
            boid_height: 18.0,
        }
    }
}

impl SteeringConfig {
    /// Angle between `heading` and the direction of travel, fixed by the
    /// triangle's proportions.
    pub fn heading_offset(&self) -> f64 {
        PI + atan(self.boid_height / self.boid_leg)
    }

    pub fn validate(&self) -> Result<(), FlockError> {
        finite("cohesion_factor", self.cohesion_factor)?;
        finite("separation_factor", self.separation_factor)?;
        finite("alignment_factor", self.alignment_factor)?;
        finite("angle_factor", self.angle_factor)?;
        positive("vision_radius", self.vision_radius)?;
        positive("dt", self.dt)?;
        positive("boid_leg", self.boid_leg)?;
        positive("boid_height", self.boid_height)?;
        finite("velocity_factor", self.velocity_factor)?;
        if self.velocity_factor < 0.0 {
            return Err(FlockError::InvalidConfig {
                field: "velocity_factor",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

/// How agents are placed when a world is filled at random
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnConfig {
    pub speed_min: f64,
    pub speed_max: f64,
    pub default_heading: f64,
    /// Headings are drawn from `default_heading ± heading_jitter`
    pub heading_jitter: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            speed_min: 15.0,
            speed_max: 25.0,
            default_heading: PI,
            heading_jitter: 1.0,
        }
    }
}

/// Largest spawn magnitude whose sampling range stays finite
const SPAWN_LIMIT: f64 = f64::MAX / 4.0;

impl SpawnConfig {
    pub fn validate(&self) -> Result<(), FlockError> {
        sampleable("speed_min", self.speed_min)?;
        sampleable("speed_max", self.speed_max)?;
        sampleable("default_heading", self.default_heading)?;
        sampleable("heading_jitter", self.heading_jitter)?;
        if self.speed_min < 0.0 {
            return Err(FlockError::InvalidConfig {
                field: "speed_min",
                reason: "must not be negative",
            });
        }
        if self.speed_max < self.speed_min {
            return Err(FlockError::InvalidConfig {
                field: "speed_max",
                reason: "must be at least speed_min",
            });
        }
        if self.heading_jitter < 0.0 {
            return Err(FlockError::InvalidConfig {
                field: "heading_jitter",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), FlockError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FlockError::InvalidConfig {
            field,
            reason: "must be finite",
        })
    }
}

fn sampleable(field: &'static str, value: f64) -> Result<(), FlockError> {
    finite(field, value)?;
    if value.abs() <= SPAWN_LIMIT {
        Ok(())
    } else {
        Err(FlockError::InvalidConfig {
            field,
            reason: "is too large to sample from",
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), FlockError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(FlockError::InvalidConfig {
            field,
            reason: "must be positive",
        })
    }
}
