#![cfg_attr(not(feature = "std"), no_std)]

//! Serialisable settings and frame snapshots exchanged with hosts.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use flock_core::{Agent, FlockError, SpawnConfig, SteeringConfig, Triangle, Vector2D};
use serde::{Deserialize, Serialize};

/// Represents a 2D position in world coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vector2D> for Position {
    fn from(v: Vector2D) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Steering tunables as they appear in a settings file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SteeringSettings {
    pub cohesion_factor: f64,
    pub separation_factor: f64,
    pub alignment_factor: f64,
    pub angle_factor: f64,
    pub vision_radius: f64,
    pub velocity_factor: f64,
    pub boid_leg: f64,
    pub boid_height: f64,
}

impl Default for SteeringSettings {
    fn default() -> Self {
        let config = SteeringConfig::default();
        Self {
            cohesion_factor: config.cohesion_factor,
            separation_factor: config.separation_factor,
            alignment_factor: config.alignment_factor,
            angle_factor: config.angle_factor,
            vision_radius: config.vision_radius,
            velocity_factor: config.velocity_factor,
            boid_leg: config.boid_leg,
            boid_height: config.boid_height,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpawnSettings {
    pub speed_min: f64,
    pub speed_max: f64,
    pub default_heading: f64,
    pub heading_jitter: f64,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        let spawn = SpawnConfig::default();
        Self {
            speed_min: spawn.speed_min,
            speed_max: spawn.speed_max,
            default_heading: spawn.default_heading,
            heading_jitter: spawn.heading_jitter,
        }
    }
}

impl From<&SpawnSettings> for SpawnConfig {
    fn from(s: &SpawnSettings) -> Self {
        Self {
            speed_min: s.speed_min,
            speed_max: s.speed_max,
            default_heading: s.default_heading,
            heading_jitter: s.heading_jitter,
        }
    }
}

/// Everything a host needs to set up and pace a simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    pub width: f64,
    pub height: f64,
    pub agent_count: usize,
    pub tick_rate_hz: f64,
    /// Fixed seed for initial placement; random when absent
    pub seed: Option<u64>,
    pub steering: SteeringSettings,
    pub spawn: SpawnSettings,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 900.0,
            agent_count: 10,
            tick_rate_hz: 60.0,
            seed: None,
            steering: SteeringSettings::default(),
            spawn: SpawnSettings::default(),
        }
    }
}

impl SimulationSettings {
    /// Core config with `dt` derived from the tick rate
    pub fn steering_config(&self) -> Result<SteeringConfig, FlockError> {
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(FlockError::InvalidConfig {
                field: "tick_rate_hz",
                reason: "must be finite and positive",
            });
        }

        let s = &self.steering;
        let config = SteeringConfig {
            cohesion_factor: s.cohesion_factor,
            separation_factor: s.separation_factor,
            alignment_factor: s.alignment_factor,
            angle_factor: s.angle_factor,
            vision_radius: s.vision_radius,
            velocity_factor: s.velocity_factor,
            dt: 1.0 / self.tick_rate_hz,
            boid_leg: s.boid_leg,
            boid_height: s.boid_height,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn spawn_config(&self) -> Result<SpawnConfig, FlockError> {
        let spawn = SpawnConfig::from(&self.spawn);
        spawn.validate()?;
        Ok(spawn)
    }

    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// One agent as the renderer saw it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentSnapshot {
    pub position: Position,
    pub heading: f64,
    pub speed: f64,
    /// Nose, left corner, right corner
    pub shape: [Position; 3],
}

impl AgentSnapshot {
    pub fn new(agent: &Agent, shape: &Triangle) -> Self {
        Self {
            position: agent.position.into(),
            heading: agent.heading,
            speed: agent.speed,
            shape: shape.vertices().map(Position::from),
        }
    }
}

/// All agents after one tick
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub agents: Vec<AgentSnapshot>,
}

impl FrameSnapshot {
    #[cfg(feature = "std")]
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
