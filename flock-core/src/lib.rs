#![cfg_attr(not(feature = "std"), no_std)]

//! Flocking boids on a toroidal plane.
//!
//! Each tick every agent senses its neighbours (directly or across the
//! wrapping edges), blends cohesion, separation and alignment into a goal
//! vector, then turns toward it and moves. Drawing, timing and input belong
//! to the host; see [`render::Renderer`].

pub mod agent;
pub mod bounds;
pub mod config;
pub mod error;
pub mod integrator;
pub mod render;
pub mod sensing;
pub mod steering;
pub mod vector;
pub mod world;

pub use agent::Agent;
pub use bounds::Bounds;
pub use config::{SpawnConfig, SteeringConfig};
pub use error::FlockError;
pub use integrator::{integrate, turning_angle, Turn};
pub use render::{draw_agents, triangle, Renderer, Triangle};
pub use sensing::{is_close, sense, wrap_distance, NeighborSummary, WrapDistance};
pub use steering::{blend, center_seeking, goal_vector, SteeringTerms};
pub use vector::Vector2D;
pub use world::FixedWorld;
#[cfg(feature = "std")]
pub use world::World;
