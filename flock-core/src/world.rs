//! World containers and the tick driver.
//!
//! A tick runs in two phases: every goal vector is computed against the
//! previous tick's state, then each agent is integrated. No agent sees a
//! neighbour's position from the tick in progress.

#[cfg(feature = "std")]
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::agent::Agent;
use crate::bounds::Bounds;
#[cfg(feature = "std")]
use crate::config::SpawnConfig;
use crate::config::SteeringConfig;
use crate::error::FlockError;
use crate::integrator::integrate;
use crate::steering::goal_vector;
use crate::vector::Vector2D;

fn integrate_all(agents: &mut [Agent], goals: &[Vector2D], bounds: &Bounds, config: &SteeringConfig) {
    for (agent, goal) in agents.iter_mut().zip(goals.iter()) {
        integrate(agent, *goal, bounds, config);
    }
}

/// A fixed-capacity world for embedded (no_std) environments
pub struct FixedWorld<const N: usize> {
    bounds: Bounds,
    config: SteeringConfig,
    agents: heapless::Vec<Agent, N>,
    tick: u64,
}

impl<const N: usize> FixedWorld<N> {
    pub fn new(width: f64, height: f64, config: SteeringConfig) -> Result<Self, FlockError> {
        let bounds = Bounds::new(width, height)?;
        config.validate()?;
        Ok(Self {
            bounds,
            config,
            agents: heapless::Vec::new(),
            tick: 0,
        })
    }

    /// Add an agent while populating the world
    pub fn push_agent(&mut self, agent: Agent) -> Result<(), FlockError> {
        self.agents
            .push(agent)
            .map_err(|_| FlockError::CapacityExceeded { capacity: N })
    }

    pub fn advance_tick(&mut self) {
        // one goal per agent, and the agent list is itself capped at N
        let goals: heapless::Vec<Vector2D, N> = (0..self.agents.len())
            .map(|i| goal_vector(i, &self.agents, &self.bounds, &self.config))
            .collect();

        integrate_all(&mut self.agents, &goals, &self.bounds, &self.config);
        self.tick += 1;
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &SteeringConfig {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}

/// The simulation world: bounds plus a fixed population of agents
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct World {
    bounds: Bounds,
    config: SteeringConfig,
    agents: Vec<Agent>,
    tick: u64,
}

#[cfg(feature = "std")]
impl World {
    /// Random world with default tunables
    pub fn new(width: f64, height: f64, count: usize) -> Result<Self, FlockError> {
        Self::new_with_config(
            width,
            height,
            count,
            SteeringConfig::default(),
            SpawnConfig::default(),
            &mut rand::thread_rng(),
        )
    }

    pub fn new_with_config<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        count: usize,
        config: SteeringConfig,
        spawn: SpawnConfig,
        rng: &mut R,
    ) -> Result<Self, FlockError> {
        let bounds = Bounds::new(width, height)?;
        spawn.validate()?;
        let agents = (0..count)
            .map(|_| Agent::random(&bounds, &spawn, rng))
            .collect();
        Self::with_agents(width, height, agents, config)
    }

    /// World with an explicit starting population
    pub fn with_agents(
        width: f64,
        height: f64,
        agents: Vec<Agent>,
        config: SteeringConfig,
    ) -> Result<Self, FlockError> {
        let bounds = Bounds::new(width, height)?;
        config.validate()?;

        log::debug!(
            "world {}x{} created with {} agents",
            bounds.width,
            bounds.height,
            agents.len()
        );

        Ok(Self {
            bounds,
            config,
            agents,
            tick: 0,
        })
    }

    /// Goal vector of every agent against the current state
    pub fn goal_vectors(&self) -> Vec<Vector2D> {
        #[cfg(feature = "parallel")]
        {
            (0..self.agents.len())
                .into_par_iter()
                .map(|i| goal_vector(i, &self.agents, &self.bounds, &self.config))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.agents.len())
                .map(|i| goal_vector(i, &self.agents, &self.bounds, &self.config))
                .collect()
        }
    }

    pub fn advance_tick(&mut self) {
        let goals = self.goal_vectors();
        integrate_all(&mut self.agents, &goals, &self.bounds, &self.config);
        self.tick += 1;
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &SteeringConfig {
        &self.config
    }

    /// Ticks completed so far
    pub fn tick(&self) -> u64 {
        self.tick
    }
}
