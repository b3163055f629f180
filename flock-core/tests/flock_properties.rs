use core::f64::consts::{PI, TAU};

use flock_core::{
    goal_vector, is_close, Agent, Bounds, SpawnConfig, SteeringConfig, Vector2D, World,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 900.0;

fn seeded_world(seed: u64, count: usize) -> World {
    let mut rng = SmallRng::seed_from_u64(seed);
    World::new_with_config(
        WIDTH,
        HEIGHT,
        count,
        SteeringConfig::default(),
        SpawnConfig::default(),
        &mut rng,
    )
    .unwrap()
}

/// Heading whose direction of travel is `theta`
fn heading_for(theta: f64, config: &SteeringConfig) -> f64 {
    theta - config.heading_offset()
}

#[test]
fn positions_stay_in_bounds_every_tick() {
    for seed in [1, 2, 3, 0xF10C] {
        let mut world = seeded_world(seed, 40);
        for _ in 0..600 {
            world.advance_tick();
            let bounds = *world.bounds();
            for agent in world.agents() {
                assert!(
                    bounds.contains(agent.position),
                    "seed {seed} tick {}: {:?} escaped",
                    world.tick(),
                    agent.position
                );
            }
        }
    }
}

#[test]
fn speed_never_exceeds_velocity_factor() {
    let mut world = seeded_world(99, 30);
    let limit = world.config().velocity_factor;
    for _ in 0..600 {
        world.advance_tick();
        for agent in world.agents() {
            assert!(agent.speed >= 0.0 && agent.speed <= limit, "speed {}", agent.speed);
        }
    }
}

#[test]
fn crossing_far_edge_reappears_near_zero() {
    let config = SteeringConfig::default();
    let agent = Agent::new(
        Vector2D::new(WIDTH - 0.001, 450.0),
        20.0,
        heading_for(0.0, &config),
    );
    let mut world = World::with_agents(WIDTH, HEIGHT, vec![agent], config).unwrap();

    world.advance_tick();

    let p = world.agents()[0].position;
    assert!(p.x >= 0.0 && p.x < 1.0, "x = {}", p.x);
    assert!(world.bounds().contains(p));
}

#[test]
fn crossing_zero_reappears_near_far_edge() {
    let config = SteeringConfig::default();
    let agent = Agent::new(
        Vector2D::new(450.0, 0.001),
        20.0,
        heading_for(1.5 * PI, &config),
    );
    let mut world = World::with_agents(WIDTH, HEIGHT, vec![agent], config).unwrap();

    world.advance_tick();

    let p = world.agents()[0].position;
    assert!(p.y > HEIGHT - 1.0 && p.y < HEIGHT, "y = {}", p.y);
}

#[test]
fn close_predicate_is_order_independent() {
    let bounds = Bounds::new(WIDTH, HEIGHT).unwrap();
    let mut rng = SmallRng::seed_from_u64(0xC105E);
    for _ in 0..2000 {
        let a = Agent::new(
            Vector2D::new(rng.gen_range(0.0..WIDTH), rng.gen_range(0.0..HEIGHT)),
            1.0,
            0.0,
        );
        let b = Agent::new(
            Vector2D::new(rng.gen_range(0.0..WIDTH), rng.gen_range(0.0..HEIGHT)),
            1.0,
            0.0,
        );
        assert_eq!(is_close(&a, &b, &bounds, 250.0), is_close(&b, &a, &bounds, 250.0));
    }
}

#[test]
fn agents_see_each_other_across_the_edge() {
    let config = SteeringConfig::default();
    let agents = vec![
        Agent::new(Vector2D::new(5.0, 450.0), 20.0, 0.0),
        Agent::new(Vector2D::new(895.0, 450.0), 20.0, 0.0),
    ];
    let bounds = Bounds::new(WIDTH, HEIGHT).unwrap();
    let goal = goal_vector(0, &agents, &bounds, &config);
    assert_ne!(goal, bounds.center() - agents[0].position);
}

#[test]
fn isolated_agent_always_seeks_center() {
    let config = SteeringConfig {
        vision_radius: 50.0,
        ..SteeringConfig::default()
    };
    let agent = Agent::new(Vector2D::new(120.0, 640.0), 20.0, 2.0);
    let mut world = World::with_agents(WIDTH, HEIGHT, vec![agent], config).unwrap();

    for _ in 0..300 {
        let p = world.agents()[0].position;
        let goal = world.goal_vectors()[0];
        assert_eq!(goal, Vector2D::new(WIDTH / 2.0 - p.x, HEIGHT / 2.0 - p.y));
        world.advance_tick();
    }
}

#[test]
fn ticking_is_deterministic() {
    let start = seeded_world(0xD5, 25);
    let mut a = start.clone();
    let mut b = start;
    for _ in 0..240 {
        a.advance_tick();
        b.advance_tick();
    }
    assert_eq!(a.agents(), b.agents());
}

#[test]
fn two_agent_scenario_turns_and_sets_speed() {
    let config = SteeringConfig::default();
    let a = Agent::new(Vector2D::new(400.0, 470.0), 20.0, PI);
    let b = Agent::new(Vector2D::new(500.0, 500.0), 5.0, 0.0);
    let mut world = World::with_agents(WIDTH, HEIGHT, vec![a, b], config).unwrap();

    world.advance_tick();

    // recompute A's turn by hand
    let theta = (PI + PI + (18.0f64 / 8.0).atan()).rem_euclid(TAU);
    let (vx, vy) = (20.0 * theta.cos(), 20.0 * theta.sin());
    let cohesion = (500.0 - 400.0 * 5.0, (500.0 - 470.0) * 5.0);
    let separation = (-(500.0 - 400.0 * 0.01), -(500.0 - 470.0 * 0.01));
    let alignment = (200.0, 0.0);
    let tx = cohesion.0 + separation.0 + alignment.0;
    let ty = cohesion.1 + separation.1 + alignment.1;
    let mut diff = ((vx * tx + vy * ty) / ((vx * vx + vy * vy).sqrt() * (tx * tx + ty * ty).sqrt())).acos();
    if ty > vy {
        diff = -diff;
    }

    let moved = world.agents()[0];
    assert!((moved.heading - PI).abs() > 1e-6);
    assert!((moved.heading - (PI + diff * config.dt)).abs() < 1e-9);
    assert!((moved.speed - diff.cos().abs() * config.velocity_factor).abs() < 1e-9);
    assert!((moved.position.x - (400.0 + vx * config.dt)).abs() < 1e-9);
    assert!((moved.position.y - (470.0 + vy * config.dt)).abs() < 1e-9);
}
