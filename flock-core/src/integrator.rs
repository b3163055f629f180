//! Heading integrator: turns toward the goal vector, sets the new speed
//! and advances the position by one tick.

use crate::agent::Agent;
use crate::bounds::Bounds;
use crate::config::SteeringConfig;
use crate::vector::{acos, cos, Vector2D};

/// What one integration step did to the agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    /// Signed turning angle in `[-π, π]`
    pub diff_angle: f64,
    /// Velocity or goal had zero length, so no turn was computed
    pub degenerate: bool,
}

/// Signed angle from `velocity` to `goal`, or `None` when either vector
/// has no length.
///
/// The magnitude comes from the normalised dot product; the sign is
/// negative whenever the goal's y exceeds the velocity's y.
pub fn turning_angle(velocity: Vector2D, goal: Vector2D) -> Option<f64> {
    let norm = velocity.magnitude() * goal.magnitude();
    if norm <= 0.0 || !norm.is_finite() {
        return None;
    }

    // rounding can push the ratio a hair outside acos's domain
    let cosine = (velocity.dot(&goal) / norm).clamp(-1.0, 1.0);
    let angle = acos(cosine);

    Some(if goal.y > velocity.y { -angle } else { angle })
}

/// Apply one tick to `agent` given its goal vector.
///
/// Position is advanced with the velocity from before the turn, so a new
/// heading shows up in movement one tick later.
pub fn integrate(agent: &mut Agent, goal: Vector2D, bounds: &Bounds, config: &SteeringConfig) -> Turn {
    let velocity = agent.velocity(config);

    let turn = match turning_angle(velocity, goal) {
        Some(diff_angle) => Turn {
            diff_angle,
            degenerate: false,
        },
        None => {
            log::trace!(
                "degenerate turn (velocity {:?}, goal {:?}), holding heading",
                velocity,
                goal
            );
            Turn {
                diff_angle: 0.0,
                degenerate: true,
            }
        }
    };

    agent.speed = cos(turn.diff_angle).abs() * config.velocity_factor;
    agent.heading += turn.diff_angle * config.dt;
    agent.position = bounds.wrap(agent.position + velocity * config.dt);

    turn
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn bounds() -> Bounds {
        Bounds::new(900.0, 900.0).unwrap()
    }

    #[test]
    fn test_turning_angle_aligned_is_zero() {
        let angle = turning_angle(Vector2D::new(3.0, 0.0), Vector2D::new(10.0, 0.0)).unwrap();
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_turning_angle_sign_follows_goal_y() {
        // goal above velocity in y: negative
        let up = turning_angle(Vector2D::new(1.0, 0.0), Vector2D::new(0.0, 1.0)).unwrap();
        assert!((up + FRAC_PI_2).abs() < 1e-12);

        let down = turning_angle(Vector2D::new(1.0, 0.0), Vector2D::new(0.0, -1.0)).unwrap();
        assert!((down - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_turning_angle_reversed_is_pi() {
        let angle = turning_angle(Vector2D::new(1.0, 0.0), Vector2D::new(-5.0, 0.0)).unwrap();
        assert!((angle - PI).abs() < 1e-12);
    }

    #[test]
    fn test_turning_angle_degenerate() {
        assert!(turning_angle(Vector2D::zero(), Vector2D::new(1.0, 1.0)).is_none());
        assert!(turning_angle(Vector2D::new(1.0, 1.0), Vector2D::zero()).is_none());
    }

    #[test]
    fn test_turning_angle_survives_rounding() {
        let v = Vector2D::new(0.1, 0.2);
        let angle = turning_angle(v, v * 3.0).unwrap();
        assert!(angle.is_finite());
        assert!(angle.abs() < 1e-6);
    }

    #[test]
    fn test_integrate_zero_speed_holds_heading() {
        let config = SteeringConfig::default();
        let mut agent = Agent::new(Vector2D::new(100.0, 100.0), 0.0, 1.0);

        let turn = integrate(&mut agent, Vector2D::new(5.0, 5.0), &bounds(), &config);

        assert!(turn.degenerate);
        assert_eq!(turn.diff_angle, 0.0);
        assert_eq!(agent.heading, 1.0);
        assert_eq!(agent.speed, config.velocity_factor);
        assert_eq!(agent.position, Vector2D::new(100.0, 100.0));
    }

    #[test]
    fn test_integrate_moves_with_previous_velocity() {
        let config = SteeringConfig::default();
        let mut agent = Agent::new(Vector2D::new(300.0, 300.0), 20.0, 0.4);
        let before = agent.velocity(&config);

        let turn = integrate(&mut agent, Vector2D::new(-40.0, 90.0), &bounds(), &config);

        assert!(!turn.degenerate);
        let expected = Vector2D::new(300.0, 300.0) + before * config.dt;
        assert!((agent.position.x - expected.x).abs() < 1e-12);
        assert!((agent.position.y - expected.y).abs() < 1e-12);
        assert!((agent.heading - (0.4 + turn.diff_angle * config.dt)).abs() < 1e-12);
        assert!((agent.speed - turn.diff_angle.cos().abs() * config.velocity_factor).abs() < 1e-12);
    }
}
