use thiserror::Error;

/// Errors raised while setting up a simulation.
///
/// Ticking never fails: degenerate geometry has a defined fallback and
/// the wrap invariant is enforced in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlockError {
    #[error("world bounds must be finite and positive, got {width} x {height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("invalid `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("world is full ({capacity} agents)")]
    CapacityExceeded { capacity: usize },
}
