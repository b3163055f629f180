use crate::error::FlockError;
use crate::vector::Vector2D;

/// Fixed extent of the toroidal plane. Valid positions are
/// `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Result<Self, FlockError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(FlockError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, position: Vector2D) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }

    /// Teleport a position that left the plane to the opposite edge.
    ///
    /// A coordinate at or past the far edge snaps to `0`; one at or below
    /// `0` snaps to just under the far edge so the result stays half-open.
    pub fn wrap(&self, position: Vector2D) -> Vector2D {
        let wrapped = Vector2D::new(
            wrap_axis(position.x, self.width),
            wrap_axis(position.y, self.height),
        );

        debug_assert!(
            self.contains(wrapped),
            "wrap produced {:?} outside {:?}",
            wrapped,
            self
        );

        if self.contains(wrapped) {
            wrapped
        } else {
            log::warn!("position {:?} escaped {:?} after wrap, clamping", wrapped, self);
            Vector2D::new(
                clamp_axis(wrapped.x, self.width),
                clamp_axis(wrapped.y, self.height),
            )
        }
    }
}

fn wrap_axis(value: f64, bound: f64) -> f64 {
    if value <= 0.0 {
        below(bound)
    } else if value >= bound {
        0.0
    } else {
        value
    }
}

fn clamp_axis(value: f64, bound: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, below(bound))
    } else {
        0.0
    }
}

/// Largest value strictly below `bound`.
fn below(bound: f64) -> f64 {
    bound * (1.0 - f64::EPSILON)
}
