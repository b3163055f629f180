//! 2D vector type and the float functions the simulation needs.
//!
//! With `std` the inherent `f64` methods are used; without it the calls
//! are routed through `libm`.

/// A 2D vector used for positions, velocities and goal vectors
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing along `angle` (radians)
    pub fn from_angle(angle: f64) -> Self {
        Self {
            x: cos(angle),
            y: sin(angle),
        }
    }

    pub fn magnitude(&self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

#[inline]
pub(crate) fn sqrt(v: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        v.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrt(v)
    }
}

#[inline]
pub(crate) fn cos(v: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        v.cos()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::cos(v)
    }
}

#[inline]
pub(crate) fn sin(v: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        v.sin()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sin(v)
    }
}

#[inline]
pub(crate) fn acos(v: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        v.acos()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::acos(v)
    }
}

#[inline]
pub(crate) fn atan(v: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        v.atan()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::atan(v)
    }
}

/// `v` reduced into `[0, modulus)`
#[inline]
pub(crate) fn rem_euclid(v: f64, modulus: f64) -> f64 {
    let r = libm::fmod(v, modulus);
    let r = if r < 0.0 { r + modulus } else { r };
    // `r + modulus` can round up to `modulus` itself for tiny negative `r`
    if r >= modulus {
        0.0
    } else {
        r
    }
}
