use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Depth given to points built from two components.
///
/// Scenes drawn on the XY plane sit at this depth.
pub const PLANE_DEPTH: f32 = -1.0;

fn plane_depth() -> f32 {
    PLANE_DEPTH
}

/// A point or free vector with three `f32` components.
///
/// Whether a value is a point or a direction is decided by the call site.
/// Values are `Copy`; no operation in this crate mutates a `Coords` it was
/// handed.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component, `-1` when omitted
    #[serde(default = "plane_depth")]
    pub z: f32,
}

impl Coords {
    /// Point on the drawing plane: `z` is set to [`PLANE_DEPTH`] (`-1`), not zero.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: PLANE_DEPTH }
    }

    /// Point or vector with an explicit `z`.
    #[inline]
    pub const fn new_3d(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The origin, `(0,0,0)`.
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Convert to the host vector type.
    #[inline]
    pub fn to_vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl From<Vec3> for Coords {
    fn from(v: Vec3) -> Self {
        Self::new_3d(v.x, v.y, v.z)
    }
}

impl From<Coords> for Vec3 {
    fn from(c: Coords) -> Self {
        c.to_vector()
    }
}

impl Add for Coords {
    type Output = Coords;
    #[inline]
    fn add(self, rhs: Coords) -> Coords {
        Coords::new_3d(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coords {
    type Output = Coords;
    #[inline]
    fn sub(self, rhs: Coords) -> Coords {
        Coords::new_3d(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Coords {
    type Output = Coords;
    #[inline]
    fn neg(self) -> Coords {
        Coords::new_3d(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Coords {
    type Output = Coords;
    #[inline]
    fn mul(self, rhs: f32) -> Coords {
        Coords::new_3d(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl AbsDiffEq for Coords {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Coords {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
