//! Stateless vector math over [`Coords`].
//!
//! Angles are in radians. Rotation is counter-clockwise for positive angles
//! on the XY plane, and [`look_at_2d`] picks its turn direction from the sign
//! of the z component of `cross(forward, direction)`.

use super::{Coords, MathError};
use crate::foundation::math::constants::TAU;

/// `value * value`
#[inline]
pub fn square(value: f32) -> f32 {
    value * value
}

/// Euclidean distance between two points over x, y and z.
///
/// Uses `hypot` so large or tiny components do not overflow or underflow
/// in the intermediate squares.
pub fn distance(point1: Coords, point2: Coords) -> f32 {
    (point1.x - point2.x)
        .hypot(point1.y - point2.y)
        .hypot(point1.z - point2.z)
}

/// Length of a vector, its distance from the origin.
#[inline]
pub fn magnitude(vector: Coords) -> f32 {
    distance(Coords::zero(), vector)
}

/// Unit vector in the direction of `vector`.
///
/// The vector is first divided by its largest component so the length is
/// taken in `[1, sqrt(3)]` regardless of the input's scale.
fn unit(vector: Coords, operation: &'static str) -> Result<Coords, MathError> {
    if !vector.is_finite() {
        return Err(MathError::DegenerateVector { operation });
    }
    let largest = vector.x.abs().max(vector.y.abs()).max(vector.z.abs());
    if largest == 0.0 {
        return Err(MathError::DegenerateVector { operation });
    }

    let scaled = Coords::new_3d(vector.x / largest, vector.y / largest, vector.z / largest);
    let length = magnitude(scaled);
    Ok(Coords::new_3d(scaled.x / length, scaled.y / length, scaled.z / length))
}

/// Scale a vector to unit length.
///
/// Returns a new value; the argument is left as it was.
///
/// # Errors
///
/// [`MathError::DegenerateVector`] when `vector` is zero or has a
/// non-finite component.
pub fn get_normal(vector: Coords) -> Result<Coords, MathError> {
    unit(vector, "get_normal")
}

/// Dot product over x, y and z.
#[inline]
pub fn dot(vector1: Coords, vector2: Coords) -> f32 {
    vector1.x * vector2.x + vector1.y * vector2.y + vector1.z * vector2.z
}

/// Unsigned angle between two vectors, in `[0, PI]` radians.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so rounding on
/// (anti)parallel inputs cannot produce NaN.
///
/// # Errors
///
/// [`MathError::DegenerateVector`] when either vector is zero or has a
/// non-finite component.
pub fn angle(vector1: Coords, vector2: Coords) -> Result<f32, MathError> {
    let unit1 = unit(vector1, "angle")?;
    let unit2 = unit(vector2, "angle")?;
    let cos = dot(unit1, unit2).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Rotate the x/y part of a vector by `angle` radians.
///
/// Counter-clockwise unless `clockwise` is set, in which case the vector is
/// turned by `TAU - angle`. The input `z` is ignored and the result always
/// has `z = 0`.
pub fn rotate(vector: Coords, angle: f32, clockwise: bool) -> Coords {
    let angle = if clockwise { TAU - angle } else { angle };
    let (sin, cos) = angle.sin_cos();
    Coords::new_3d(
        vector.x * cos - vector.y * sin,
        vector.x * sin + vector.y * cos,
        0.0,
    )
}

/// Right-handed cross product.
pub fn cross(vector1: Coords, vector2: Coords) -> Coords {
    Coords::new_3d(
        vector1.y * vector2.z - vector1.z * vector2.y,
        vector1.z * vector2.x - vector1.x * vector2.z,
        vector1.x * vector2.y - vector1.y * vector2.x,
    )
}

/// Turn `forward_vector` so it faces `focus_point` as seen from `position`.
///
/// The direction to the target takes its x/y from `focus_point - position`
/// and its z from `position.z` (not from the difference). The turn is
/// clockwise when `cross(forward, direction).z` is negative.
///
/// # Errors
///
/// [`MathError::DegenerateVector`] when `forward_vector` has zero length or
/// `focus_point` lies on `position` in the XY plane.
pub fn look_at_2d(
    forward_vector: Coords,
    position: Coords,
    focus_point: Coords,
) -> Result<Coords, MathError> {
    let dx = focus_point.x - position.x;
    let dy = focus_point.y - position.y;
    if dx == 0.0 && dy == 0.0 {
        return Err(MathError::DegenerateVector { operation: "look_at_2d" });
    }

    let direction = Coords::new_3d(dx, dy, position.z);
    let turn = angle(forward_vector, direction)?;
    let clockwise = cross(forward_vector, direction).z < 0.0;
    Ok(rotate(forward_vector, turn, clockwise))
}
