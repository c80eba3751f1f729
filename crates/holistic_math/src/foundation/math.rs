//! Host math types and angle constants
//!
//! The host side (movement, rendering) works with nalgebra vectors. The
//! `Coords` value type converts to and from these component-wise.

pub use nalgebra::{Vector3, Vector4};

/// 3D vector type used by the host layer for positions and directions
pub type Vec3 = Vector3<f32>;

/// 4D vector type, used for RGBA colours
pub type Vec4 = Vector4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}
