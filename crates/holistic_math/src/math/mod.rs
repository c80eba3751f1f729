//! Point and vector operations
//!
//! `Coords` is the value type shared by every call site; `holistic` holds
//! the stateless functions (distance, normalization, dot/cross products,
//! angles, rotation and 2D look-at steering) that operate on it.
//!
//! Nothing in this module logs or keeps state. Degenerate inputs come back
//! as [`MathError`] rather than NaN or infinity.

mod coords;
mod error;
pub mod holistic;

pub use coords::{Coords, PLANE_DEPTH};
pub use error::MathError;
