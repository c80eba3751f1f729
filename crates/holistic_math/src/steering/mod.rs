//! Movement collaborator
//!
//! Holds host-side position and orientation state and asks the math module
//! for directions and look-at orientations. The math functions only see
//! plain [`Coords`](crate::math::Coords) values copied out of this state.

pub mod drive;

pub use drive::{Drive, DriveConfig, DriveError};
