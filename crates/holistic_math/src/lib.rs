//! # Holistic Math
//!
//! Point and vector operations for 2D scenes, with the small host layer
//! that uses them.
//!
//! ## Features
//!
//! - **Vector math**: distance, normalization, dot/cross products, angles,
//!   rotation and 2D look-at steering over the `Coords` value type
//! - **Scenes**: grid graphs and constellation diagrams emitted as draw calls
//! - **Steering**: a mover that turns toward a target and drives to it
//! - **Config**: TOML/RON settings for every scene and mover
//!
//! ## Quick Start
//!
//! ```rust
//! use holistic_math::prelude::*;
//!
//! fn main() -> Result<(), MathError> {
//!     let forward = Coords::new_3d(0.0, 1.0, 0.0);
//!     let facing = holistic::look_at_2d(forward, Coords::zero(), Coords::new_3d(4.0, 0.0, 0.0))?;
//!     assert!(holistic::distance(facing, Coords::new_3d(1.0, 0.0, 0.0)) < 1e-5);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

pub mod foundation;
pub mod math;
pub mod config;
pub mod debug;
pub mod scenes;
pub mod steering;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        debug::{Colour, DrawCommand, DrawList, SceneRenderer},
        foundation::math::{constants, Vec3},
        math::{holistic, Coords, MathError},
        scenes::{draw_constellation, draw_grid, ConstellationConfig, GridConfig, SceneError},
        steering::{Drive, DriveConfig, DriveError},
    };
}
