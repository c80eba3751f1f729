//! Scene builders for point and line diagrams
//!
//! Each scene turns a config into draw calls on a [`SceneRenderer`]:
//! - [`grid`]: X/Y axes plus evenly spaced grid lines
//! - [`constellation`]: axes, star markers and the edges joining them
//!
//! [`SceneRenderer`]: crate::debug::SceneRenderer

pub mod constellation;
pub mod grid;

pub use constellation::{draw_constellation, ConstellationConfig};
pub use grid::{draw_grid, GridConfig};

use thiserror::Error;

/// Scene configuration problems found before drawing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Grid spacing must be a positive number of units
    #[error("grid cell size must be positive, got {0}")]
    InvalidCellSize(i32),

    /// Grid extents must not be negative
    #[error("grid extent must not be negative, got xmax={xmax} ymax={ymax}")]
    InvalidExtent {
        /// Half-width of the grid
        xmax: i32,
        /// Half-height of the grid
        ymax: i32,
    },

    /// The grid would need more lines along one axis than allowed
    #[error("grid needs {lines} lines along {axis}, at most {max} allowed")]
    TooManyLines {
        /// Axis name, `x` or `y`
        axis: &'static str,
        /// Lines the config asks for
        lines: u64,
        /// The limit
        max: u64,
    },

    /// Stroke widths must be positive and finite
    #[error("{name} width must be positive, got {width}")]
    InvalidWidth {
        /// Which width was rejected
        name: &'static str,
        /// The rejected value
        width: f32,
    },

    /// An edge refers to a point that does not exist
    #[error("edge {edge} refers to point {index}, but only {points} points exist")]
    EdgeOutOfRange {
        /// Position of the edge in the edge list
        edge: usize,
        /// The offending point index
        index: usize,
        /// Number of points available
        points: usize,
    },
}

pub(crate) fn check_width(name: &'static str, width: f32) -> Result<(), SceneError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidWidth { name, width })
    }
}
