//! Constellation diagram: axes, star markers and connecting edges.
//!
//! The default layout is the Leo constellation.

use serde::{Deserialize, Serialize};

use super::{check_width, SceneError};
use crate::config::{Config, ConfigError};
use crate::debug::{Colour, SceneRenderer};
use crate::math::{holistic, Coords};

/// Points, edges and styling for a constellation diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationConfig {
    /// Endpoints of the X axis
    pub x_axis: [Coords; 2],
    /// Endpoints of the Y axis
    pub y_axis: [Coords; 2],
    /// Axis stroke width
    pub axis_width: f32,
    /// X axis colour
    pub x_axis_colour: Colour,
    /// Y axis colour
    pub y_axis_colour: Colour,
    /// Star positions
    pub points: Vec<Coords>,
    /// Star marker width
    pub point_width: f32,
    /// Star marker colour
    pub point_colour: Colour,
    /// Pairs of indices into `points`
    pub edges: Vec<[usize; 2]>,
    /// Edge stroke width
    pub edge_width: f32,
    /// Edge colour
    pub edge_colour: Colour,
}

impl ConstellationConfig {
    /// The nine stars of Leo and the lines joining them
    pub fn leo() -> Self {
        Self {
            x_axis: [Coords::new(-160.0, 0.0), Coords::new(160.0, 0.0)],
            y_axis: [Coords::new(0.0, 100.0), Coords::new(0.0, -100.0)],
            axis_width: 0.5,
            x_axis_colour: Colour::YELLOW,
            y_axis_colour: Colour::GREEN,
            points: vec![
                Coords::new(0.0, 20.0),
                Coords::new(20.0, 30.0),
                Coords::new(80.0, 30.0),
                Coords::new(30.0, 50.0),
                Coords::new(80.0, 50.0),
                Coords::new(70.0, 60.0),
                Coords::new(70.0, 80.0),
                Coords::new(80.0, 90.0),
                Coords::new(95.0, 80.0),
            ],
            point_width: 2.0,
            point_colour: Colour::YELLOW,
            edges: vec![
                [0, 1],
                [1, 2],
                [0, 3],
                [3, 5],
                [2, 4],
                [4, 5],
                [5, 6],
                [6, 7],
                [7, 8],
            ],
            edge_width: 0.4,
            edge_colour: Colour::WHITE,
        }
    }

    /// Check widths and that every edge names an existing point
    pub fn check(&self) -> Result<(), SceneError> {
        check_width("axis", self.axis_width)?;
        check_width("point", self.point_width)?;
        check_width("edge", self.edge_width)?;

        let points = self.points.len();
        for (edge, pair) in self.edges.iter().enumerate() {
            if let Some(&index) = pair.iter().find(|&&index| index >= points) {
                return Err(SceneError::EdgeOutOfRange { edge, index, points });
            }
        }
        Ok(())
    }

    /// Total length of all edges
    ///
    /// # Errors
    ///
    /// Same checks as [`ConstellationConfig::check`].
    pub fn edge_length(&self) -> Result<f32, SceneError> {
        self.check()?;
        Ok(self
            .edges
            .iter()
            .map(|&[a, b]| holistic::distance(self.points[a], self.points[b]))
            .sum())
    }
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self::leo()
    }
}

impl Config for ConstellationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Draw both axes, then every star, then every edge.
///
/// Returns the number of draw calls made.
///
/// # Errors
///
/// Nothing is drawn when [`ConstellationConfig::check`] fails.
pub fn draw_constellation(
    renderer: &mut impl SceneRenderer,
    config: &ConstellationConfig,
) -> Result<usize, SceneError> {
    config.check()?;

    let [x_start, x_end] = config.x_axis;
    let [y_start, y_end] = config.y_axis;
    renderer.draw_line(x_start, x_end, config.axis_width, config.x_axis_colour);
    renderer.draw_line(y_start, y_end, config.axis_width, config.y_axis_colour);

    for &star in &config.points {
        renderer.draw_point(star, config.point_width, config.point_colour);
    }

    for &[a, b] in &config.edges {
        let (start, end) = (config.points[a], config.points[b]);
        renderer.draw_line(start, end, config.edge_width, config.edge_colour);
    }

    let drawn = 2 + config.points.len() + config.edges.len();
    log::debug!(
        "constellation drawn: {} stars, {} edges",
        config.points.len(),
        config.edges.len()
    );
    Ok(drawn)
}
