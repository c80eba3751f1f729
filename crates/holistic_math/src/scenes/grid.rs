//! Grid graph: red X axis, green Y axis and a white square grid

use serde::{Deserialize, Serialize};

use super::{check_width, SceneError};
use crate::config::{Config, ConfigError};
use crate::debug::{Colour, SceneRenderer};
use crate::math::Coords;

/// Upper bound on grid lines along one axis, axes excluded
pub const MAX_LINES_PER_AXIS: u64 = 10_001;

/// Grid layout and styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Spacing between grid lines
    pub size: i32,
    /// Grid extends from `-xmax` to `xmax` along X
    pub xmax: i32,
    /// Grid extends from `-ymax` to `ymax` along Y
    pub ymax: i32,
    /// Width of the two axes
    pub axis_width: f32,
    /// Width of the grid lines
    pub grid_width: f32,
    /// X axis colour
    pub x_axis_colour: Colour,
    /// Y axis colour
    pub y_axis_colour: Colour,
    /// Grid line colour
    pub grid_colour: Colour,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 28,
            xmax: 200,
            ymax: 200,
            axis_width: 1.0,
            grid_width: 0.5,
            x_axis_colour: Colour::RED,
            y_axis_colour: Colour::GREEN,
            grid_colour: Colour::WHITE,
        }
    }
}

impl GridConfig {
    /// Check spacing, extents and widths
    pub fn check(&self) -> Result<(), SceneError> {
        if self.size <= 0 {
            return Err(SceneError::InvalidCellSize(self.size));
        }
        if self.xmax < 0 || self.ymax < 0 {
            return Err(SceneError::InvalidExtent { xmax: self.xmax, ymax: self.ymax });
        }
        for (axis, extent) in [("x", self.xmax), ("y", self.ymax)] {
            let lines = self.line_count(extent);
            if lines > MAX_LINES_PER_AXIS {
                return Err(SceneError::TooManyLines { axis, lines, max: MAX_LINES_PER_AXIS });
            }
        }
        check_width("axis", self.axis_width)?;
        check_width("grid", self.grid_width)
    }

    /// Number of grid lines across `-extent..=extent`
    pub fn line_count(&self, extent: i32) -> u64 {
        if self.size <= 0 || extent < 0 {
            return 0;
        }
        2 * u64::from((extent / self.size).unsigned_abs()) + 1
    }

    /// Grid line positions from `-k*size` to `k*size`, `k = trunc(extent / size)`
    pub fn line_offsets(&self, extent: i32) -> impl Iterator<Item = i32> {
        let count = usize::try_from(self.line_count(extent)).unwrap_or(usize::MAX);
        let step = self.size.max(1);
        let limit = if count == 0 { 0 } else { (extent / step) * step };
        (-limit..=limit).step_by(step.unsigned_abs() as usize).take(count)
    }
}

impl Config for GridConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Draw the axes followed by vertical then horizontal grid lines.
///
/// Returns the number of lines drawn.
///
/// # Errors
///
/// Rejects the config before drawing anything if [`GridConfig::check`] fails.
pub fn draw_grid(
    renderer: &mut impl SceneRenderer,
    config: &GridConfig,
) -> Result<usize, SceneError> {
    config.check()?;

    let xmax = config.xmax as f32;
    let ymax = config.ymax as f32;
    let (grid_width, grid_colour) = (config.grid_width, config.grid_colour);

    renderer.draw_line(
        Coords::new(-xmax, 0.0),
        Coords::new(xmax, 0.0),
        config.axis_width,
        config.x_axis_colour,
    );
    renderer.draw_line(
        Coords::new(0.0, -ymax),
        Coords::new(0.0, ymax),
        config.axis_width,
        config.y_axis_colour,
    );
    let mut drawn = 2;

    for x in config.line_offsets(config.xmax) {
        let x = x as f32;
        renderer.draw_line(Coords::new(x, -ymax), Coords::new(x, ymax), grid_width, grid_colour);
        drawn += 1;
    }

    for y in config.line_offsets(config.ymax) {
        let y = y as f32;
        renderer.draw_line(Coords::new(-xmax, y), Coords::new(xmax, y), grid_width, grid_colour);
        drawn += 1;
    }

    log::debug!("grid drawn: {} lines, cell size {}", drawn, config.size);
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::{DrawCommand, DrawList};

    #[test]
    fn test_default_grid_line_count() {
        let mut list = DrawList::new();
        let drawn = draw_grid(&mut list, &GridConfig::default()).unwrap();

        // 200 / 28 = 7 steps each way: 15 verticals, 15 horizontals, 2 axes.
        assert_eq!(drawn, 32);
        assert_eq!(list.line_count(), 32);
    }

    #[test]
    fn test_axes_come_first() {
        let mut list = DrawList::new();
        draw_grid(&mut list, &GridConfig::default()).unwrap();

        assert_eq!(
            list.commands()[0],
            DrawCommand::Line {
                start: Coords::new(-200.0, 0.0),
                end: Coords::new(200.0, 0.0),
                width: 1.0,
                colour: Colour::RED,
            }
        );
        assert_eq!(list.commands()[1].colour(), Colour::GREEN);
        let y_axis = (Coords::new(0.0, -200.0), Coords::new(0.0, 200.0));
        assert_eq!(list.commands()[1].segment(), y_axis);
    }

    #[test]
    fn test_grid_lines_are_symmetric_and_on_plane() {
        let config = GridConfig::default();
        let offsets: Vec<i32> = config.line_offsets(200).collect();
        assert_eq!(offsets.len(), 15);
        assert_eq!(offsets.first(), Some(&-196));
        assert_eq!(offsets.last(), Some(&196));

        let mut list = DrawList::new();
        draw_grid(&mut list, &config).unwrap();
        for command in &list.commands()[2..] {
            let (a, b) = command.segment();
            assert_eq!(a.z, -1.0);
            assert_eq!(b.z, -1.0);
            assert_eq!(command.width(), 0.5);
            assert_eq!(command.colour(), Colour::WHITE);
        }
    }

    #[test]
    fn test_exact_multiple_reaches_edge() {
        let config = GridConfig { size: 50, xmax: 100, ymax: 40, ..GridConfig::default() };
        assert_eq!(config.line_offsets(100).collect::<Vec<_>>(), vec![-100, -50, 0, 50, 100]);
        assert_eq!(config.line_offsets(40).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_huge_grid_is_rejected_before_drawing() {
        let config = GridConfig { size: 1, xmax: i32::MAX, ..GridConfig::default() };
        assert_eq!(config.line_count(i32::MAX), 2 * i32::MAX as u64 + 1);

        let mut list = DrawList::new();
        let err = draw_grid(&mut list, &config).unwrap_err();
        assert!(matches!(err, SceneError::TooManyLines { axis: "x", .. }));
        assert_eq!(list.shape_count(), 0);
    }

    #[test]
    fn test_line_limit_is_inclusive() {
        let config = GridConfig { size: 1, xmax: 5_000, ymax: 5_000, ..GridConfig::default() };
        assert_eq!(config.line_count(5_000), MAX_LINES_PER_AXIS);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_offsets_are_lazy_for_invalid_size() {
        let config = GridConfig { size: 0, ..GridConfig::default() };
        assert_eq!(config.line_offsets(200).count(), 0);
        assert_eq!(config.line_count(200), 0);
    }

    #[test]
    fn test_rejects_non_positive_cell_size() {
        let mut list = DrawList::new();
        let config = GridConfig { size: 0, ..GridConfig::default() };
        assert_eq!(draw_grid(&mut list, &config), Err(SceneError::InvalidCellSize(0)));
        assert_eq!(list.shape_count(), 0);
    }

    #[test]
    fn test_rejects_negative_extent() {
        let config = GridConfig { xmax: -1, ..GridConfig::default() };
        assert!(matches!(config.check(), Err(SceneError::InvalidExtent { .. })));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
