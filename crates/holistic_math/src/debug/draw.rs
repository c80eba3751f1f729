//! Draw commands and the recording draw list
//!
//! A point is drawn as a short diagonal stroke whose half-extent is a third
//! of its width on each axis; a line is a straight stroke between two
//! points. Both keep the depth (`z`) of the coordinates they were given.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec4;
use crate::math::Coords;

/// RGBA colour with components in `[0, 1]`
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Colour {
    /// Opaque red
    pub const RED: Colour = Colour::rgb(1.0, 0.0, 0.0);
    /// Opaque green
    pub const GREEN: Colour = Colour::rgb(0.0, 1.0, 0.0);
    /// Opaque blue
    pub const BLUE: Colour = Colour::rgb(0.0, 0.0, 1.0);
    /// Opaque white
    pub const WHITE: Colour = Colour::rgb(1.0, 1.0, 1.0);
    /// Opaque yellow, matching the usual engine yellow (1, 0.92, 0.016)
    pub const YELLOW: Colour = Colour::rgb(1.0, 0.92, 0.016);

    /// Opaque colour from red, green and blue
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to an RGBA vector for the host renderer
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }
}

/// A single recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Marker at a point
    Point {
        /// Where the marker sits
        position: Coords,
        /// Stroke width, also sets the marker size
        width: f32,
        /// Stroke colour
        colour: Colour,
    },

    /// Segment between two points
    Line {
        /// First endpoint
        start: Coords,
        /// Second endpoint
        end: Coords,
        /// Stroke width
        width: f32,
        /// Stroke colour
        colour: Colour,
    },
}

impl DrawCommand {
    /// Endpoints of the stroke the host should render
    pub fn segment(&self) -> (Coords, Coords) {
        match *self {
            DrawCommand::Point { position, width, .. } => {
                let half = width / 3.0;
                (
                    Coords::new_3d(position.x - half, position.y - half, position.z),
                    Coords::new_3d(position.x + half, position.y + half, position.z),
                )
            }
            DrawCommand::Line { start, end, .. } => (start, end),
        }
    }

    /// Stroke width
    pub fn width(&self) -> f32 {
        match self {
            DrawCommand::Point { width, .. } | DrawCommand::Line { width, .. } => *width,
        }
    }

    /// Stroke colour
    pub fn colour(&self) -> Colour {
        match self {
            DrawCommand::Point { colour, .. } | DrawCommand::Line { colour, .. } => *colour,
        }
    }

    /// Scene object name, e.g. `Point_(1,2,-1)` or `Line_(0,0,-1)_(1,1,-1)`
    pub fn label(&self) -> String {
        match self {
            DrawCommand::Point { position, .. } => format!("Point_{}", position),
            DrawCommand::Line { start, end, .. } => format!("Line_{}_{}", start, end),
        }
    }
}

/// Anything that can put points and lines into a scene
pub trait SceneRenderer {
    /// Draw a marker at `position`
    fn draw_point(&mut self, position: Coords, width: f32, colour: Colour);

    /// Draw a segment from `start` to `end`
    fn draw_line(&mut self, start: Coords, end: Coords, width: f32, colour: Colour);
}

/// Records draw commands in the order they were issued
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,

    /// Master enable/disable flag
    pub enabled: bool,
}

impl DrawList {
    /// Create an empty, enabled draw list
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            enabled: true,
        }
    }

    fn push(&mut self, command: DrawCommand) {
        if !self.enabled {
            return;
        }
        log::trace!("draw {}", command.label());
        self.commands.push(command);
    }

    /// Recorded commands, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn shape_count(&self) -> usize {
        self.commands.len()
    }

    /// Number of recorded lines
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Number of recorded points
    pub fn point_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Point { .. }))
            .count()
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer for DrawList {
    fn draw_point(&mut self, position: Coords, width: f32, colour: Colour) {
        self.push(DrawCommand::Point { position, width, colour });
    }

    fn draw_line(&mut self, start: Coords, end: Coords, width: f32, colour: Colour) {
        self.push(DrawCommand::Line { start, end, width, colour });
    }
}
