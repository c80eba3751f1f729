//! Drawing collaborator for scene visualization
//!
//! The math module never draws anything itself. Scenes hand points and
//! segments to a [`SceneRenderer`]; [`DrawList`] is the recording
//! implementation used by the demos and tests.

pub mod draw;

pub use draw::{Colour, DrawCommand, DrawList, SceneRenderer};
