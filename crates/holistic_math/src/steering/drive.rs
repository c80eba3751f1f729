//! Drive a mover in a straight line toward a fixed target
//!
//! On creation the mover turns its `up` vector to face the target and
//! caches the normalized direction. Each update advances it by
//! `speed * delta_time` until it is within the stopping distance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec3;
use crate::math::{holistic, Coords, MathError};

/// Speed and arrival tolerance for a [`Drive`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Units per second
    pub speed: f32,
    /// The mover stops once it is this close to the target
    pub stopping_distance: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            stopping_distance: 0.1,
        }
    }
}

impl DriveConfig {
    fn check(&self) -> Result<(), DriveError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(DriveError::InvalidConfig(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if !(self.stopping_distance.is_finite() && self.stopping_distance > 0.0) {
            return Err(DriveError::InvalidConfig(format!(
                "stopping distance must be positive, got {}",
                self.stopping_distance
            )));
        }
        Ok(())
    }
}

impl Config for DriveConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Errors from setting up or running a [`Drive`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriveError {
    /// Direction or orientation could not be computed
    #[error("steering failed: {0}")]
    Steering(#[from] MathError),

    /// Rejected speed or stopping distance
    #[error("invalid drive configuration: {0}")]
    InvalidConfig(String),
}

/// A mover heading for a fixed target
#[derive(Debug, Clone)]
pub struct Drive {
    config: DriveConfig,
    position: Vec3,
    up: Vec3,
    target: Vec3,
    direction: Vec3,
}

impl Drive {
    /// Face `target` and cache the unit direction toward it.
    ///
    /// # Errors
    ///
    /// Fails when the config is invalid, when `up` is zero, or when `target`
    /// sits on `position`.
    pub fn new(
        config: DriveConfig,
        position: Vec3,
        up: Vec3,
        target: Vec3,
    ) -> Result<Self, DriveError> {
        config.check()?;

        let direction = holistic::get_normal(Coords::from(target - position))?;
        let up = holistic::look_at_2d(
            Coords::from(up),
            Coords::from(position),
            Coords::from(target),
        )?;

        log::debug!("drive facing {} toward {}", up, direction);

        Ok(Self {
            config,
            position,
            up: up.to_vector(),
            target,
            direction: direction.to_vector(),
        })
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current facing
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit vector toward the target
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Target position
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Settings in use
    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    /// Distance left to the target
    pub fn remaining_distance(&self) -> f32 {
        holistic::distance(Coords::from(self.position), Coords::from(self.target))
    }

    /// True once within the stopping distance
    pub fn has_arrived(&self) -> bool {
        self.remaining_distance() <= self.config.stopping_distance
    }

    /// Advance one frame. Returns `false` once the mover has arrived.
    ///
    /// A step never carries the mover past the target. A `delta_time` that
    /// is not a positive finite number leaves the mover where it is and
    /// also returns `false`.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if !(delta_time.is_finite() && delta_time > 0.0) {
            log::warn!("ignoring drive update with frame time {}", delta_time);
            return false;
        }

        let remaining = self.remaining_distance();
        if remaining <= self.config.stopping_distance {
            return false;
        }

        let step = (self.config.speed * delta_time).min(remaining);
        self.position += self.direction * step;
        log::trace!("drive step {:.4}, {:.4} remaining", step, remaining - step);
        true
    }

    /// Update until arrival or `max_steps` frames, returning the frames used
    pub fn run_until_arrived(&mut self, delta_time: f32, max_steps: usize) -> usize {
        let mut steps = 0;
        while steps < max_steps && self.update(delta_time) {
            steps += 1;
        }

        if self.has_arrived() {
            log::info!("arrived at target after {} steps", steps);
        } else {
            log::warn!(
                "stopped after {} steps, {:.3} from target",
                steps,
                self.remaining_distance()
            );
        }
        steps
    }
}
