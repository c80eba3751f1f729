//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Host vector types and angle constants
//! - Logging utilities

pub mod math;
pub mod logging;
