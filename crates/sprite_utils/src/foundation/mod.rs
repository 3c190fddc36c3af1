//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - 2D math types and the integer rotation helper
//! - Logical game time
//! - Logging utilities

pub mod logging;
pub mod math;
pub mod time;
