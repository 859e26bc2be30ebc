//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the HUD:
//! - 2D math types and affine transforms
//! - Logging utilities

pub mod math;
pub mod logging;
