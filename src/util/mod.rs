//! Shared utilities for the geodesy core.
//!
//! Helpers for easing curves and angle wrapping/conversion.

pub mod angles;
pub mod easing;
