//! Utility functions and helpers.

pub mod math;

pub use math::{clamp, InvalidRange};
