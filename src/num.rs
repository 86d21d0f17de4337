//! Utilities related to numbers.

use std::fmt;

/// Floating point marker trait for easier control over trait bounds.
pub trait McFloat: Sync + Send + num::Float + num::cast::FromPrimitive + fmt::Debug {}

impl McFloat for f32 {}
impl McFloat for f64 {}
