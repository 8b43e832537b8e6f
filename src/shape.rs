//! Blueprint shape structure
//!
//! Represents an individual 2D shape in a blueprint with position, dimensions,
//! and material.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point, the top-left anchor of a shape
///
/// This is a wire-faithful value type: it serializes as the object
/// `{"x": ..., "y": ...}` that blueprint documents use. For math, convert to
/// [`DVec2`] via [`Point2::to_vec2`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to a `DVec2` for vector math
    #[inline]
    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point2 {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Width and height of a shape's occupied rectangle
///
/// Serializes as `{"width": ..., "height": ...}`. Both components are
/// expected to be non-negative but are not validated; degenerate sizes are
/// allowed and simply occupy a degenerate rectangle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size2 {
    pub width: f64,
    pub height: f64,
}

impl Size2 {
    /// Create a new size
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert to a `DVec2` (width as x, height as y)
    #[inline]
    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// A single shape in a blueprint
///
/// Each shape occupies the axis-aligned rectangle
/// `[x, x + width] × [y, y + height]`.
///
/// # Design Notes
///
/// Shapes are plain values with structural equality. Generators never mutate
/// a shape collection in place; they return a replacement collection.
///
/// The `kind` tag is an open set: `"rectangle"` and `"hexagon"` are produced
/// by the generators, anything else passes through conversion untouched.
/// `id` uniqueness within a collection is the caller's responsibility.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Identifier, unique within a collection
    pub id: String,

    /// Shape tag (`"rectangle"`, `"hexagon"`, ...), named `type` on the wire
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,

    /// Top-left anchor of the occupied rectangle
    pub position: Point2,

    /// Extent of the occupied rectangle
    pub dimensions: Size2,

    /// Free-form material label
    pub material: String,
}

impl Shape {
    /// Create a new shape
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        position: Point2,
        dimensions: Size2,
        material: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            position,
            dimensions,
            material: material.into(),
        }
    }

    /// Top-left corner of the occupied rectangle
    #[inline]
    pub fn min_corner(&self) -> DVec2 {
        self.position.to_vec2()
    }

    /// Bottom-right corner of the occupied rectangle
    /// (`position + dimensions`)
    #[inline]
    pub fn max_corner(&self) -> DVec2 {
        self.position.to_vec2() + self.dimensions.to_vec2()
    }
}
