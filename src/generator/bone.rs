//! Bone lattice generation
//!
//! Synthesizes a fixed lattice of vertical and horizontal bars spanning a
//! blueprint's bounding box, mimicking a simplified skeletal support pattern.

use crate::bounds::BoundingBox;
use crate::shape::{Point2, Shape, Size2};

/// Number of vertical bars in the lattice
pub const VERTICAL_BARS: usize = 3;

/// Number of horizontal bars in the lattice
pub const HORIZONTAL_BARS: usize = 4;

/// Width of each vertical bar
pub const VERTICAL_BAR_WIDTH: f64 = 10.0;

/// Height of each horizontal bar
pub const HORIZONTAL_BAR_HEIGHT: f64 = 5.0;

/// Material label stamped on every generated bar
pub const BONE_MATERIAL: &str = "bone_material";

/// Generate a bone structure within the bounding box of the given shapes
///
/// The lattice is a structural constant of the design: three vertical bars
/// at the quarter points of the box and four horizontal bars at the fifth
/// points, each spanning the full opposite extent. There is no density
/// parameter. Any non-empty input produces exactly
/// `VERTICAL_BARS + HORIZONTAL_BARS` shapes (`bone_v_*` then `bone_h_*`);
/// empty input produces an empty collection.
pub fn generate_bone(shapes: &[Shape]) -> Vec<Shape> {
    let Some(bounds) = BoundingBox::of_shapes(shapes) else {
        return Vec::new();
    };

    let mut bars = Vec::with_capacity(VERTICAL_BARS + HORIZONTAL_BARS);

    for i in 0..VERTICAL_BARS {
        let x = bounds.min.x + (i + 1) as f64 * bounds.width() / (VERTICAL_BARS + 1) as f64;
        bars.push(Shape::new(
            format!("bone_v_{}", i),
            "rectangle",
            Point2::new(x, bounds.min.y),
            Size2::new(VERTICAL_BAR_WIDTH, bounds.height()),
            BONE_MATERIAL,
        ));
    }

    for i in 0..HORIZONTAL_BARS {
        let y = bounds.min.y + (i + 1) as f64 * bounds.height() / (HORIZONTAL_BARS + 1) as f64;
        bars.push(Shape::new(
            format!("bone_h_{}", i),
            "rectangle",
            Point2::new(bounds.min.x, y),
            Size2::new(bounds.width(), HORIZONTAL_BAR_HEIGHT),
            BONE_MATERIAL,
        ));
    }

    bars
}
