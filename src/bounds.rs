//! Axis-aligned bounding box of a shape collection
//!
//! Both pattern generators tile the extent computed here.

use glam::DVec2;

use crate::shape::Shape;

/// Smallest axis-aligned rectangle covering every shape in a collection
///
/// `min` collects the shape anchors, `max` collects the far corners
/// (`position + dimensions`). The box is undefined for an empty collection,
/// so [`BoundingBox::of_shapes`] returns `Option` and generators emit
/// nothing when it is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum of all shape positions
    pub min: DVec2,
    /// Maximum of all shape far corners
    pub max: DVec2,
}

impl BoundingBox {
    /// Compute the bounding box of a shape collection
    ///
    /// Returns `None` for an empty collection. Degenerate shapes (zero
    /// width or height) contribute a degenerate interval, which is valid.
    pub fn of_shapes(shapes: &[Shape]) -> Option<BoundingBox> {
        let (first, rest) = shapes.split_first()?;

        let mut min = first.min_corner();
        let mut max = first.max_corner();
        for shape in rest {
            min = min.min(shape.min_corner());
            max = max.max(shape.max_corner());
        }

        Some(BoundingBox { min, max })
    }

    /// Horizontal extent (`max.x - min.x`)
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent (`max.y - min.y`)
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Point2, Size2};

    fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> Shape {
        Shape::new(id, "rectangle", Point2::new(x, y), Size2::new(w, h), "m")
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(BoundingBox::of_shapes(&[]), None);
    }

    #[test]
    fn test_single_shape() {
        let bounds = BoundingBox::of_shapes(&[rect("a", 10.0, 20.0, 30.0, 40.0)]).unwrap();
        assert_eq!(bounds.min, DVec2::new(10.0, 20.0));
        assert_eq!(bounds.max, DVec2::new(40.0, 60.0));
        assert_eq!(bounds.width(), 30.0);
        assert_eq!(bounds.height(), 40.0);
    }

    #[test]
    fn test_multiple_shapes() {
        let shapes = vec![
            rect("a", 0.0, 0.0, 10.0, 10.0),
            rect("b", -5.0, 20.0, 10.0, 10.0),
            rect("c", 50.0, 5.0, 25.0, 1.0),
        ];

        let bounds = BoundingBox::of_shapes(&shapes).unwrap();
        assert_eq!(bounds.min, DVec2::new(-5.0, 0.0));
        assert_eq!(bounds.max, DVec2::new(75.0, 30.0));
    }

    #[test]
    fn test_degenerate_shape() {
        let bounds = BoundingBox::of_shapes(&[rect("dot", 3.0, 4.0, 0.0, 0.0)]).unwrap();
        assert_eq!(bounds.min, bounds.max);
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }
}
