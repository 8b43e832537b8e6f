//! Honeycomb infill generation
//!
//! Tiles a blueprint's bounding box with an offset hexagonal grid. The
//! generated cells replace the original shapes entirely.

use crate::bounds::BoundingBox;
use crate::shape::{Point2, Shape, Size2};

/// Default hexagon cell size when the caller does not supply one
pub const DEFAULT_HEX_SIZE: f64 = 10.0;

/// Material label stamped on every generated hexagon
pub const HONEYCOMB_MATERIAL: &str = "honeycomb_material";

/// Generate a honeycomb structure within the bounding box of the given shapes
///
/// The grid uses a vertical pitch of `sqrt(3) * hex_size` and a horizontal
/// column step of `1.5 * hex_size` (three quarters of the nominal hexagon
/// width), with odd columns shifted down by half a pitch to produce the
/// offset honeycomb packing. Cell ids are `honeycomb_{column}_{row}`, so the
/// output is fully deterministic: identical inputs produce identical
/// sequences.
///
/// # Arguments
///
/// * `shapes` - Shape collection whose bounding box is tiled
/// * `hex_size` - Hexagon cell size (see [`DEFAULT_HEX_SIZE`])
///
/// # Returns
///
/// New hexagon shapes in column-major order. Empty when the input collection
/// is empty, when the bounding box is smaller than one cell in either axis,
/// or when `hex_size` is not a positive number.
pub fn generate_honeycomb(shapes: &[Shape], hex_size: f64) -> Vec<Shape> {
    let Some(bounds) = BoundingBox::of_shapes(shapes) else {
        return Vec::new();
    };

    // A non-positive or NaN cell size cannot tile the box
    if !(hex_size > 0.0) {
        return Vec::new();
    }

    let pitch = 3.0_f64.sqrt() * hex_size;
    let width = 2.0 * hex_size;
    let column_step = 0.75 * width;

    let columns = (bounds.width() / column_step).floor() as usize;
    let rows = (bounds.height() / pitch).floor() as usize;

    let mut cells = Vec::with_capacity(columns * rows);

    for i in 0..columns {
        for j in 0..rows {
            let x = bounds.min.x + i as f64 * column_step;
            let mut y = bounds.min.y + j as f64 * pitch;
            if i % 2 == 1 {
                y += pitch / 2.0;
            }

            cells.push(Shape::new(
                format!("honeycomb_{}_{}", i, j),
                "hexagon",
                Point2::new(x, y),
                Size2::new(hex_size, hex_size),
                HONEYCOMB_MATERIAL,
            ));
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(width: f64, height: f64) -> Vec<Shape> {
        vec![Shape::new(
            "panel",
            "rectangle",
            Point2::new(0.0, 0.0),
            Size2::new(width, height),
            "steel",
        )]
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_honeycomb(&[], DEFAULT_HEX_SIZE).is_empty());
    }

    #[test]
    fn test_cell_count_matches_grid() {
        let cells = generate_honeycomb(&panel(100.0, 100.0), 10.0);

        // column step 15, pitch sqrt(3)*10 ~ 17.32
        let columns = (100.0_f64 / 15.0).floor() as usize;
        let rows = (100.0_f64 / (3.0_f64.sqrt() * 10.0)).floor() as usize;
        assert_eq!(columns, 6);
        assert_eq!(rows, 5);
        assert_eq!(cells.len(), columns * rows);
    }

    #[test]
    fn test_cell_shape_fields() {
        let cells = generate_honeycomb(&panel(100.0, 100.0), 10.0);

        for cell in &cells {
            assert_eq!(cell.kind, "hexagon");
            assert_eq!(cell.material, HONEYCOMB_MATERIAL);
            assert_eq!(cell.dimensions, Size2::new(10.0, 10.0));
        }
        assert_eq!(cells[0].id, "honeycomb_0_0");
    }

    #[test]
    fn test_odd_column_offset() {
        let hex_size = 10.0;
        let pitch = 3.0_f64.sqrt() * hex_size;
        let cells = generate_honeycomb(&panel(120.0, 120.0), hex_size);

        for cell in &cells {
            let mut parts = cell.id.split('_').skip(1);
            let i: usize = parts.next().unwrap().parse().unwrap();
            let j: usize = parts.next().unwrap().parse().unwrap();

            let mut expected_y = j as f64 * pitch;
            if i % 2 == 1 {
                expected_y += pitch / 2.0;
            }
            assert_eq!(cell.position.x, i as f64 * 1.5 * hex_size);
            assert_eq!(cell.position.y, expected_y);
        }
    }

    #[test]
    fn test_determinism() {
        let shapes = panel(200.0, 150.0);
        let first = generate_honeycomb(&shapes, 8.0);
        let second = generate_honeycomb(&shapes, 8.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounding_box_offset_is_respected() {
        let shapes = vec![Shape::new(
            "panel",
            "rectangle",
            Point2::new(-40.0, 25.0),
            Size2::new(90.0, 90.0),
            "steel",
        )];

        let cells = generate_honeycomb(&shapes, 10.0);
        assert!(!cells.is_empty());
        assert_eq!(cells[0].position, Point2::new(-40.0, 25.0));
    }

    #[test]
    fn test_box_smaller_than_one_cell() {
        // 10x10 box cannot fit a single 10-size cell (column step 15)
        assert!(generate_honeycomb(&panel(10.0, 10.0), 10.0).is_empty());
    }

    #[test]
    fn test_degenerate_hex_size() {
        let shapes = panel(100.0, 100.0);
        assert!(generate_honeycomb(&shapes, 0.0).is_empty());
        assert!(generate_honeycomb(&shapes, -5.0).is_empty());
        assert!(generate_honeycomb(&shapes, f64::NAN).is_empty());
    }
}
