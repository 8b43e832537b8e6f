//! Blueprint conversion dispatch
//!
//! Routes a shape collection to one of the pattern generators based on a
//! structure-type tag.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generator::{generate_bone, generate_honeycomb, DEFAULT_HEX_SIZE};
use crate::shape::Shape;

/// Structure-type tag that leaves the blueprint untouched
pub const SOLID_TAG: &str = "solid";

/// Structure-type tag that selects honeycomb infill
pub const HONEYCOMB_TAG: &str = "honeycomb";

/// Structure-type tag that selects the bone lattice
pub const BONE_TAG: &str = "bone";

/// Conversion parameters with the upload-form defaults
///
/// `structure_type` defaults to `"solid"` and `hex_size` to
/// [`DEFAULT_HEX_SIZE`]; `hex_size` only matters for honeycomb conversion.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Pattern selector tag (lowercase: `"solid"`, `"honeycomb"`, `"bone"`)
    pub structure_type: String,
    /// Hexagon cell size for honeycomb conversion
    pub hex_size: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            structure_type: SOLID_TAG.to_string(),
            hex_size: DEFAULT_HEX_SIZE,
        }
    }
}

/// Convert a blueprint's shapes into the requested structural pattern
///
/// `"honeycomb"` and `"bone"` replace the collection with generator output;
/// every other tag (including the default `"solid"`) returns the original
/// collection unchanged. Unrecognized tags deliberately fall through to
/// passthrough rather than failing, so a caller sending a tag this crate
/// does not know still gets its blueprint back.
///
/// # Example
///
/// ```
/// use structure_lab::*;
///
/// let shapes = vec![Shape::new(
///     "base",
///     "rectangle",
///     Point2::new(0.0, 0.0),
///     Size2::new(100.0, 100.0),
///     "steel",
/// )];
///
/// let honeycomb = convert_blueprint(shapes.clone(), "honeycomb", 10.0);
/// assert!(honeycomb.iter().all(|s| s.kind == "hexagon"));
///
/// let untouched = convert_blueprint(shapes.clone(), "solid", 10.0);
/// assert_eq!(untouched, shapes);
/// ```
pub fn convert_blueprint(shapes: Vec<Shape>, structure_type: &str, hex_size: f64) -> Vec<Shape> {
    match structure_type {
        HONEYCOMB_TAG => generate_honeycomb(&shapes, hex_size),
        BONE_TAG => generate_bone(&shapes),
        _ => shapes,
    }
}

/// [`convert_blueprint`] with parameters carried in a [`ConvertOptions`]
pub fn convert_with_options(shapes: Vec<Shape>, options: &ConvertOptions) -> Vec<Shape> {
    convert_blueprint(shapes, &options.structure_type, options.hex_size)
}
