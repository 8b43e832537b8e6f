//! Blueprint document model
//!
//! A blueprint is a JSON document with a top-level `shapes` list. The crate
//! owns the document's shape; reading it from an upload or disk belongs to
//! the caller.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StructureError};
use crate::shape::Shape;

/// An uploaded blueprint document
///
/// A document without a `shapes` key deserializes to an empty list rather
/// than an error, so a bare `{}` is a valid, empty blueprint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Blueprint {
    /// Shapes describing the initial structure
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Blueprint {
    /// Parse a blueprint from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::InvalidBlueprint`] when the document is not
    /// valid JSON or the shape records are malformed.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| StructureError::InvalidBlueprint(err.to_string()))
    }

    /// Consume the blueprint, yielding its shape list
    #[inline]
    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}
