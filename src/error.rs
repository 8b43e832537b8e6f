//! Error types for blueprint conversion and structural analysis

use std::fmt;

/// Errors that can occur during blueprint parsing or structural scoring
#[derive(Debug, Clone)]
pub enum StructureError {
    /// Requested primitive shape is not in the base-stats table
    UnknownShape(String),
    /// Requested structure type is not in the modifier table
    UnknownStructureType(String),
    /// Blueprint document could not be parsed
    InvalidBlueprint(String),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnknownShape(name) => write!(f, "unknown shape: {}", name),
            StructureError::UnknownStructureType(name) => {
                write!(f, "unknown structure type: {}", name)
            }
            StructureError::InvalidBlueprint(msg) => write!(f, "invalid blueprint: {}", msg),
        }
    }
}

impl std::error::Error for StructureError {}

/// Result type alias for structure operations
pub type Result<T> = std::result::Result<T, StructureError>;
