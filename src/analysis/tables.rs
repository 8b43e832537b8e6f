//! Fixed lookup tables for the scoring model
//!
//! Base stats per primitive shape and multiplicative modifiers per structure
//! type, kept as compile-time constant data rather than per-call state.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StructureError;

/// Primitive shapes with entries in the base-stats table
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveShape {
    Pyramid,
    Cube,
    Cuboid,
    Sphere,
    Cylinder,
    Cone,
}

/// Structure types with entries in the modifier table
///
/// These are the analysis-side selectors (capitalized on the wire); the
/// converter's lowercase pattern tags are a separate namespace.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureType {
    Solid,
    Honeycomb,
    Bone,
    Mesh,
}

/// Baseline metrics for a primitive shape at the reference diameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseStats {
    /// Strength rating in percent
    pub strength: f64,
    /// Maximum supported load in kg
    pub max_load: f64,
    /// Material usage factor
    pub material: f64,
    /// Efficiency rating in percent
    pub efficiency: f64,
    /// Load at which the shape collapses, in kg
    pub failure_point: f64,
}

/// Multiplicative factors a structure type applies to the base stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeModifiers {
    pub strength: f64,
    pub max_load: f64,
    pub material: f64,
    pub efficiency: f64,
}

impl PrimitiveShape {
    /// Every shape in the base-stats table
    pub const ALL: [PrimitiveShape; 6] = [
        PrimitiveShape::Pyramid,
        PrimitiveShape::Cube,
        PrimitiveShape::Cuboid,
        PrimitiveShape::Sphere,
        PrimitiveShape::Cylinder,
        PrimitiveShape::Cone,
    ];

    /// Baseline metrics for this shape
    pub const fn base_stats(self) -> BaseStats {
        match self {
            PrimitiveShape::Pyramid => BaseStats {
                strength: 92.0,
                max_load: 4200.0,
                material: 1.8,
                efficiency: 88.0,
                failure_point: 5100.0,
            },
            PrimitiveShape::Cube => BaseStats {
                strength: 78.0,
                max_load: 6800.0,
                material: 2.4,
                efficiency: 72.0,
                failure_point: 7200.0,
            },
            PrimitiveShape::Cuboid => BaseStats {
                strength: 74.0,
                max_load: 7200.0,
                material: 2.8,
                efficiency: 68.0,
                failure_point: 7900.0,
            },
            PrimitiveShape::Sphere => BaseStats {
                strength: 96.0,
                max_load: 5400.0,
                material: 2.1,
                efficiency: 94.0,
                failure_point: 5800.0,
            },
            PrimitiveShape::Cylinder => BaseStats {
                strength: 84.0,
                max_load: 5900.0,
                material: 2.2,
                efficiency: 80.0,
                failure_point: 6400.0,
            },
            PrimitiveShape::Cone => BaseStats {
                strength: 88.0,
                max_load: 3800.0,
                material: 1.6,
                efficiency: 85.0,
                failure_point: 4200.0,
            },
        }
    }

    /// Table key for this shape
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveShape::Pyramid => "Pyramid",
            PrimitiveShape::Cube => "Cube",
            PrimitiveShape::Cuboid => "Cuboid",
            PrimitiveShape::Sphere => "Sphere",
            PrimitiveShape::Cylinder => "Cylinder",
            PrimitiveShape::Cone => "Cone",
        }
    }
}

impl StructureType {
    /// Every structure type in the modifier table
    pub const ALL: [StructureType; 4] = [
        StructureType::Solid,
        StructureType::Honeycomb,
        StructureType::Bone,
        StructureType::Mesh,
    ];

    /// Multiplicative factors for this structure type
    pub const fn modifiers(self) -> TypeModifiers {
        match self {
            StructureType::Solid => TypeModifiers {
                strength: 1.0,
                max_load: 1.0,
                material: 1.0,
                efficiency: 1.0,
            },
            StructureType::Honeycomb => TypeModifiers {
                strength: 0.88,
                max_load: 0.82,
                material: 0.55,
                efficiency: 1.28,
            },
            StructureType::Bone => TypeModifiers {
                strength: 0.93,
                max_load: 0.91,
                material: 0.62,
                efficiency: 1.18,
            },
            StructureType::Mesh => TypeModifiers {
                strength: 0.76,
                max_load: 0.72,
                material: 0.40,
                efficiency: 1.14,
            },
        }
    }

    /// Table key for this structure type
    pub const fn name(self) -> &'static str {
        match self {
            StructureType::Solid => "Solid",
            StructureType::Honeycomb => "Honeycomb",
            StructureType::Bone => "Bone",
            StructureType::Mesh => "Mesh",
        }
    }
}

impl FromStr for PrimitiveShape {
    type Err = StructureError;

    /// Exact-match lookup; an unknown key is a hard error, never a default
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| StructureError::UnknownShape(s.to_string()))
    }
}

impl FromStr for StructureType {
    type Err = StructureError;

    /// Exact-match lookup; an unknown key is a hard error, never a default
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|structure| structure.name() == s)
            .ok_or_else(|| StructureError::UnknownStructureType(s.to_string()))
    }
}

impl fmt::Display for PrimitiveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
