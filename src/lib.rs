//! Structural blueprint conversion and load analysis
//!
//! A standalone library for turning 2D blueprints into structural infill
//! patterns (honeycomb, bone lattice) and scoring primitive shapes under
//! load, suitable for use behind any transport layer (HTTP service, CLI,
//! etc.)
//!
//! # Quick Start
//!
//! ```rust
//! use structure_lab::*;
//!
//! // A blueprint is a flat list of shapes
//! let shapes = vec![Shape::new(
//!     "deck",
//!     "rectangle",
//!     Point2::new(0.0, 0.0),
//!     Size2::new(300.0, 200.0),
//!     "steel",
//! )];
//!
//! // Replace the solid deck with honeycomb infill
//! let infill = convert_blueprint(shapes, "honeycomb", 10.0);
//! println!("Generated {} hexagon cells", infill.len());
//!
//! // Independently, score a primitive shape under load
//! let report = analyze_structure("Cube", "Honeycomb", 200.0, 40.0).unwrap();
//! println!("Verdict: {}", report.sim_result);
//! ```
//!
//! # Features
//!
//! - `serde` (default): Wire-format serialization for shapes, blueprints and
//!   analysis reports, plus JSON blueprint parsing
//!
//! Every operation is a pure, synchronous function over in-memory data; the
//! library holds no state between calls, so concurrent use needs no locking.

// Modules
pub mod error;
pub mod shape;
pub mod bounds;
pub mod generator;
pub mod convert;
pub mod analysis;

#[cfg(feature = "serde")]
pub mod blueprint;

// Re-export core types for convenience
pub use error::{Result, StructureError};
pub use shape::{Point2, Shape, Size2};
pub use bounds::BoundingBox;
pub use generator::{generate_bone, generate_honeycomb, DEFAULT_HEX_SIZE};
pub use convert::{convert_blueprint, convert_with_options, ConvertOptions};
pub use analysis::{
    analyze_structure, calc_stats, AnalysisReport, BaseStats, PrimitiveShape, Stats,
    StructureType, TypeModifiers, Verdict,
};

#[cfg(feature = "serde")]
pub use blueprint::Blueprint;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
