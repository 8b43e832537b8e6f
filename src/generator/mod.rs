//! Structural pattern generation
//!
//! Replaces a blueprint's shapes with a structural infill pattern tiled over
//! the collection's bounding box.

mod bone;
mod honeycomb;

pub use bone::{
    generate_bone, BONE_MATERIAL, HORIZONTAL_BARS, HORIZONTAL_BAR_HEIGHT, VERTICAL_BARS,
    VERTICAL_BAR_WIDTH,
};
pub use honeycomb::{generate_honeycomb, DEFAULT_HEX_SIZE, HONEYCOMB_MATERIAL};
