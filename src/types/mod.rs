//! Core domain types for dmgbg.
//!
//! - `Colour` - RGBA colour values where alpha is a blend weight
//! - `Point`, `BoundingBox` - signed pixel geometry
//! - `Scene` and its parts - the immutable description of one image

mod colour;
mod geometry;
mod scene;

pub use colour::Colour;
pub use geometry::{BoundingBox, Point};
pub use scene::{
    ArrowSpec, ArrowStyle, FontRole, GradientSpec, IconPlaceholder, OverlayGeometry,
    OverlayShape, Scene, Shadow, TextBlock,
};
