//! Rendering module for dmgbg.
//!
//! Each stage draws into a shared `Canvas`: gradient base, translucent
//! overlays, centred text, icon placeholders and the connecting arrow.
//! `export` writes the finished canvas as PNG.

mod canvas;
mod export;
mod gradient;
mod layer;
mod overlay;
mod shape;
mod text;

pub use canvas::Canvas;
pub use export::{dpi_to_ppm, write_png};
pub use gradient::{paint_gradient, row_colour};
pub use layer::Layer;
pub use overlay::composite_overlays;
pub use shape::{draw_arrow, draw_icon, ArrowGeometry};
pub use text::{centre_offset, draw_centred, draw_centred_in};
