//! Translucent decorative shapes composited over the base gradient.
//!
//! All shapes share one transparent layer. Drawing onto the layer replaces
//! pixels, so where shapes overlap the later one wins; the layer is then
//! blended onto the opaque canvas in a single pass.

use tiny_skia::BlendMode;

use crate::error::Result;
use crate::types::{OverlayGeometry, OverlayShape};

use super::layer::{self, Layer};
use super::Canvas;

/// Draw one shape, replacing the layer pixels it covers.
fn draw_overlay(layer: &mut Layer, shape: &OverlayShape) {
    match &shape.geometry {
        OverlayGeometry::Ellipse(bounds) => {
            if let Some(path) = layer::oval(*bounds) {
                layer.fill(&path, shape.colour, BlendMode::Source);
            }
        }
        OverlayGeometry::Polygon(points) => {
            if let Some(path) = layer::polygon(points) {
                layer.fill(&path, shape.colour, BlendMode::Source);
            }
        }
        OverlayGeometry::Line { from, to, width } => {
            if let Some(path) = layer::segment(*from, *to) {
                let stroke = (*width).max(1) as f32;
                layer.stroke(&path, shape.colour, stroke, BlendMode::Source);
            }
        }
    }
}

/// Draw `shapes` in order on one layer and blend it onto the canvas.
pub fn composite_overlays(canvas: &mut Canvas, shapes: &[OverlayShape]) -> Result<()> {
    if shapes.is_empty() {
        return Ok(());
    }
    let mut layer = Layer::for_canvas(canvas)?;
    for shape in shapes {
        draw_overlay(&mut layer, shape);
    }
    layer.composite_onto(canvas);
    Ok(())
}
