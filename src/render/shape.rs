//! Icon placeholders and the arrow that connects them.

use tiny_skia::BlendMode;

use crate::error::Result;
use crate::fonts::Font;
use crate::types::{ArrowStyle, IconPlaceholder, Point};

use super::layer::{self, Layer};
use super::text::draw_centred_in;
use super::Canvas;

/// Draw an icon placeholder: fill, then outline, then the optional label.
///
/// The outline is stroked inside the icon's bounds, following the same
/// rounded corners as the fill.
pub fn draw_icon(canvas: &mut Canvas, icon: &IconPlaceholder, label_font: &Font) -> Result<()> {
    let mut shapes = Layer::for_canvas(canvas)?;
    let radius = icon.radius as f32;

    if let Some(rect) = layer::pixel_rect(icon.bounds()) {
        if let Some(path) = layer::rounded_rect(rect, radius) {
            shapes.fill(&path, icon.fill, BlendMode::SourceOver);
        }

        let width = icon.outline_width as f32;
        let half = width / 2.0;
        if width > 0.0 {
            let edge = layer::inset(rect, half)
                .and_then(|inner| layer::rounded_rect(inner, (radius - half).max(0.0)));
            if let Some(path) = edge {
                shapes.stroke(&path, icon.outline, width, BlendMode::SourceOver);
            }
        }
    }
    shapes.composite_onto(canvas);

    if let Some(label) = &icon.label {
        draw_centred_in(canvas, label_font, label, icon, icon.label_colour)?;
    }

    Ok(())
}

/// Where a left-to-right arrow between two icons goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowGeometry {
    /// Start of the shaft, just right of the source icon.
    pub start: Point,
    /// End of the shaft, where the head's base begins.
    pub shaft_end: Point,
    /// Point of the head, just left of the destination icon.
    pub tip: Point,
    /// Head vertices: tip, upper base, lower base.
    pub head: [Point; 3],
}

impl ArrowGeometry {
    /// Lay out an arrow from `from` to `to`, which must sit left of `to`.
    pub fn between(from: &IconPlaceholder, to: &IconPlaceholder, style: &ArrowStyle) -> Self {
        let mid_y = from.mid_y();
        let start = Point::new(from.right() + style.gap, mid_y);
        let tip = Point::new(to.left() - style.gap, mid_y);
        let base_x = tip.x - style.head_length;

        Self {
            start,
            shaft_end: Point::new(base_x, mid_y),
            tip,
            head: [
                tip,
                Point::new(base_x, mid_y - style.head_half_width),
                Point::new(base_x, mid_y + style.head_half_width),
            ],
        }
    }
}

/// Draw the shaft and then the filled head.
pub fn draw_arrow(canvas: &mut Canvas, geometry: &ArrowGeometry, style: &ArrowStyle) -> Result<()> {
    let mut shapes = Layer::for_canvas(canvas)?;

    if let Some(shaft) = layer::segment(geometry.start, geometry.shaft_end) {
        let width = style.line_width.max(1) as f32;
        shapes.stroke(&shaft, style.colour, width, BlendMode::SourceOver);
    }
    if let Some(head) = layer::polygon(&geometry.head) {
        shapes.fill(&head, style.colour, BlendMode::SourceOver);
    }

    shapes.composite_onto(canvas);
    Ok(())
}
