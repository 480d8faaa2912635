//! Centred text layout.

use crate::error::Result;
use crate::fonts::Font;
use crate::types::{Colour, IconPlaceholder, Point, TextBlock};

use super::Canvas;

/// Offset that centres `inner` pixels within `outer` pixels.
///
/// Uses floor division, so odd leftovers put the extra pixel on the right.
pub fn centre_offset(outer: u32, inner: u32) -> i32 {
    (outer as i64 - inner as i64).div_euclid(2) as i32
}

/// Draw a text block centred horizontally on the canvas.
///
/// The shadow, if any, goes down first at `(x + dx, y + dy)`. Returns the
/// position the main text was drawn at (left edge of the ink, `block.y`).
pub fn draw_centred(canvas: &mut Canvas, font: &Font, block: &TextBlock) -> Result<Point> {
    let extent = font.measure(&block.text)?;
    let x = centre_offset(canvas.width(), extent.width);
    let origin = Point::new(x - extent.left, block.y);

    if let Some(shadow) = &block.shadow {
        let at = Point::new(origin.x + shadow.offset.x, origin.y + shadow.offset.y);
        font.draw(canvas, &block.text, at, shadow.colour);
    }
    font.draw(canvas, &block.text, origin, block.colour);

    Ok(Point::new(x, block.y))
}

/// Draw a label centred on both axes inside an icon.
///
/// Returns the top-left corner of the label's ink.
pub fn draw_centred_in(
    canvas: &mut Canvas,
    font: &Font,
    text: &str,
    icon: &IconPlaceholder,
    colour: Colour,
) -> Result<Point> {
    let extent = font.measure(text)?;
    let x = icon.origin.x + centre_offset(icon.size, extent.width);
    let y = icon.origin.y + centre_offset(icon.size, extent.height);

    font.draw(
        canvas,
        text,
        Point::new(x - extent.left, y - extent.top),
        colour,
    );

    Ok(Point::new(x, y))
}
