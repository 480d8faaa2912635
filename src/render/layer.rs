//! Vector shapes on a transparent layer.
//!
//! Shapes are filled and stroked with tiny-skia into a premultiplied RGBA
//! pixmap the size of the canvas; the pixmap is then alpha-composited onto
//! the opaque canvas in one pass. Geometry comes in whole pixels: a
//! `BoundingBox` covers its `max` row and column, and a `Point` used as a
//! path vertex stands for that pixel's centre.

use tiny_skia::{BlendMode, FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::error::{BgError, Result};
use crate::types::{BoundingBox, Colour, Point};

use super::Canvas;

/// Control-point distance of a quarter circle drawn as one cubic.
const KAPPA: f32 = 0.552_284_8;

/// A transparent drawing surface matching a canvas.
pub struct Layer {
    pixmap: Pixmap,
}

impl Layer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Pixmap::new(width, height)
            .map(|pixmap| Self { pixmap })
            .ok_or_else(|| BgError::Render {
                message: format!("cannot allocate a {}x{} drawing layer", width, height),
            })
    }

    pub fn for_canvas(canvas: &Canvas) -> Result<Self> {
        Self::new(canvas.width(), canvas.height())
    }

    /// Fill `path`. With `BlendMode::Source` the covered pixels are
    /// replaced rather than blended.
    pub fn fill(&mut self, path: &Path, colour: Colour, mode: BlendMode) {
        self.pixmap.fill_path(
            path,
            &paint(colour, mode),
            FillRule::EvenOdd,
            Transform::identity(),
            None,
        );
    }

    /// Stroke `path` with butt caps and mitred joins.
    pub fn stroke(&mut self, path: &Path, colour: Colour, width: f32, mode: BlendMode) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &paint(colour, mode),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Premultiplied RGBA at a position, if it is on the layer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|px| [px.red(), px.green(), px.blue(), px.alpha()])
    }

    /// Alpha-over the whole layer onto an opaque canvas.
    pub fn composite_onto(&self, canvas: &mut Canvas) {
        let width = self.pixmap.width();
        for (i, px) in self.pixmap.pixels().iter().enumerate() {
            if px.alpha() == 0 {
                continue;
            }
            let (x, y) = (i as u32 % width, i as u32 / width);
            canvas.composite_premultiplied(x, y, [px.red(), px.green(), px.blue(), px.alpha()]);
        }
    }
}

fn paint(colour: Colour, mode: BlendMode) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(colour.r, colour.g, colour.b, colour.a);
    paint.anti_alias = true;
    paint.blend_mode = mode;
    paint
}

fn pixel_centre(p: Point) -> (f32, f32) {
    (p.x as f32 + 0.5, p.y as f32 + 0.5)
}

/// The area an inclusive bounding box covers, edge to edge.
pub fn pixel_rect(bounds: BoundingBox) -> Option<Rect> {
    Rect::from_ltrb(
        bounds.min.x as f32,
        bounds.min.y as f32,
        (bounds.max.x + 1) as f32,
        (bounds.max.y + 1) as f32,
    )
}

/// Shrink a rectangle by `by` on every side.
pub fn inset(rect: Rect, by: f32) -> Option<Rect> {
    Rect::from_ltrb(
        rect.left() + by,
        rect.top() + by,
        rect.right() - by,
        rect.bottom() - by,
    )
}

/// The ellipse inscribed in a bounding box.
pub fn oval(bounds: BoundingBox) -> Option<Path> {
    PathBuilder::from_oval(pixel_rect(bounds)?)
}

/// A closed polygon through pixel centres. Needs at least three points.
pub fn polygon(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }

    let mut pb = PathBuilder::new();
    let (x, y) = pixel_centre(*first);
    pb.move_to(x, y);
    for &p in rest {
        let (x, y) = pixel_centre(p);
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

/// An open segment between two pixel centres.
pub fn segment(from: Point, to: Point) -> Option<Path> {
    let mut pb = PathBuilder::new();
    let (x, y) = pixel_centre(from);
    pb.move_to(x, y);
    let (x, y) = pixel_centre(to);
    pb.line_to(x, y);
    pb.finish()
}

/// A rectangle with circular corners, the radius clamped to fit.
pub fn rounded_rect(rect: Rect, radius: f32) -> Option<Path> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if r <= 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }

    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    pb.close();
    pb.finish()
}
