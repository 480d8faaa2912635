//! Resolved font handles: measurement and glyph drawing.

use std::path::Path;

use ab_glyph::{point, Font as _, FontArc, Glyph, PxScale, ScaleFont};

use crate::error::{BgError, Result};
use crate::render::Canvas;
use crate::types::{Colour, FontRole, Point};

use super::{BuiltinFace, FontSource};

/// Ink extent of a string relative to its drawing origin.
///
/// `left`/`top` are the offset of the first inked pixel from the origin,
/// `width`/`height` the size of the inked box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// The glyph source behind a `Font`.
#[derive(Clone)]
enum Face {
    Outline { font: FontArc, scale: PxScale },
    Builtin(BuiltinFace),
}

/// A font bound to a role for the whole run.
#[derive(Clone)]
pub struct Font {
    role: FontRole,
    size: f32,
    source: FontSource,
    face: Face,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("role", &self.role)
            .field("size", &self.size)
            .field("source", &self.source)
            .finish()
    }
}

impl Font {
    /// Wrap a parsed outline font. `size` is the em size in pixels.
    pub fn outline(role: FontRole, size: f32, path: &Path, font: FontArc) -> Self {
        let height = font.height_unscaled();
        let scale = match font.units_per_em() {
            Some(upem) if upem > 0.0 && height.is_finite() && height > 0.0 => {
                PxScale::from(size * height / upem)
            }
            _ => PxScale::from(size),
        };

        Self {
            role,
            size,
            source: FontSource::File(path.to_path_buf()),
            face: Face::Outline { font, scale },
        }
    }

    pub fn builtin(role: FontRole, size: f32) -> Self {
        Self {
            role,
            size,
            source: FontSource::Builtin,
            face: Face::Builtin(BuiltinFace::for_size(size)),
        }
    }

    pub fn role(&self) -> FontRole {
        self.role
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Builtin(_))
    }

    /// Measure the inked box of `text` drawn at the origin.
    pub fn measure(&self, text: &str) -> Result<TextExtent> {
        match &self.face {
            Face::Builtin(face) => Ok(face.measure(text)),
            Face::Outline { font, scale } => measure_outline(font, *scale, text),
        }
    }

    /// Draw `text` with its ascender line at `origin.y`.
    pub fn draw(&self, canvas: &mut Canvas, text: &str, origin: Point, colour: Colour) {
        match &self.face {
            Face::Builtin(face) => face.draw(canvas, text, origin, colour),
            Face::Outline { font, scale } => {
                for glyph in layout(font, *scale, text, origin) {
                    let Some(outlined) = font.outline_glyph(glyph) else {
                        continue;
                    };
                    let bounds = outlined.px_bounds();
                    let (bx, by) = (bounds.min.x as i32, bounds.min.y as i32);
                    outlined.draw(|x, y, coverage| {
                        canvas.blend_pixel(bx + x as i32, by + y as i32, colour, coverage);
                    });
                }
            }
        }
    }
}

/// Position glyphs along one line, applying kerning.
fn layout(font: &FontArc, scale: PxScale, text: &str, origin: Point) -> Vec<Glyph> {
    let scaled = font.as_scaled(scale);
    let baseline = origin.y as f32 + scaled.ascent();
    let mut caret = origin.x as f32;
    let mut previous = None;
    let mut glyphs = Vec::with_capacity(text.len());

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    glyphs
}

fn measure_outline(font: &FontArc, scale: PxScale, text: &str) -> Result<TextExtent> {
    let scaled = font.as_scaled(scale);
    let (ascent, descent) = (scaled.ascent(), scaled.descent());
    if !ascent.is_finite() || !descent.is_finite() {
        return Err(BgError::Font {
            message: "font reports non-finite vertical metrics".to_string(),
            help: Some("Remove this font from the candidate list".to_string()),
        });
    }

    let glyphs = layout(font, scale, text, Point::default());
    let advance = glyphs
        .last()
        .map(|g| g.position.x + scaled.h_advance(g.id))
        .unwrap_or(0.0);

    let mut ink: Option<ab_glyph::Rect> = None;
    for glyph in glyphs {
        if let Some(outlined) = font.outline_glyph(glyph) {
            let b = outlined.px_bounds();
            ink = Some(match ink {
                None => b,
                Some(acc) => ab_glyph::Rect {
                    min: point(acc.min.x.min(b.min.x), acc.min.y.min(b.min.y)),
                    max: point(acc.max.x.max(b.max.x), acc.max.y.max(b.max.y)),
                },
            });
        }
    }

    // Whitespace-only strings have no ink; fall back to the advance box.
    let extent = match ink {
        Some(b) => TextExtent {
            left: b.min.x.floor() as i32,
            top: b.min.y.floor() as i32,
            width: (b.max.x - b.min.x).ceil().max(0.0) as u32,
            height: (b.max.y - b.min.y).ceil().max(0.0) as u32,
        },
        None => TextExtent {
            left: 0,
            top: 0,
            width: advance.ceil().max(0.0) as u32,
            height: (ascent - descent).ceil().max(0.0) as u32,
        },
    };

    Ok(extent)
}
