//! Built-in 5×7 bitmap face, always available.
//!
//! Glyphs are stored column-major: one byte per column, bit 0 is the top
//! row. Each glyph occupies a 6×8 cell (one column and one row of spacing)
//! and is scaled up by an integer factor.

use crate::render::Canvas;
use crate::types::{Colour, Point};

use super::TextExtent;

const GLYPH_ROWS: u32 = 7;
const CELL_WIDTH: u32 = 6;

/// Nominal em size of one unscaled cell.
const CELL_EM: f32 = 8.0;

/// Printable ASCII, 0x20 through 0x7E.
const ASCII: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];

const RIGHT_ARROW: [u8; 5] = [0x08, 0x08, 0x2A, 0x1C, 0x08];
const MISSING: [u8; 5] = [0x7F, 0x41, 0x41, 0x41, 0x7F];

fn glyph(c: char) -> &'static [u8; 5] {
    match c {
        ' '..='~' => ASCII.get(c as usize - 0x20).unwrap_or(&MISSING),
        '→' => &RIGHT_ARROW,
        _ => &MISSING,
    }
}

/// The bitmap face at a fixed integer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFace {
    scale: u32,
}

impl BuiltinFace {
    /// Pick the integer scale closest below the requested point size.
    pub fn for_size(size: f32) -> Self {
        let scale = (size / CELL_EM).floor();
        Self {
            scale: if scale.is_finite() && scale >= 1.0 {
                scale as u32
            } else {
                1
            },
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn measure(&self, text: &str) -> TextExtent {
        let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        let width = count
            .saturating_mul(CELL_WIDTH)
            .saturating_sub(1)
            .saturating_mul(self.scale);
        TextExtent {
            left: 0,
            top: 0,
            width,
            height: GLYPH_ROWS.saturating_mul(self.scale),
        }
    }

    /// Draw with the top-left of the first cell at `origin`.
    pub fn draw(&self, canvas: &mut Canvas, text: &str, origin: Point, colour: Colour) {
        let s = i32::try_from(self.scale).unwrap_or(i32::MAX);
        let advance = (CELL_WIDTH as i32).saturating_mul(s);
        let right_edge = i32::try_from(canvas.width()).unwrap_or(i32::MAX);

        for (i, c) in text.chars().enumerate() {
            let index = i32::try_from(i).unwrap_or(i32::MAX);
            let cell_x = origin.x.saturating_add(index.saturating_mul(advance));
            if cell_x >= right_edge {
                break;
            }
            for (col, &bits) in glyph(c).iter().enumerate() {
                for row in 0..GLYPH_ROWS {
                    if bits >> row & 1 == 0 {
                        continue;
                    }
                    let x = cell_x.saturating_add((col as i32).saturating_mul(s));
                    let y = origin.y.saturating_add((row as i32).saturating_mul(s));
                    canvas.fill_rect(
                        Point::new(x, y),
                        Point::new(x.saturating_add(s - 1), y.saturating_add(s - 1)),
                        colour,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_from_size() {
        assert_eq!(BuiltinFace::for_size(42.0).scale(), 5);
        assert_eq!(BuiltinFace::for_size(18.0).scale(), 2);
        assert_eq!(BuiltinFace::for_size(14.0).scale(), 1);
        assert_eq!(BuiltinFace::for_size(0.0).scale(), 1);
        assert_eq!(BuiltinFace::for_size(f32::NAN).scale(), 1);
    }

    #[test]
    fn test_measure() {
        let face = BuiltinFace::for_size(16.0);
        let extent = face.measure("Phim");
        assert_eq!(extent.width, (4 * 6 - 1) * 2);
        assert_eq!(extent.height, 14);
        assert_eq!(face.measure("").width, 0);
    }

    #[test]
    fn test_huge_scale_saturates() {
        let face = BuiltinFace::for_size(f32::MAX);
        let extent = face.measure("Install Phim");
        assert_eq!(extent.width, u32::MAX);
        assert_eq!(extent.height, u32::MAX);

        let mut canvas = Canvas::new(20, 20, Colour::BLACK);
        face.draw(&mut canvas, "LB", Point::new(-5, -5), Colour::WHITE);
        // the top-left dot of 'L' alone covers the canvas
        assert_eq!(canvas.pixel(19, 19), Some(Colour::WHITE));
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(glyph('A'), &ASCII[0x21]);
        assert_eq!(glyph('~'), &ASCII[94]);
        assert_eq!(glyph('→'), &RIGHT_ARROW);
        assert_eq!(glyph('📁'), &MISSING);
    }

    #[test]
    fn test_draw_stays_inside_extent() {
        let face = BuiltinFace::for_size(16.0);
        let mut canvas = Canvas::new(80, 30, Colour::BLACK);
        let origin = Point::new(5, 5);
        face.draw(&mut canvas, "Apps", origin, Colour::WHITE);

        let extent = face.measure("Apps");
        let mut lit = 0;
        for (x, y, px) in canvas.as_image().enumerate_pixels() {
            if px.0 != [0, 0, 0] {
                lit += 1;
                assert!(x >= 5 && x < 5 + extent.width, "x {x} outside");
                assert!(y >= 5 && y < 5 + extent.height, "y {y} outside");
            }
        }
        assert!(lit > 0);
    }
}
