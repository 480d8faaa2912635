//! The opaque pixel buffer every drawing stage writes into.

use image::RgbImage;

use crate::types::{Colour, Point};

/// An opaque RGB canvas.
///
/// The buffer never carries alpha: translucent colours are blended into it
/// as they are painted, so the image can be exported as-is.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with an opaque background colour.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.to_rgb()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the colour at a position, if it is on the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|&px| Colour::from(px))
    }

    /// Overwrite one full-width row, ignoring any blend weight.
    pub fn fill_row(&mut self, y: u32, colour: Colour) {
        if y >= self.height() {
            return;
        }
        let px = colour.to_rgb();
        for x in 0..self.width() {
            self.image.put_pixel(x, y, px);
        }
    }

    /// Fill an inclusive rectangle, blending by the colour's weight.
    pub fn fill_rect(&mut self, min: Point, max: Point, colour: Colour) {
        let x0 = min.x.max(0);
        let y0 = min.y.max(0);
        let x1 = max.x.min(self.width() as i32 - 1);
        let y1 = max.y.min(self.height() as i32 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.blend_pixel(x, y, colour, 1.0);
            }
        }
    }

    /// Blend a colour into one pixel; off-canvas positions are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, colour: Colour, coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(px) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            *px = colour.blend_onto(*px, coverage);
        }
    }

    /// Alpha-over one premultiplied RGBA pixel onto the canvas.
    pub(crate) fn composite_premultiplied(&mut self, x: u32, y: u32, src: [u8; 4]) {
        let alpha = src[3];
        if alpha == 0 {
            return;
        }
        if let Some(px) = self.image.get_pixel_mut_checked(x, y) {
            if alpha == u8::MAX {
                px.0 = [src[0], src[1], src[2]];
                return;
            }
            let keep = u32::from(u8::MAX - alpha);
            for (dst, s) in px.0.iter_mut().zip(src) {
                let under = (u32::from(*dst) * keep + 127) / 255;
                *dst = u32::from(s).saturating_add(under).min(255) as u8;
            }
        }
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_filled() {
        let canvas = Canvas::new(4, 3, Colour::rgb(10, 20, 30));
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.pixel(3, 2), Some(Colour::rgb(10, 20, 30)));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut canvas = Canvas::new(4, 4, Colour::BLACK);
        canvas.fill_rect(Point::new(-5, -5), Point::new(1, 1), Colour::WHITE);

        assert_eq!(canvas.pixel(0, 0), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(1, 1), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(2, 2), Some(Colour::BLACK));
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut canvas = Canvas::new(2, 2, Colour::BLACK);
        canvas.fill_rect(Point::new(0, 0), Point::new(1, 1), Colour::WHITE.with_alpha(60));
        assert_eq!(canvas.pixel(1, 1), Some(Colour::grey(60)));
    }

    #[test]
    fn test_composite_premultiplied() {
        let mut canvas = Canvas::new(3, 1, Colour::grey(200));
        canvas.composite_premultiplied(0, 0, [0, 0, 0, 0]);
        canvas.composite_premultiplied(1, 0, [10, 20, 30, 255]);
        // half-transparent white: 128 + 200 * 127 / 255
        canvas.composite_premultiplied(2, 0, [128, 128, 128, 128]);
        canvas.composite_premultiplied(9, 0, [255, 255, 255, 255]);

        assert_eq!(canvas.pixel(0, 0), Some(Colour::grey(200)));
        assert_eq!(canvas.pixel(1, 0), Some(Colour::rgb(10, 20, 30)));
        assert_eq!(canvas.pixel(2, 0), Some(Colour::grey(228)));
    }

    #[test]
    fn test_blend_pixel_ignores_off_canvas() {
        let mut canvas = Canvas::new(2, 2, Colour::BLACK);
        canvas.blend_pixel(-1, 0, Colour::WHITE, 1.0);
        canvas.blend_pixel(0, 2, Colour::WHITE, 1.0);
        assert!(canvas.as_image().pixels().all(|px| px.0 == [0, 0, 0]));
    }
}
