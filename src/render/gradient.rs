//! Vertical gradient fill for the canvas base layer.

use crate::types::{Colour, GradientSpec};

use super::Canvas;

/// Colour of scan-line `y` on a canvas `height` rows tall.
///
/// Each channel is `start + (end - start) * y / height`, truncated.
pub fn row_colour(spec: &GradientSpec, y: u32, height: u32) -> Colour {
    if height == 0 {
        return spec.start;
    }
    let channel = |s: u8, e: u8| {
        let delta = (e as f64 - s as f64) * y as f64;
        (s as f64 + delta / height as f64) as u8
    };

    Colour::rgb(
        channel(spec.start.r, spec.end.r),
        channel(spec.start.g, spec.end.g),
        channel(spec.start.b, spec.end.b),
    )
}

/// Overwrite every row of the canvas with the interpolated colour.
pub fn paint_gradient(canvas: &mut Canvas, spec: &GradientSpec) {
    let height = canvas.height();
    for y in 0..height {
        canvas.fill_row(y, row_colour(spec, y, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PURPLE: Colour = Colour::rgb(118, 75, 162);
    const BLUE: Colour = Colour::rgb(102, 126, 234);

    fn within_one(a: u8, b: u8) -> bool {
        (a as i16 - b as i16).abs() <= 1
    }

    #[test]
    fn test_first_and_last_rows() {
        let spec = GradientSpec::vertical(PURPLE, BLUE);
        for height in [1, 100, 400, 1000] {
            assert_eq!(row_colour(&spec, 0, height), PURPLE);
            if height > 1 {
                let last = row_colour(&spec, height - 1, height);
                assert!(within_one(last.r, BLUE.r), "r at h={height}: {last}");
                assert!(within_one(last.g, BLUE.g), "g at h={height}: {last}");
                assert!(within_one(last.b, BLUE.b), "b at h={height}: {last}");
            }
        }
    }

    #[test]
    fn test_rows_are_monotonic_per_channel() {
        let spec = GradientSpec::vertical(PURPLE, BLUE);
        let height = 400;
        let rows: Vec<Colour> = (0..height).map(|y| row_colour(&spec, y, height)).collect();

        for pair in rows.windows(2) {
            // red falls, green and blue rise
            assert!(pair[1].r <= pair[0].r);
            assert!(pair[1].g >= pair[0].g);
            assert!(pair[1].b >= pair[0].b);
        }
    }

    #[test]
    fn test_truncates_rather_than_rounds() {
        let spec = GradientSpec::vertical(Colour::grey(245), Colour::grey(250));
        // 245 + 5 * 399/400 = 249.9875
        assert_eq!(row_colour(&spec, 399, 400), Colour::grey(249));
        // 118 - 16 * 1/400 = 117.96
        let spec = GradientSpec::vertical(PURPLE, BLUE);
        assert_eq!(row_colour(&spec, 1, 400).r, 117);
    }

    #[test]
    fn test_paint_overwrites_every_pixel() {
        let mut canvas = Canvas::new(5, 10, Colour::WHITE);
        let spec = GradientSpec::vertical(Colour::BLACK, Colour::grey(100));
        paint_gradient(&mut canvas, &spec);

        for y in 0..10 {
            let expected = Colour::grey((100 * y / 10) as u8);
            for x in 0..5 {
                assert_eq!(canvas.pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_flat_gradient() {
        let mut canvas = Canvas::new(3, 3, Colour::WHITE);
        paint_gradient(&mut canvas, &GradientSpec::flat(Colour::rgb(1, 2, 3)));
        assert_eq!(canvas.pixel(2, 2), Some(Colour::rgb(1, 2, 3)));
    }
}
