//! PNG output for finished canvases.
//!
//! Writes 8-bit RGB with an optional `pHYs` resolution chunk. The file is
//! written next to its destination and renamed into place, so a failed
//! export never leaves a partial image behind.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{BgError, Result};

use super::Canvas;

const METRES_PER_INCH: f64 = 0.0254;

/// Convert dots-per-inch to the pixels-per-metre PNG stores.
pub fn dpi_to_ppm(dpi: u32) -> u32 {
    (dpi as f64 / METRES_PER_INCH).round() as u32
}

/// Write a canvas to `path` as PNG, creating missing parent directories.
pub fn write_png(canvas: &Canvas, path: &Path, dpi: Option<u32>) -> Result<()> {
    let io_err = |message: String| BgError::Io {
        path: path.to_path_buf(),
        message,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)
            .map_err(|e| io_err(format!("Failed to create output directory: {}", e)))?;
    }

    let staging = NamedTempFile::new_in(parent)
        .map_err(|e| io_err(format!("Failed to create temporary file: {}", e)))?;

    {
        let mut writer = BufWriter::new(staging.as_file());
        encode(canvas, &mut writer, dpi)
            .map_err(|e| io_err(format!("Failed to write PNG: {}", e)))?;
        writer
            .flush()
            .map_err(|e| io_err(format!("Failed to write PNG: {}", e)))?;
    }

    staging
        .persist(path)
        .map_err(|e| io_err(format!("Failed to move PNG into place: {}", e.error)))?;

    Ok(())
}

fn encode<W: Write>(
    canvas: &Canvas,
    out: W,
    dpi: Option<u32>,
) -> std::result::Result<(), png::EncodingError> {
    let image = canvas.as_image();
    let mut encoder = png::Encoder::new(out, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    if let Some(dpi) = dpi {
        let ppm = dpi_to_ppm(dpi);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use std::fs::File;
    use std::io::BufReader;
    use tempfile::tempdir;

    fn read_info(path: &Path) -> (u32, u32, png::ColorType, Option<png::PixelDimensions>) {
        let decoder = png::Decoder::new(BufReader::new(File::open(path).unwrap()));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        (info.width, info.height, info.color_type, info.pixel_dims)
    }

    #[test]
    fn test_dpi_to_ppm() {
        assert_eq!(dpi_to_ppm(144), 5669);
        assert_eq!(dpi_to_ppm(72), 2835);
    }

    #[test]
    fn test_write_png_rgb_with_dpi() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bg.png");
        let canvas = Canvas::new(6, 4, Colour::rgb(118, 75, 162));

        write_png(&canvas, &path, Some(144)).unwrap();

        let (w, h, color, dims) = read_info(&path);
        assert_eq!((w, h), (6, 4));
        assert_eq!(color, png::ColorType::Rgb);
        let dims = dims.unwrap();
        assert_eq!((dims.xppu, dims.yppu), (5669, 5669));
        assert_eq!(dims.unit, png::Unit::Meter);

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
        assert_eq!(img.to_rgb8().get_pixel(5, 3).0, [118, 75, 162]);
    }

    #[test]
    fn test_write_png_without_dpi() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.png");
        write_png(&Canvas::new(2, 2, Colour::WHITE), &path, None).unwrap();

        let (_, _, _, dims) = read_info(&path);
        assert!(dims.is_none());
    }

    #[test]
    fn test_write_png_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dmg-assets").join("nested").join("bg.png");
        write_png(&Canvas::new(2, 2, Colour::WHITE), &path, None).unwrap();

        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() > 0);
        // no staging files left behind
        let entries: Vec<_> = fs::read_dir(path.parent().unwrap()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_png_into_file_parent_fails_cleanly() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();
        let path = blocker.join("bg.png");

        let err = write_png(&Canvas::new(2, 2, Colour::WHITE), &path, None).unwrap_err();
        assert!(matches!(err, BgError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_png_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bg.png");
        fs::write(&path, b"stale").unwrap();

        write_png(&Canvas::new(3, 3, Colour::BLACK), &path, None).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), 3);
    }
}
