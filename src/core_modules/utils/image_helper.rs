// The two external seams of the detection core: decoding a source image into
// a `PixelGrid` and encoding a grid back out as a PNG. Neither is part of the
// computation; the pipeline itself runs headless on grids.

use crate::core_modules::error::DetectionError;
use crate::core_modules::pixel_grid::PixelGrid;
use image::ImageEncoder;

/// Decodes the image at `path` into an RGBA `PixelGrid`.
/// A missing or undecodable file is reported before the pipeline ever runs.
pub fn load(path: &str) -> Result<PixelGrid, DetectionError> {
    let decoded = image::open(path)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    PixelGrid::from_rgba_buffer(width, height, decoded.as_raw())
}

/// Encodes a grid as a PNG at `path`.
pub fn save(path: &str, grid: &PixelGrid) -> Result<(), image::error::ImageError> {
    let output = std::fs::File::create(path)?;
    let encoder = image::codecs::png::PngEncoder::new(output);

    encoder.write_image(
        &grid.to_rgba_bytes(),
        grid.width(),
        grid.height(),
        image::ExtendedColorType::Rgba8,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel::pixel::Pixel;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn save_white_file() {
        let grid = PixelGrid::filled(64, 64, Pixel::new(255, 255, 255, 255));
        let path = temp_path("plate_vision_white.png");

        save(&path, &grid).expect("Error Saving File.");
    }

    #[test]
    fn save_then_load_roundtrips_the_grid() {
        let mut grid = PixelGrid::filled(16, 9, Pixel::gray(0));
        for y in 0..9 {
            for x in 0..16 {
                grid.set(x, y, Pixel::new((x * 16) as u8, (y * 28) as u8, 7, 255));
            }
        }
        let path = temp_path("plate_vision_roundtrip.png");

        save(&path, &grid).expect("Error Saving File.");
        let loaded = load(&path).expect("Error Loading File.");
        assert_eq!(loaded, grid);
    }

    #[test]
    fn loading_a_missing_file_reports_image_load() {
        let result = load(&temp_path("plate_vision_does_not_exist.png"));
        assert!(matches!(result, Err(DetectionError::ImageLoad { .. })));
    }
}
