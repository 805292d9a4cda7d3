// THEORY:
// The luma extractor is the first pipeline stage: it collapses the three color
// channels into one intensity channel so every later stage can reason about a
// single number per sample. The channel average is deliberately the plain
// (R+G+B)/3 with floor division rather than a perceptual weighting; the
// downstream stages only care about relative edge contrast, not colorimetric
// brightness. The transform is pure and traversal-order independent, and it
// returns a fresh grid so the decoded original survives for the cropping stage.

use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::pixel_grid::PixelGrid;

/// Replaces every sample's R,G,B with their integer average; alpha unchanged.
pub fn extract_luma(grid: &PixelGrid) -> PixelGrid {
    let mut output = PixelGrid::filled(grid.width(), grid.height(), Pixel::default());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pixel = grid.get(x, y);
            let average =
                ((pixel.red as u16 + pixel.green as u16 + pixel.blue as u16) / 3) as u8;
            output.set(x, y, Pixel::new(average, average, average, pixel.alpha));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_uses_floor_division() {
        let mut grid = PixelGrid::filled(1, 1, Pixel::default());
        grid.set(0, 0, Pixel::new(10, 20, 35, 128));

        let luma = extract_luma(&grid);
        // (10 + 20 + 35) / 3 = 21 with the remainder dropped.
        assert_eq!(luma.get(0, 0), Pixel::new(21, 21, 21, 128));
    }

    #[test]
    fn already_gray_input_is_unchanged() {
        let mut grid = PixelGrid::filled(5, 4, Pixel::default());
        for y in 0..4 {
            for x in 0..5 {
                let value = (x * 37 + y * 11) as u8;
                grid.set(x, y, Pixel::new(value, value, value, 200));
            }
        }

        let luma = extract_luma(&grid);
        assert_eq!(luma, grid);
    }

    #[test]
    fn white_stays_white_and_black_stays_black() {
        let mut grid = PixelGrid::filled(2, 1, Pixel::new(0, 0, 0, 255));
        grid.set(1, 0, Pixel::new(255, 255, 255, 255));

        let luma = extract_luma(&grid);
        assert_eq!(luma.intensity(0, 0), 0);
        assert_eq!(luma.intensity(1, 0), 255);
    }
}
