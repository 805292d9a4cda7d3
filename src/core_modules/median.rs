// THEORY:
// The median denoiser is the noise-reduction stage. Sensor speckle shows up as
// isolated extreme samples; ranking the 3x3 neighborhood and keeping the middle
// value removes those outliers without blurring edges the way a mean would.
// That matters, because the very next stage measures edge contrast.
//
// The boundary policy is deliberate: the outermost rows and columns have no
// complete neighborhood, so they are left at the background value of 0 rather
// than mirrored or clamped. Every downstream stage shares this policy, so the
// one-pixel dead frame stays consistent through the whole pipeline.

use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::pixel_grid::PixelGrid;

const WINDOW_SAMPLES: usize = 9;
const MEDIAN_INDEX: usize = 4;

/// Applies a 3x3 median filter to a single-channel grid.
/// Interior samples take the true median of their 9-sample neighborhood;
/// boundary samples stay at intensity 0.
pub fn median_denoise(grid: &PixelGrid) -> PixelGrid {
    let width = grid.width();
    let height = grid.height();
    let mut output = PixelGrid::filled(width, height, Pixel::gray(0));

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut window = [0u8; WINDOW_SAMPLES];
            let mut index = 0;
            for ky in -1..=1i32 {
                for kx in -1..=1i32 {
                    window[index] =
                        grid.intensity((x as i32 + kx) as u32, (y as i32 + ky) as u32);
                    index += 1;
                }
            }
            window.sort_unstable();
            output.set(x, y, Pixel::gray(window[MEDIAN_INDEX]));
        }
    }
    output
}
