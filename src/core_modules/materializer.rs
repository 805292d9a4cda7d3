// THEORY:
// The materializer turns abstract row intervals back into image data. Each
// band is cropped out of the *original* decoded grid, not any derived stage
// output, so the caller gets the plate region with its full color content.
// A fixed trailing margin is added past the detected interval: the densest
// edge rows sit on the character strokes, and the plate body typically extends
// a little below them.

use crate::core_modules::band_extractor::BandCandidate;
use crate::core_modules::pixel_grid::PixelGrid;

/// A materialized detection: the band that was found and the full-width crop
/// of the original image covering it.
#[derive(Debug, Clone)]
pub struct PlateCandidate {
    pub band: BandCandidate,
    pub crop: PixelGrid,
}

/// Crops the original grid for each band, spanning rows
/// `[start_row, min(end_row + trailing_margin, height))` at full width.
/// The input order (descending peak strength) is preserved.
pub fn materialize_candidates(
    original: &PixelGrid,
    bands: &[BandCandidate],
    trailing_margin: usize,
) -> Vec<PlateCandidate> {
    let height = original.height() as usize;
    bands
        .iter()
        .map(|band| {
            // A zero margin still yields at least the band's own first row.
            let end_row = (band.end_row + trailing_margin)
                .min(height)
                .max(band.start_row + 1);
            PlateCandidate {
                band: *band,
                crop: original.crop_rows(band.start_row, end_row),
            }
        })
        .collect()
}
