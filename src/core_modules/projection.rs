// THEORY:
// The projection analyzer collapses the 2D edge-magnitude grid into a 1D
// signal: one accumulated magnitude per row. Rows crossing the plate's text
// collect contributions from every character stroke, so the plate shows up as
// a pronounced hump in the profile. A centered moving average then knocks down
// single-row spikes so the band extractor sees humps, not needles.
//
// The smoothed vector's first and last `half_window` entries are defined to be
// 0: a centered window does not fit there, and the extractor treats those
// rows as signal-free rather than inventing a shrunken window.

use crate::core_modules::pixel_grid::PixelGrid;

/// The row-wise edge-density signal for one grid: the raw per-row sums and
/// their smoothed counterpart, both of length = grid height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionProfile {
    pub magnitude: Vec<u32>,
    pub smoothed: Vec<u32>,
}

/// Sums each row's intensities and smooths the resulting vector with a
/// centered `2 * half_window + 1`-tap moving average.
pub fn project_rows(grid: &PixelGrid, half_window: usize) -> ProjectionProfile {
    let mut magnitude = vec![0u32; grid.height() as usize];
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            magnitude[y as usize] += grid.intensity(x, y) as u32;
        }
    }
    let smoothed = smooth(&magnitude, half_window);
    ProjectionProfile {
        magnitude,
        smoothed,
    }
}

/// Centered moving average with integer floor division. Entries within
/// `half_window` of either end are 0 by definition, never computed.
pub fn smooth(magnitude: &[u32], half_window: usize) -> Vec<u32> {
    let mut smoothed = vec![0u32; magnitude.len()];
    let window = 2 * half_window + 1;
    if magnitude.len() < window {
        return smoothed;
    }
    for row in half_window..magnitude.len() - half_window {
        let sum: u64 = magnitude[row - half_window..=row + half_window]
            .iter()
            .map(|&value| value as u64)
            .sum();
        smoothed[row] = (sum / window as u64) as u32;
    }
    smoothed
}
