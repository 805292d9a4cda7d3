// THEORY:
// The `band_extractor` is the decision-making stage of the pipeline. It
// implements a greedy "peak finding and threshold expansion" search over the
// smoothed projection, turning the 1D signal into a ranked list of row
// intervals.
//
// Key architectural principles & algorithm steps:
// 1.  **Peak Finding (Seeding)**: Each round scans the whole working copy for
//     its maximum. The strongest remaining hump is always claimed first, which
//     is what makes the discovery order a ranking.
// 2.  **Threshold Expansion**: From the peak, the interval grows outward while
//     the adjacent value still exceeds a fixed fraction of the peak. The
//     relative threshold defines the natural edge of the hump instead of a
//     hard absolute cutoff that would misjudge dim images.
// 3.  **Suppression**: The claimed interval is zeroed in the working copy so
//     no later round can rediscover any part of it. Candidates are therefore
//     pairwise non-overlapping by construction.
// 4.  **Honest Absence**: When no positive signal remains the search stops
//     early and simply returns fewer candidates. There is no sentinel value;
//     an empty list means "no band found", and an interval starting at row 0
//     is always a real interval.
// 5.  **Private Working Copy**: The destructive suppression happens on a copy
//     owned by this function. The caller's smoothed vector is never aliased or
//     mutated, so a report can carry the projection unchanged.

/// A contiguous row interval identified as a local peak in the smoothed
/// projection: a candidate location for a plate region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandCandidate {
    /// First row of the interval (inclusive).
    pub start_row: usize,
    /// Last row of the interval (inclusive).
    pub end_row: usize,
    /// The row the peak scan seeded this interval from.
    pub peak_row: usize,
    /// The smoothed magnitude at the peak when it was claimed.
    pub peak_value: u32,
}

/// Extracts up to `candidate_num` non-overlapping bands from a smoothed
/// projection, in descending order of peak strength.
pub fn extract_bands(
    smoothed: &[u32],
    candidate_num: usize,
    threshold_ratio: f64,
) -> Vec<BandCandidate> {
    let mut working = smoothed.to_vec();
    let mut bands = Vec::with_capacity(candidate_num);

    for _ in 0..candidate_num {
        // --- 1. Peak scan (first index wins ties) ---
        let mut peak_value = 0u32;
        let mut peak_index = None;
        for (row, &value) in working.iter().enumerate() {
            if value > peak_value {
                peak_value = value;
                peak_index = Some(row);
            }
        }
        let peak_row = match peak_index {
            Some(row) => row,
            // No positive signal left; the remaining slots stay unfilled.
            None => break,
        };

        // --- 2. Threshold expansion ---
        let threshold = peak_value as f64 * threshold_ratio;
        let mut start_row = peak_row;
        while start_row > 0 && working[start_row - 1] as f64 > threshold {
            start_row -= 1;
        }
        let mut end_row = peak_row;
        while end_row + 1 < working.len() && working[end_row + 1] as f64 > threshold {
            end_row += 1;
        }

        // --- 3. Record and suppress ---
        bands.push(BandCandidate {
            start_row,
            end_row,
            peak_row,
            peak_value,
        });
        for value in &mut working[start_row..=end_row] {
            *value = 0;
        }
    }

    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlaps(a: &BandCandidate, b: &BandCandidate) -> bool {
        a.start_row <= b.end_row && b.start_row <= a.end_row
    }

    #[test]
    fn all_zero_signal_yields_no_candidates() {
        let bands = extract_bands(&[0; 40], 3, 0.55);
        assert!(bands.is_empty());
    }

    #[test]
    fn a_plateau_is_claimed_whole_and_never_rediscovered() {
        let smoothed = [0, 0, 100, 100, 100, 0, 0];
        let bands = extract_bands(&smoothed, 3, 0.55);

        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].start_row, 2);
        assert_eq!(bands[0].end_row, 4);
        assert_eq!(bands[0].peak_row, 2);
        assert_eq!(bands[0].peak_value, 100);
    }

    #[test]
    fn candidates_are_ranked_and_disjoint() {
        let smoothed = [0, 10, 80, 10, 0, 0, 5, 60, 5, 0];
        let bands = extract_bands(&smoothed, 3, 0.55);

        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].peak_value, 80);
        assert_eq!(bands[1].peak_value, 60);
        assert_eq!(bands[2].peak_value, 10);
        for pair in bands.windows(2) {
            assert!(pair[0].peak_value >= pair[1].peak_value);
            assert!(!overlaps(&pair[0], &pair[1]));
        }
        assert!(!overlaps(&bands[0], &bands[2]));
    }

    #[test]
    fn ties_go_to_the_first_row() {
        let smoothed = [0, 50, 0, 50, 0];
        let bands = extract_bands(&smoothed, 1, 0.55);
        assert_eq!(bands[0].peak_row, 1);
    }

    #[test]
    fn expansion_stops_where_the_adjacent_value_falls_to_threshold() {
        // 56 > 100 * 0.55 on both sides; 10 is not.
        let smoothed = [10, 56, 100, 56, 10];
        let bands = extract_bands(&smoothed, 1, 0.55);

        assert_eq!(bands[0].start_row, 1);
        assert_eq!(bands[0].end_row, 3);
    }

    #[test]
    fn expansion_respects_the_signal_boundaries() {
        let smoothed = [90, 100, 90];
        let bands = extract_bands(&smoothed, 1, 0.55);

        assert_eq!(bands[0].start_row, 0);
        assert_eq!(bands[0].end_row, 2);
    }

    #[test]
    fn requesting_more_candidates_than_peaks_returns_fewer() {
        let smoothed = [0, 0, 40, 0, 0];
        let bands = extract_bands(&smoothed, 5, 0.55);
        assert_eq!(bands.len(), 1);
    }

    #[test]
    fn the_callers_vector_is_never_mutated() {
        let smoothed = vec![0u32, 30, 90, 30, 0];
        let before = smoothed.clone();
        let _ = extract_bands(&smoothed, 3, 0.55);
        assert_eq!(smoothed, before);
    }
}
