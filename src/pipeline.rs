// THEORY:
// The `pipeline` module is the final, top-level API for the entire detection
// engine. It encapsulates the full stage stack into a single, easy-to-use
// interface: hand it a decoded grid and receive a ranked list of plate-band
// candidates plus labeled snapshots of every intermediate stage.
//
// The stages (luma extraction, median denoising, vertical edge emphasis, row
// projection, band extraction, candidate materialization) run in strict
// sequence, and each output is fully materialized before the next stage
// starts. Presentation is deliberately decoupled: the core never
// renders anything, it just returns the labeled grids and lets the caller
// decide how (or whether) to display them. That keeps the pipeline headless
// and deterministic under test.

use crate::core_modules::band_extractor;
use crate::core_modules::gradient;
use crate::core_modules::luma;
use crate::core_modules::materializer;
use crate::core_modules::median;
use crate::core_modules::projection;

// Re-export key data structures for the public API.
pub use crate::core_modules::band_extractor::BandCandidate;
pub use crate::core_modules::error::DetectionError;
pub use crate::core_modules::gradient::GradientKernel;
pub use crate::core_modules::materializer::PlateCandidate;
pub use crate::core_modules::pixel_grid::PixelGrid;
pub use crate::core_modules::projection::ProjectionProfile;

/// The narrowest grid with a non-empty convolution interior.
const MIN_GRID_WIDTH: u32 = 3;

/// Configuration for the DetectionPipeline, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// How many ranked band candidates to extract. Default 3.
    pub candidate_num: usize,
    /// A band expands from its peak while the adjacent smoothed value exceeds
    /// this fraction of the peak. Default 0.55.
    pub band_threshold_ratio: f64,
    /// Half-width of the centered moving average over the row projection;
    /// the full window is `2 * half_window + 1` taps. Default 4 (9 taps).
    pub smoothing_half_window: usize,
    /// Rows appended below each detected band when cropping, to capture the
    /// plate body sitting under the densest text rows. Default 15.
    pub crop_trailing_margin: usize,
    /// Whether to record a labeled grid snapshot after each stage. Default
    /// true; turn off for headless batch runs that only want the candidates.
    pub capture_snapshots: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            candidate_num: 3,
            band_threshold_ratio: 0.55,
            smoothing_half_window: 4,
            crop_trailing_margin: 15,
            capture_snapshots: true,
        }
    }
}

/// A labeled intermediate result, recorded for observability only.
#[derive(Debug, Clone)]
pub struct StageSnapshot {
    pub label: String,
    pub grid: PixelGrid,
}

/// The primary output of the detection pipeline for a single image.
#[derive(Debug, Clone)]
pub struct DetectionReport {
    /// Materialized candidates in descending order of peak strength.
    pub candidates: Vec<PlateCandidate>,
    /// The raw and smoothed row projections the bands were extracted from.
    pub projection: ProjectionProfile,
    /// Labeled intermediate grids, empty when snapshot capture is off.
    pub snapshots: Vec<StageSnapshot>,
}

impl DetectionReport {
    /// The strongest candidate, if any band was found at all.
    pub fn primary(&self) -> Option<&PlateCandidate> {
        self.candidates.first()
    }
}

/// The main, top-level struct for the detection engine.
pub struct DetectionPipeline {
    config: PipelineConfig,
}

impl DetectionPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the full detection pipeline over one decoded image.
    pub fn detect(&self, image: &PixelGrid) -> Result<DetectionReport, DetectionError> {
        self.check_dimensions(image)?;
        log::debug!(
            "detecting plate bands in a {}x{} image",
            image.width(),
            image.height()
        );

        let mut snapshots = Vec::new();

        // --- 1. Luma Extraction ---
        let grayscale = luma::extract_luma(image);
        if self.config.capture_snapshots {
            snapshots.push(StageSnapshot {
                label: "grayscale".to_string(),
                grid: grayscale.clone(),
            });
        }

        // --- 2. Median Denoising ---
        let denoised = median::median_denoise(&grayscale);
        if self.config.capture_snapshots {
            snapshots.push(StageSnapshot {
                label: "median-filtered".to_string(),
                grid: denoised.clone(),
            });
        }

        // --- 3. Vertical Edge Emphasis ---
        let edges = gradient::apply_gradient(&denoised, GradientKernel::VerticalEdge);
        if self.config.capture_snapshots {
            snapshots.push(StageSnapshot {
                label: "vertical-edge".to_string(),
                grid: edges.clone(),
            });
        }

        // --- 4. Row Projection & Smoothing ---
        let projection = projection::project_rows(&edges, self.config.smoothing_half_window);

        // --- 5. Band Extraction ---
        let bands = band_extractor::extract_bands(
            &projection.smoothed,
            self.config.candidate_num,
            self.config.band_threshold_ratio,
        );
        log::debug!("extracted {} candidate band(s)", bands.len());

        // --- 6. Candidate Materialization ---
        let candidates =
            materializer::materialize_candidates(image, &bands, self.config.crop_trailing_margin);
        if self.config.capture_snapshots {
            let total = candidates.len();
            for (index, candidate) in candidates.iter().enumerate() {
                snapshots.push(StageSnapshot {
                    label: format!("band candidate {} of {}", index + 1, total),
                    grid: candidate.crop.clone(),
                });
                // Diagnostic only: an edge view of the crop for inspection.
                snapshots.push(StageSnapshot {
                    label: format!("band candidate {} vertical-edge", index + 1),
                    grid: gradient::apply_gradient(&candidate.crop, GradientKernel::VerticalEdge),
                });
            }
            if let Some(primary) = candidates.first() {
                snapshots.push(StageSnapshot {
                    label: "final band".to_string(),
                    grid: primary.crop.clone(),
                });
            }
        }

        Ok(DetectionReport {
            candidates,
            projection,
            snapshots,
        })
    }

    /// The smoothing window and the interior sweeps need a minimum grid; a
    /// smaller image fails fast instead of producing degenerate output.
    fn check_dimensions(&self, image: &PixelGrid) -> Result<(), DetectionError> {
        let min_height = (2 * self.config.smoothing_half_window + 1) as u32;
        if image.height() < min_height || image.width() < MIN_GRID_WIDTH {
            return Err(DetectionError::InvalidDimensions {
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(())
    }
}
