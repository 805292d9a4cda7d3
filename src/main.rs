// The example runner for the `plate_vision` library: feeds one image through
// the detection pipeline, persists every labeled stage snapshot as a PNG, and
// prints the ranked candidate bands.

use plate_vision::core_modules::utils::image_helper;
use plate_vision::pipeline::{DetectionPipeline, PipelineConfig};
use std::env;
use std::fs;

fn main() -> anyhow::Result<()> {
    // --- 1. Argument Parsing & Setup ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: plate_vision <input_image_path> [output_dir]");
        return Ok(());
    }
    let input_path = &args[1];
    let output_dir = args.get(2).map(String::as_str).unwrap_or("detection_output");

    // --- 2. Image Loading ---
    let image = image_helper::load(input_path)?;
    println!(
        "Loaded {} ({}x{})",
        input_path,
        image.width(),
        image.height()
    );

    // --- 3. Detection ---
    let pipeline = DetectionPipeline::new(PipelineConfig::default());
    let report = pipeline.detect(&image)?;

    // --- 4. Snapshot Output ---
    fs::create_dir_all(output_dir)?;
    for snapshot in &report.snapshots {
        let path = format!("{}/{}.png", output_dir, snapshot.label.replace(' ', "_"));
        image_helper::save(&path, &snapshot.grid)?;
    }

    // --- 5. Report ---
    if report.candidates.is_empty() {
        println!("No plate-like band found.");
    } else {
        for (index, candidate) in report.candidates.iter().enumerate() {
            let band = &candidate.band;
            println!(
                "Candidate {}: rows {}..={} (peak row {}, strength {})",
                index + 1,
                band.start_row,
                band.end_row,
                band.peak_row,
                band.peak_value
            );
        }
        if let Some(primary) = report.primary() {
            println!(
                "Final band: rows {}..={}, cropped to {}x{}",
                primary.band.start_row,
                primary.band.end_row,
                primary.crop.width(),
                primary.crop.height()
            );
        }
    }
    println!(
        "Wrote {} snapshot(s) to {}",
        report.snapshots.len(),
        output_dir
    );

    Ok(())
}
