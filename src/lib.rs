// THEORY:
// This file is the main entry point for the `plate_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers.
//
// The primary goal is to export the `DetectionPipeline` and its associated data
// structures (`PipelineConfig`, `DetectionReport`, etc.) as the clean,
// high-level interface for the entire detection engine. The stage internals
// (`core_modules`) stay encapsulated behind it: consumers hand the pipeline a
// decoded `PixelGrid` and get back ranked plate-band candidates plus labeled
// snapshots of every intermediate stage, without ever touching a convolution.

pub mod core_modules;
pub mod parallel_pipeline;
pub mod pipeline;
