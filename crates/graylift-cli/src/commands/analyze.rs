//! The analyze command: inspect an image's luminance statistics.

use serde::Serialize;
use std::path::PathBuf;

use graylift_core::kernel::{histogram, HISTOGRAM_BUCKETS};
use graylift_core::IntensityGrid;

/// Analysis result structure for JSON output.
#[derive(Serialize)]
pub struct AnalysisResult {
    pub file: String,
    pub dimensions: [u32; 2],
    pub source_is_grayscale: bool,
    pub luminance: LuminanceStats,
}

/// Luminance statistics derived from the 256-bucket histogram.
///
/// `min` and `max` double as the first and last occupied histogram
/// bucket.
#[derive(Serialize)]
pub struct LuminanceStats {
    pub min: u8,
    pub max: u8,
    pub mean: f32,
    /// Number of distinct intensity values present.
    pub distinct_values: usize,
}

/// Compute luminance statistics for a grid.
pub fn compute_luminance_stats(grid: &IntensityGrid) -> Result<LuminanceStats, String> {
    if grid.is_empty() {
        return Err("Image has no pixels".to_string());
    }

    let hist = histogram(grid);

    let mut min = 255u8;
    let mut max = 0u8;
    let mut sum = 0u64;
    let mut distinct = 0usize;
    for (bucket, &count) in hist.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let value = bucket as u8;
        if distinct == 0 {
            min = value;
        }
        max = value;
        distinct += 1;
        sum += bucket as u64 * count as u64;
    }

    Ok(LuminanceStats {
        min,
        max,
        mean: sum as f32 / grid.len() as f32,
        distinct_values: distinct,
    })
}

/// Execute the analyze command.
///
/// Decodes the image, projects it to luminance, and reports the
/// statistics an operator needs to pick an enhancement: value range,
/// mean brightness, and histogram occupancy. Output can be displayed
/// as human-readable text or saved as JSON.
pub fn cmd_analyze(
    input: PathBuf,
    json_output: bool,
    save: Option<PathBuf>,
) -> Result<(), String> {
    let decoded = graylift_core::decoders::decode_image(&input)?;
    let grid = IntensityGrid::from_decoded(&decoded)?;
    let luminance = compute_luminance_stats(&grid)?;

    let result = AnalysisResult {
        file: input.display().to_string(),
        dimensions: [decoded.width, decoded.height],
        source_is_grayscale: decoded.source_is_grayscale,
        luminance,
    };

    if json_output {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize analysis: {}", e))?;
        println!("{}", json);
    } else {
        println!("Analyzing: {}\n", input.display());

        println!("Image Info:");
        println!("  Dimensions: {}x{}", decoded.width, decoded.height);
        println!("  Grayscale source: {}", decoded.source_is_grayscale);

        let stats = &result.luminance;
        println!("\nLuminance:");
        println!("  Range: [{}, {}]", stats.min, stats.max);
        println!("  Mean: {:.2}", stats.mean);
        println!(
            "  Distinct values: {} of {}",
            stats.distinct_values, HISTOGRAM_BUCKETS
        );

        // Suggest the obvious next step for squeezed histograms
        if stats.max - stats.min < 128 {
            println!("\nUsage:");
            println!("  graylift apply {} --op equalize", input.display());
        }
    }

    // Save if requested
    if let Some(save_path) = save {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize analysis: {}", e))?;
        std::fs::write(&save_path, &json)
            .map_err(|e| format!("Failed to write analysis file: {}", e))?;
        if !json_output {
            println!("\nAnalysis saved to: {}", save_path.display());
        }
    }

    Ok(())
}
