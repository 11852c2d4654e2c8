//! The apply command: run one enhancement operation over one or many
//! images.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use graylift_core::config;
use graylift_core::models::Operation;

use graylift_cli::{build_operation, expand_inputs, process_single_image, OperationArgs};

/// Execute the apply command.
#[allow(clippy::too_many_arguments)]
pub fn cmd_apply(
    input: PathBuf,
    op: Option<String>,
    preset: Option<PathBuf>,
    args: OperationArgs,
    out: Option<PathBuf>,
    pairs_dir: Option<PathBuf>,
    no_save_pair: bool,
    threads: Option<usize>,
    recursive: bool,
    debug: bool,
) -> Result<(), String> {
    config::log_config_usage();
    let defaults = &config::defaults().defaults;

    let operation = build_operation(op.as_deref(), preset.as_deref(), &args, defaults)?;
    if debug {
        eprintln!("[debug] Operation: {:?}", operation);
    }

    let files = expand_inputs(&[input], recursive)?;
    if files.is_empty() {
        return Err("No supported image files found (png, jpg, jpeg)".to_string());
    }

    // Pair persistence is on unless explicitly disabled; the base
    // directory comes from the flag or the loaded defaults.
    let pairs_base = if no_save_pair {
        None
    } else {
        Some(pairs_dir.unwrap_or_else(|| defaults.pairs_dir.clone()))
    };

    if files.len() == 1 {
        apply_single(&files[0], &operation, &out, pairs_base.as_deref(), debug)
    } else {
        apply_batch(&files, &operation, &out, pairs_base.as_deref(), threads, debug)
    }
}

fn apply_single(
    input: &std::path::Path,
    operation: &Operation,
    out: &Option<PathBuf>,
    pairs_base: Option<&std::path::Path>,
    debug: bool,
) -> Result<(), String> {
    println!("Applying {} to {}...", operation.name(), input.display());
    let outcome = process_single_image(input, operation, out, pairs_base, debug)?;
    println!("Done! Result saved to: {}", outcome.output_path.display());
    if let Some(pair_dir) = outcome.pair_dir {
        println!("Input/output pair saved to: {}", pair_dir.display());
    }
    Ok(())
}

fn apply_batch(
    files: &[PathBuf],
    operation: &Operation,
    out: &Option<PathBuf>,
    pairs_base: Option<&std::path::Path>,
    threads: Option<usize>,
    debug: bool,
) -> Result<(), String> {
    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("Using {} threads for parallel processing", num_threads);
    }

    if let Some(out_dir) = out {
        if !out_dir.exists() {
            std::fs::create_dir_all(out_dir)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    println!(
        "\nApplying {} to {} files in parallel...\n",
        operation.name(),
        files.len()
    );

    // Progress tracking; the kernel is pure, so independent grids can
    // fan out without coordination.
    let processed_count = AtomicUsize::new(0);
    let total_files = files.len();

    let results: Vec<Result<PathBuf, String>> = files
        .par_iter()
        .map(|input| {
            let outcome = process_single_image(input, operation, out, pairs_base, debug)?;

            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            println!(
                "[{}/{}] Processed: {} -> {}",
                count,
                total_files,
                input.display(),
                outcome.output_path.display()
            );

            Ok(outcome.output_path)
        })
        .collect();

    // Summarize results
    let mut success_count = 0;
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for (input, result) in files.iter().zip(results.iter()) {
        match result {
            Ok(_) => success_count += 1,
            Err(e) => errors.push((input.clone(), e.clone())),
        }
    }

    println!("\n========================================");
    println!("BATCH PROCESSING COMPLETE");
    println!("========================================");
    println!("  Successful: {}", success_count);
    println!("  Failed:     {}", errors.len());

    if !errors.is_empty() {
        println!("\nErrors:");
        for (path, error) in &errors {
            println!("  {}: {}", path.display(), error);
        }
        return Err(format!("{} files failed to process", errors.len()));
    }

    Ok(())
}
