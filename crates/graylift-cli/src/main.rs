use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graylift_cli::OperationArgs;
use graylift_core::config;

mod commands;
use commands::{cmd_analyze, cmd_apply, cmd_preset_list, cmd_preset_save, cmd_preset_show};

#[derive(Parser)]
#[command(name = "graylift")]
#[command(version, about = "Classical grayscale image enhancement", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an enhancement operation to an image or directory of images
    Apply {
        /// Input file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Operation name (negative, threshold, log, inverse-log,
        /// power-law, equalize, median, mean, weighted-mean, knn-mean)
        #[arg(long, value_name = "NAME")]
        op: Option<String>,

        /// Operation preset file (alternative to --op)
        #[arg(short, long, value_name = "FILE")]
        preset: Option<PathBuf>,

        /// Threshold level (0-255)
        #[arg(long, value_name = "N")]
        level: Option<u8>,

        /// Power-law exponent (>0; <1 brightens, >1 darkens)
        #[arg(long, value_name = "FLOAT")]
        gamma: Option<f32>,

        /// Spatial filter neighborhood size (odd)
        #[arg(long, value_name = "N")]
        size: Option<usize>,

        /// Neighbor count for knn-mean
        #[arg(long, value_name = "N")]
        k: Option<usize>,

        /// Coherence deviation threshold for knn-mean
        #[arg(long, value_name = "FLOAT")]
        theta: Option<f32>,

        /// Output file or directory
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Base directory for persisted input/output pairs
        #[arg(long, value_name = "DIR")]
        pairs_dir: Option<PathBuf>,

        /// Skip input/output pair persistence
        #[arg(long)]
        no_save_pair: bool,

        /// Number of parallel threads for directory input
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Scan subdirectories of a directory input
        #[arg(short, long)]
        recursive: bool,

        /// Enable debug output showing intermediate statistics
        #[arg(long)]
        debug: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Inspect an image's luminance statistics
    Analyze {
        /// Input file
        input: PathBuf,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Save the analysis as JSON to a file
        #[arg(short, long, value_name = "FILE")]
        save: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Manage operation presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// List available presets
    List {
        /// Directory to list presets from
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Show details of a preset file
    Show {
        /// Preset file path
        preset: PathBuf,
    },

    /// Build a preset from flags and save it
    Save {
        /// Output file path
        output: PathBuf,

        /// Preset name
        #[arg(short, long)]
        name: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,

        /// Operation name
        #[arg(long, value_name = "NAME")]
        op: String,

        /// Threshold level (0-255)
        #[arg(long, value_name = "N")]
        level: Option<u8>,

        /// Power-law exponent
        #[arg(long, value_name = "FLOAT")]
        gamma: Option<f32>,

        /// Spatial filter neighborhood size (odd)
        #[arg(long, value_name = "N")]
        size: Option<usize>,

        /// Neighbor count for knn-mean
        #[arg(long, value_name = "N")]
        k: Option<usize>,

        /// Coherence deviation threshold for knn-mean
        #[arg(long, value_name = "FLOAT")]
        theta: Option<f32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply {
            input,
            op,
            preset,
            level,
            gamma,
            size,
            k,
            theta,
            out,
            pairs_dir,
            no_save_pair,
            threads,
            recursive,
            debug,
            verbose,
        } => {
            config::set_verbose(verbose);
            cmd_apply(
                input,
                op,
                preset,
                OperationArgs {
                    level,
                    gamma,
                    size,
                    k,
                    theta,
                },
                out,
                pairs_dir,
                no_save_pair,
                threads,
                recursive,
                debug,
            )
        }

        Commands::Analyze {
            input,
            json,
            save,
            verbose,
        } => {
            config::set_verbose(verbose);
            cmd_analyze(input, json, save)
        }

        Commands::Preset { action } => match action {
            PresetAction::List { dir } => cmd_preset_list(dir),
            PresetAction::Show { preset } => cmd_preset_show(preset),
            PresetAction::Save {
                output,
                name,
                description,
                op,
                level,
                gamma,
                size,
                k,
                theta,
            } => cmd_preset_save(
                output,
                name,
                description,
                op,
                OperationArgs {
                    level,
                    gamma,
                    size,
                    k,
                    theta,
                },
            ),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
