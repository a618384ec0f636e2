use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pictone::pipeline::{image_to_wave, WaveOptions};

/// Command-line arguments for image-to-wave
#[derive(Parser, Debug)]
#[command(name = "image-to-wave")]
#[command(about = "Convert an image to a mono 16-bit WAV file via additive synthesis")]
#[command(version)]
struct Args {
    /// Path to the input image (.jpg, .jpeg or .png)
    #[arg(short, long)]
    input_file: PathBuf,

    /// Path to the output file (.wav)
    #[arg(short, long)]
    output_file: PathBuf,

    /// Samples rendered per image row
    #[arg(short = 's', long, default_value_t = 2048)]
    samples_per_row: usize,

    /// Suppress sine contributions below this frequency (Hz)
    #[arg(short = 'f', long, default_value_t = 16.35)]
    ignore_frequency: f64,

    /// Render one short sine burst per pixel instead of one segment per row
    #[arg(long)]
    per_pixel: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let options = WaveOptions {
        samples_per_row: args.samples_per_row,
        ignore_frequency: args.ignore_frequency,
        per_pixel: args.per_pixel,
    };

    match image_to_wave(&args.input_file, &args.output_file, &options) {
        Ok(()) => {
            println!("wrote {}", args.output_file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: image-to-wave -i <source> -o <target> [-s <samples>] [-f <hz>] [--per-pixel]");
            ExitCode::FAILURE
        }
    }
}
