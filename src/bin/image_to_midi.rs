use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pictone::pipeline::{image_to_midi, MidiOptions};

/// Command-line arguments for image-to-midi
#[derive(Parser, Debug)]
#[command(name = "image-to-midi")]
#[command(about = "Convert an image to a 16-channel MIDI file")]
#[command(version)]
struct Args {
    /// Path to the input image (.jpg, .jpeg or .png)
    #[arg(short, long)]
    input_file: PathBuf,

    /// Path to the output file (.mid)
    #[arg(short, long)]
    output_file: PathBuf,

    /// Ignore background pixels instead of routing them to channel 15
    #[arg(short = 'b', long)]
    ignore_background: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let options = MidiOptions {
        ignore_background: args.ignore_background,
    };

    match image_to_midi(&args.input_file, &args.output_file, &options) {
        Ok(()) => {
            println!("wrote {}", args.output_file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: image-to-midi -i <source> -o <target> [-b]");
            ExitCode::FAILURE
        }
    }
}
