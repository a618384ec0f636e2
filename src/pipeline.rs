//! End-to-end conversions, composed from the pipeline stages.
//!
//! Options are explicit structs threaded into each entry point; there
//! is no process-wide configuration state. Either a complete, valid
//! container is written or the run fails with an error before/while
//! writing — there is no partial-success mode.

use std::path::Path;

use crate::error::Result;
use crate::grid::{check_output_extension, PixelGrid};
use crate::scan;
use crate::synth;
use crate::{midi, wave};

/// Options for note-mode conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidiOptions {
    /// Drop background pixels (mapped velocity ≤ 5) instead of routing
    /// them to channel 15.
    pub ignore_background: bool,
}

/// Options for wave-mode conversion.
#[derive(Debug, Clone, Copy)]
pub struct WaveOptions {
    /// Samples rendered per time step in row mode.
    pub samples_per_row: usize,
    /// Suppress sine contributions below this frequency (Hz).
    pub ignore_frequency: f64,
    /// Render one fixed-length burst per pixel instead of one additive
    /// segment per time step.
    pub per_pixel: bool,
}

impl Default for WaveOptions {
    fn default() -> Self {
        Self {
            samples_per_row: 2048,
            ignore_frequency: synth::DEFAULT_CUTOFF,
            per_pixel: false,
        }
    }
}

/// Convert an image file to a 16-channel note-event container.
///
/// # Arguments
/// * `input` - Image path (`.jpg`, `.jpeg` or `.png`)
/// * `output` - Destination path (`.mid`)
/// * `options` - Note-mode options
///
/// # Errors
/// All path/decoding validation errors from [`PixelGrid::load`], plus
/// [`crate::Error::InvalidOutputExtension`] for a non-`.mid` output.
pub fn image_to_midi<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &MidiOptions,
) -> Result<()> {
    check_output_extension(output.as_ref(), "mid")?;
    let grid = PixelGrid::load(input)?;
    log::info!("loaded {}x{} image", grid.width(), grid.height());

    let table = scan::scan_notes(&grid, options.ignore_background);
    log::info!("coalesced into {} note events", table.len());

    midi::write_midi(output, table.events())
}

/// Convert an image file to a mono 16-bit PCM container.
///
/// Row mode renders one additive segment per time step; per-pixel mode
/// renders one short sine burst per pixel in scan order.
pub fn image_to_wave<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &WaveOptions,
) -> Result<()> {
    check_output_extension(output.as_ref(), "wav")?;
    let grid = PixelGrid::load(input)?;
    log::info!("loaded {}x{} image", grid.width(), grid.height());

    let samples = if options.per_pixel {
        let voices = scan::scan_pixels(&grid);
        log::info!("rendering {} pixel bursts", voices.len());
        synth::render_bursts(&voices)
    } else {
        let rows = scan::scan_voices(&grid);
        log::info!("rendering {} row segments", rows.len());
        synth::render_rows(&rows, options.samples_per_row, options.ignore_frequency)
    };

    wave::write_wav(output, &samples)
}
