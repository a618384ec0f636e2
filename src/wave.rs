//! Mono 16-bit PCM encoder (WAV container).
//!
//! The header layout is hound's standard minimal RIFF/WAVE output, so
//! third-party players read the result directly.

use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::{Seek, Write};
use std::path::Path;

use crate::error::Result;
use crate::synth::SAMPLE_RATE;

/// Container spec shared by every wave-mode output: mono, 16-bit
/// signed, 44100 Hz.
pub fn wav_spec() -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Write a sample stream into any seekable byte sink.
pub fn encode<W: Write + Seek>(sink: W, samples: &[i16]) -> Result<()> {
    let mut writer = WavWriter::new(sink, wav_spec())?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Write a complete WAV file at `path`.
///
/// # Example
/// ```no_run
/// use pictone::wave::write_wav;
///
/// let samples = vec![0i16; 44100];
/// write_wav("silence.wav", &samples).unwrap();
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[i16]) -> Result<()> {
    let mut writer = WavWriter::create(path, wav_spec())?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
