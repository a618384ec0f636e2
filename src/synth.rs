//! Additive sine synthesis into 16-bit sample buffers.
//!
//! Each rendering mode sums sine contributions in `f64`, then scales by
//! a per-mode gain and truncates toward zero into `i16` (saturating at
//! the type bounds). The truncation step is part of the output byte
//! contract: for a fixed input the encoded PCM stream is reproducible
//! bit for bit. Summation order is not part of the contract.

use rayon::prelude::*;

use crate::map::Voice;

/// Canonical output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Amplitude gain for row-segment rendering.
pub const ROW_GAIN: f64 = 125.0;
/// Amplitude gain for per-pixel burst rendering.
pub const BURST_GAIN: f64 = 22050.0;
/// Amplitude gain for chord rendering.
pub const CHORD_GAIN: f64 = 4000.0;

/// Samples per burst in per-pixel mode.
pub const BURST_LEN: usize = 256;

/// Default lower-frequency cutoff (Hz) for row rendering; contributions
/// below it are suppressed as sub-audible.
pub const DEFAULT_CUTOFF: f64 = 16.35;

/// Scale a raw sample and truncate it into the signed 16-bit range.
#[inline]
pub fn quantize(sample: f64, gain: f64) -> i16 {
    // `as` truncates toward zero and saturates, matching the contract.
    (sample * gain) as i16
}

/// Sum sine contributions for `n` samples.
///
/// `sample(t) = Σ amplitude_i * sin(2π * frequency_i * t / 44100)`,
/// skipping voices with `frequency < cutoff`.
pub fn additive(voices: &[Voice], n: usize, cutoff: f64) -> Vec<f64> {
    let mut samples = Vec::with_capacity(n);
    for t in 0..n {
        let mut acc = 0.0f64;
        for voice in voices {
            if voice.frequency < cutoff {
                continue;
            }
            let phase = 2.0 * std::f64::consts::PI * voice.frequency * t as f64
                / SAMPLE_RATE as f64;
            acc += voice.amplitude * phase.sin();
        }
        samples.push(acc);
    }
    samples
}

/// Render one additive segment per voice group and concatenate them in
/// order.
///
/// Groups are independent, so rendering is a rayon fork-join across
/// them; concatenation in input order keeps the output deterministic.
///
/// # Arguments
/// * `rows` - One voice group per time step (see [`crate::scan::scan_voices`])
/// * `samples_per_row` - Segment length in samples
/// * `cutoff` - Lower-frequency cutoff in Hz
pub fn render_rows(rows: &[Vec<Voice>], samples_per_row: usize, cutoff: f64) -> Vec<i16> {
    rows.par_iter()
        .map(|voices| {
            additive(voices, samples_per_row, cutoff)
                .into_iter()
                .map(|s| quantize(s, ROW_GAIN))
                .collect::<Vec<i16>>()
        })
        .reduce(Vec::new, |mut acc, mut segment| {
            acc.append(&mut segment);
            acc
        })
}

/// Render one fixed-length sine burst per voice, concatenated in input
/// order. No cutoff applies.
pub fn render_bursts(voices: &[Voice]) -> Vec<i16> {
    voices
        .par_iter()
        .map(|voice| {
            additive(std::slice::from_ref(voice), BURST_LEN, 0.0)
                .into_iter()
                .map(|s| quantize(s, BURST_GAIN))
                .collect::<Vec<i16>>()
        })
        .reduce(Vec::new, |mut acc, mut burst| {
            acc.append(&mut burst);
            acc
        })
}

/// Render a fixed chord: all voices sound for the whole buffer.
///
/// Fully deterministic — the reference scenario in the tests reproduces
/// bit for bit across runs.
pub fn chord(voices: &[Voice], n: usize) -> Vec<i16> {
    additive(voices, n, 0.0)
        .into_iter()
        .map(|s| quantize(s, CHORD_GAIN))
        .collect()
}

/// White-noise mode: every sample drawn independently and uniformly
/// from `[-32767, 32767]`. No frequency content, no sine accumulation.
///
/// # Example
/// ```
/// use pictone::synth::{noise, SAMPLE_RATE};
///
/// let samples = noise(2);
/// assert_eq!(samples.len(), 2 * SAMPLE_RATE as usize);
/// ```
pub fn noise(seconds: u32) -> Vec<i16> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let n = seconds as usize * SAMPLE_RATE as usize;
    (0..n).map(|_| rng.gen_range(-32767..=32767)).collect()
}
