//! Deterministic mapping from HSV samples to acoustic parameters.
//!
//! Two independent mapping modes share the same HSV input:
//!
//! * **Note mode** — hue selects a piano-range MIDI note, saturation a
//!   velocity, brightness an (inverted) channel index. Channel 15 is
//!   reserved for background pixels.
//! * **Wave mode** — brightness selects one of nine octave bands, hue a
//!   frequency inside that band, saturation an amplitude in `[0, 1]`.
//!
//! All remaps are linear with integer truncation, matching the color
//! conversion in [`crate::color`].

use crate::color::Hsv;

/// Lowest note produced by the hue remap (A0).
pub const NOTE_MIN: u8 = 21;
/// Highest note reachable by the hue remap (C8).
pub const NOTE_MAX: u8 = 108;

/// Velocity at or below which a pixel counts as background.
pub const BACKGROUND_VELOCITY: u8 = 5;
/// Channel reserved exclusively for background pixels.
pub const BACKGROUND_CHANNEL: u8 = 15;

/// `[low, high]` frequency bounds (Hz) per octave, C0..B8.
pub const OCTAVE_BANDS: [[f64; 2]; 9] = [
    [16.35, 30.87],
    [32.70, 61.74],
    [65.41, 123.47],
    [130.81, 246.94],
    [261.63, 493.88],
    [523.25, 987.77],
    [1046.50, 1975.53],
    [2093.00, 3951.07],
    [4186.01, 7902.13],
];

/// Note-mode parameters for a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteParams {
    /// Channel index, `0..=15`; 15 iff the pixel is background.
    pub channel: u8,
    /// MIDI note number, `21..=108`.
    pub note: u8,
    /// Note velocity, `0..=127`.
    pub velocity: u8,
}

/// One additive-synthesis contribution: a sine at `frequency` Hz scaled
/// by `amplitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    /// Frequency in Hz. The hue remap always produces integral values;
    /// caller-built voices (e.g. chords) may be fractional.
    pub frequency: f64,
    /// Amplitude in `[0, 1]`.
    pub amplitude: f64,
}

/// Remap hue `[0, 360)` linearly onto the playable keyboard `[21, 108]`.
///
/// # Example
/// ```
/// use pictone::map::hue_to_note;
///
/// assert_eq!(hue_to_note(0), 21);
/// assert_eq!(hue_to_note(359), 107);
/// ```
pub fn hue_to_note(h: u16) -> u8 {
    ((h as f64 * 87.0) / 360.0) as u8 + NOTE_MIN
}

/// Remap saturation `[0, 100]` linearly onto MIDI velocity `[0, 127]`.
pub fn saturation_to_velocity(s: u8) -> u8 {
    ((s as f64 * 127.0) / 100.0) as u8
}

/// Remap brightness `[0, 100]` inversely onto channels `[14, 0]`.
///
/// Brighter pixels land on lower channel indices. Only meaningful for
/// non-background pixels; background routing is handled by
/// [`note_params`].
pub fn value_to_channel(v: u8) -> u8 {
    ((v as f64 * -14.0) / 100.0 + 14.0) as u8
}

/// Remap brightness `[0, 100]` onto an octave index `[0, 8]`.
pub fn value_to_octave(v: u8) -> usize {
    ((v as f64 * 8.0) / 100.0) as usize
}

/// Remap hue `[0, 360)` into the `[low, high]` band of the given octave.
///
/// The result is truncated to an integral number of Hz, kept as `f64`
/// for the synthesizer.
pub fn hue_to_frequency(h: u16, octave: usize) -> f64 {
    let [low, high] = OCTAVE_BANDS[octave];
    ((h as f64 * (high - low)) / 360.0 + low).trunc()
}

/// Remap saturation `[0, 100]` onto an amplitude in `[0, 1]`.
pub fn saturation_to_amplitude(s: u8) -> f64 {
    s as f64 / 100.0
}

/// Map an HSV sample to note-mode parameters.
///
/// Background pixels (mapped velocity ≤ [`BACKGROUND_VELOCITY`]) are
/// routed to channel 15, or dropped entirely when `ignore_background`
/// is set — near-silent events otherwise flood the output.
///
/// # Returns
/// `None` only for a skipped background pixel.
///
/// # Example
/// ```
/// use pictone::color::Hsv;
/// use pictone::map::note_params;
///
/// let dark = Hsv { h: 10, s: 2, v: 3 };
/// assert_eq!(note_params(dark, false).unwrap().channel, 15);
/// assert_eq!(note_params(dark, true), None);
/// ```
pub fn note_params(hsv: Hsv, ignore_background: bool) -> Option<NoteParams> {
    let note = hue_to_note(hsv.h);
    let velocity = saturation_to_velocity(hsv.s);

    let channel = if velocity <= BACKGROUND_VELOCITY {
        if ignore_background {
            return None;
        }
        BACKGROUND_CHANNEL
    } else {
        value_to_channel(hsv.v)
    };

    Some(NoteParams {
        channel,
        note,
        velocity,
    })
}

/// Map an HSV sample to a wave-mode [`Voice`].
pub fn voice_params(hsv: Hsv) -> Voice {
    let octave = value_to_octave(hsv.v);
    Voice {
        frequency: hue_to_frequency(hsv.h, octave),
        amplitude: saturation_to_amplitude(hsv.s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_range_endpoints() {
        assert_eq!(hue_to_note(0), 21);
        assert_eq!(hue_to_note(180), 64);
        assert_eq!(hue_to_note(359), 107);
    }

    #[test]
    fn velocity_endpoints() {
        assert_eq!(saturation_to_velocity(0), 0);
        assert_eq!(saturation_to_velocity(100), 127);
    }

    #[test]
    fn channel_is_inverted() {
        assert_eq!(value_to_channel(0), 14);
        assert_eq!(value_to_channel(100), 0);
        assert_eq!(value_to_channel(50), 7);
    }

    #[test]
    fn background_boundary() {
        // Velocity 5 is background, velocity 6 is not. s=4 -> 5, s=5 -> 6.
        assert_eq!(saturation_to_velocity(4), 5);
        assert_eq!(saturation_to_velocity(5), 6);

        let bg = Hsv { h: 0, s: 4, v: 90 };
        assert_eq!(note_params(bg, false).unwrap().channel, BACKGROUND_CHANNEL);
        let fg = Hsv { h: 0, s: 5, v: 90 };
        assert_ne!(note_params(fg, false).unwrap().channel, BACKGROUND_CHANNEL);
    }

    #[test]
    fn octave_selection() {
        assert_eq!(value_to_octave(0), 0);
        assert_eq!(value_to_octave(100), 8);
        assert_eq!(value_to_octave(49), 3);
    }

    #[test]
    fn frequency_stays_in_band() {
        for octave in 0..OCTAVE_BANDS.len() {
            let [low, high] = OCTAVE_BANDS[octave];
            for h in [0u16, 90, 359] {
                let f = hue_to_frequency(h, octave);
                assert!(f >= low.trunc() && f <= high);
            }
        }
    }

    #[test]
    fn frequency_is_integral() {
        let f = hue_to_frequency(123, 4);
        assert_eq!(f, f.trunc());
    }
}
