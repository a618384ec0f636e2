//! Grid traversal and run coalescing.
//!
//! The scanner walks the pixel grid exactly once logically. In note
//! mode, consecutive pixels along the x axis that map to the *same
//! note* are merged into one sustained event whose duration equals the
//! run length — two different hues that truncate to the same note still
//! coalesce, which is intentional lossy compression. A boolean bitmap
//! sized to the image marks looked-ahead pixels as consumed so they are
//! never re-emitted as separate events.
//!
//! Wave modes have no coalescing; they just extract voices in a fixed
//! order ([`scan_voices`] per time step, [`scan_pixels`] per pixel).

use ndarray::Array2;

use crate::color::rgb_to_hsv;
use crate::event::{EventTable, NoteEvent};
use crate::grid::PixelGrid;
use crate::map::{self, Voice};

/// Scan the grid in note mode and coalesce runs into events.
///
/// Traversal is x-outer/y-inner; runs extend along +x and stop at the
/// first pixel whose mapped note differs, or at the image edge. Each
/// retained event starts at tick `x` and is offered to the returned
/// [`EventTable`], which drops slot-key collisions.
///
/// A zero-width or zero-height grid yields an empty table, not an
/// error.
///
/// # Arguments
/// * `grid` - Pixel source
/// * `ignore_background` - Drop background pixels (mapped velocity ≤ 5)
///   instead of routing them to channel 15
pub fn scan_notes(grid: &PixelGrid, ignore_background: bool) -> EventTable {
    let width = grid.width();
    let height = grid.height();
    let mut table = EventTable::new();
    if width == 0 || height == 0 {
        return table;
    }

    let mut consumed = Array2::<bool>::from_elem((height, width), false);

    for x in 0..width {
        for y in 0..height {
            if consumed[(y, x)] {
                continue;
            }

            let [r, g, b] = grid.get(x, y);
            let hsv = rgb_to_hsv(r, g, b);
            let params = match map::note_params(hsv, ignore_background) {
                Some(p) => p,
                None => continue,
            };

            // Look ahead along +x while the mapped note matches.
            let mut duration = 1u32;
            let mut next = x + 1;
            while next < width {
                let [nr, ng, nb] = grid.get(next, y);
                let next_note = map::hue_to_note(rgb_to_hsv(nr, ng, nb).h);
                if next_note != params.note {
                    break;
                }
                duration += 1;
                consumed[(y, next)] = true;
                next += 1;
            }

            table.insert(NoteEvent {
                channel: params.channel,
                note: params.note,
                velocity: params.velocity,
                start: x as u32,
                duration,
            });
        }

        log::debug!("scanned column {} of {}", x + 1, width);
    }

    table
}

/// Extract wave-mode voices, one group per time step.
///
/// Time runs along x; each returned group holds one [`Voice`] per pixel
/// of that step, in y order. The synthesizer renders each group as one
/// fixed-length additive segment.
pub fn scan_voices(grid: &PixelGrid) -> Vec<Vec<Voice>> {
    (0..grid.width())
        .map(|x| {
            (0..grid.height())
                .map(|y| {
                    let [r, g, b] = grid.get(x, y);
                    map::voice_params(rgb_to_hsv(r, g, b))
                })
                .collect()
        })
        .collect()
}

/// Extract one voice per pixel in y-outer/x-inner order, for the
/// per-pixel burst mode.
pub fn scan_pixels(grid: &PixelGrid) -> Vec<Voice> {
    let mut voices = Vec::with_capacity(grid.width() * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let [r, g, b] = grid.get(x, y);
            voices.push(map::voice_params(rgb_to_hsv(r, g, b)));
        }
    }
    voices
}
