//! Multi-track note-event encoder (Standard MIDI File).
//!
//! Layout: format 1, sixteen tracks, one per channel 0–15, each opened
//! with a track name and the fixed tempo. Track 0 carries the time base
//! for players that only honor the first tempo map. Every retained
//! event becomes one NoteOn/NoteOff pair on its channel; the
//! deduplication table upstream guarantees no two events share a
//! `(channel, note, start)` slot.

use midly::num::{u15, u24, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use std::path::Path;

use crate::error::Result;
use crate::event::NoteEvent;

/// Fixed tempo in beats per minute.
pub const TEMPO_BPM: u32 = 480;
/// SMF division: ticks per quarter note. Starts and durations are whole
/// beats, so any resolution works; 960 matches common sequencer output.
pub const TICKS_PER_QUARTER: u16 = 960;

const CHANNELS: usize = 16;

// Within-tick ordering: track setup, then note-offs, then note-ons, so
// a re-struck note never overlaps its own release.
const ORD_META: u8 = 0;
const ORD_OFF: u8 = 1;
const ORD_ON: u8 = 2;

/// Encode events into SMF bytes.
///
/// # Example
/// ```
/// use pictone::event::NoteEvent;
/// use pictone::midi::encode;
///
/// let events = [NoteEvent { channel: 0, note: 60, velocity: 100, start: 0, duration: 2 }];
/// let bytes = encode(&events).unwrap();
/// assert_eq!(&bytes[..4], b"MThd");
/// ```
pub fn encode(events: &[NoteEvent]) -> Result<Vec<u8>> {
    let names: Vec<String> = (0..CHANNELS).map(|i| format!("Track {i}")).collect();

    // (tick, within-tick order, event) per track, sorted then
    // delta-encoded below.
    let mut tracks: Vec<Vec<(u32, u8, TrackEventKind)>> = (0..CHANNELS)
        .map(|i| {
            vec![
                (0, ORD_META, TrackEventKind::Meta(MetaMessage::TrackName(names[i].as_bytes()))),
                (
                    0,
                    ORD_META,
                    TrackEventKind::Meta(MetaMessage::Tempo(u24::new(60_000_000 / TEMPO_BPM))),
                ),
            ]
        })
        .collect();

    let tpq = TICKS_PER_QUARTER as u32;
    for event in events {
        let channel = u4::new(event.channel);
        let key = u7::new(event.note);
        let track = &mut tracks[event.channel as usize];
        track.push((
            event.start * tpq,
            ORD_ON,
            TrackEventKind::Midi {
                channel,
                message: MidiMessage::NoteOn {
                    key,
                    vel: u7::new(event.velocity),
                },
            },
        ));
        track.push((
            (event.start + event.duration) * tpq,
            ORD_OFF,
            TrackEventKind::Midi {
                channel,
                message: MidiMessage::NoteOff {
                    key,
                    vel: u7::new(0),
                },
            },
        ));
    }

    let mut smf = Smf {
        header: Header::new(
            Format::Parallel,
            Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
        ),
        tracks: Vec::with_capacity(CHANNELS),
    };

    for mut track in tracks {
        track.sort_by_key(|&(tick, order, _)| (tick, order));

        let mut encoded = Vec::with_capacity(track.len() + 1);
        let mut last_tick = 0u32;
        for (tick, _, kind) in track {
            encoded.push(TrackEvent {
                delta: u28::new(tick - last_tick),
                kind,
            });
            last_tick = tick;
        }
        encoded.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        });
        smf.tracks.push(encoded);
    }

    let mut bytes = Vec::new();
    smf.write_std(&mut bytes)?;
    Ok(bytes)
}

/// Encode events and write the container to `path` in one pass.
pub fn write_midi<P: AsRef<Path>>(path: P, events: &[NoteEvent]) -> Result<()> {
    let bytes = encode(events)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
