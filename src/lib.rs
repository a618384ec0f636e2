//! Image sonification library for Rust.
//!
//! Pictone turns a decoded image into sound: pixels become HSV samples,
//! HSV samples become musical parameters, runs of same-note pixels
//! coalesce into sustained events, and the result is serialized either
//! as a 16-channel note-event container (Standard MIDI File) or as a
//! mono 16-bit PCM stream (WAV) rendered by additive sine synthesis.
//!
//! # Quick Start
//!
//! ```
//! use pictone::color::rgb_to_hsv;
//! use pictone::grid::PixelGrid;
//! use pictone::scan::scan_notes;
//!
//! // A 2x1 image: two pixels of identical color coalesce into one
//! // sustained event.
//! let grid = PixelGrid::from_pixels(2, 1, vec![[200, 40, 40]; 2]).unwrap();
//! let events = scan_notes(&grid, false);
//! assert_eq!(events.len(), 1);
//! assert_eq!(events.events()[0].duration, 2);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | RGB→HSV conversion |
//! | [`map`] | HSV→note/velocity/channel and octave/frequency/amplitude remaps |
//! | [`grid`] | Pixel source: image loading, validation, `(x, y)` access |
//! | [`scan`] | Grid traversal and run coalescing |
//! | [`event`] | Note events and slot-key deduplication |
//! | [`synth`] | Additive sine synthesis, bursts, chord and noise modes |
//! | [`midi`] | Standard MIDI File encoder |
//! | [`wave`] | WAV (mono 16-bit PCM) encoder |
//! | [`pipeline`] | End-to-end conversions and their option structs |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Validation errors (missing input,
//! unsupported extensions, malformed images) are fatal; there is no
//! partial-success mode.
//!
//! # Safety
//!
//! This crate uses `#![forbid(unsafe_code)]` — no unsafe Rust anywhere.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod color;
pub mod event;
pub mod grid;
pub mod map;
pub mod midi;
pub mod pipeline;
pub mod scan;
pub mod synth;
pub mod wave;
