//! Note events and the slot-claim table that deduplicates them.
//!
//! The MIDI encoder must never see two events addressed to the same
//! `(channel, note, start)` slot; the [`EventTable`] enforces that by
//! claiming every tick an accepted event covers, so a later run cannot
//! land on a tick already in use.

use std::collections::HashSet;

/// A sustained note produced by the row scanner.
///
/// `duration` is extended while a run of same-note pixels is coalesced;
/// after that, events are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    /// Channel index, `0..=15`.
    pub channel: u8,
    /// MIDI note number, `21..=108`.
    pub note: u8,
    /// Velocity, `0..=127`.
    pub velocity: u8,
    /// Start tick (the x coordinate of the first pixel of the run).
    pub start: u32,
    /// Length of the run in ticks, at least 1.
    pub duration: u32,
}

/// Composite slot key: one note output slot per channel/note/tick.
pub type SlotKey = (u8, u8, u32);

/// Scan-ordered event storage with slot-key deduplication.
#[derive(Debug, Default)]
pub struct EventTable {
    events: Vec<NoteEvent>,
    claimed: HashSet<SlotKey>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer an event to the table.
    ///
    /// Rejected if the event's start slot `(channel, note, start)` is
    /// already claimed. On acceptance, every tick in
    /// `[start, start + duration)` is claimed under the same
    /// channel/note so overlapping runs cannot collide later.
    ///
    /// # Returns
    /// `true` if the event was retained.
    pub fn insert(&mut self, event: NoteEvent) -> bool {
        if self.claimed.contains(&(event.channel, event.note, event.start)) {
            return false;
        }
        for d in 0..event.duration {
            self.claimed.insert((event.channel, event.note, event.start + d));
        }
        self.events.push(event);
        true
    }

    /// Retained events in scan order.
    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl IntoIterator for EventTable {
    type Item = NoteEvent;
    type IntoIter = std::vec::IntoIter<NoteEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(channel: u8, note: u8, start: u32, duration: u32) -> NoteEvent {
        NoteEvent {
            channel,
            note,
            velocity: 64,
            start,
            duration,
        }
    }

    #[test]
    fn duplicate_slot_is_rejected() {
        let mut table = EventTable::new();
        assert!(table.insert(event(3, 60, 0, 1)));
        assert!(!table.insert(event(3, 60, 0, 4)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn sustained_event_claims_covered_ticks() {
        let mut table = EventTable::new();
        assert!(table.insert(event(3, 60, 2, 4)));
        // Ticks 2..6 are taken for (3, 60); 6 is free again.
        assert!(!table.insert(event(3, 60, 5, 1)));
        assert!(table.insert(event(3, 60, 6, 1)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn different_channel_or_note_does_not_collide() {
        let mut table = EventTable::new();
        assert!(table.insert(event(3, 60, 0, 4)));
        assert!(table.insert(event(4, 60, 0, 4)));
        assert!(table.insert(event(3, 61, 0, 4)));
        assert_eq!(table.len(), 3);
    }
}
